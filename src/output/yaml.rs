//! YAML output formatter.

use crate::error::{Error, Result};

pub fn to_string<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| Error::Serialize(e.to_string()))
}
