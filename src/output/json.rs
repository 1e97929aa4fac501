//! JSON output formatter.

use crate::error::{Error, Result};

/// Serializes any report as pretty-printed JSON with a trailing newline.
pub fn to_string<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(value).map_err(|e| Error::Serialize(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
