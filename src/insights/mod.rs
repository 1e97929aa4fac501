//! Document models for `SECURITY-INSIGHTS.yml`.
//!
//! Two incompatible schema revisions exist in the wild:
//!
//! | Module | Schema | Shape | Dates |
//! |--------|--------|-------|-------|
//! | [`v1`] | 1.0.0 (legacy) | flat sections | RFC3339 timestamps |
//! | [`v2`] | 2.0.0 (current) | nested `project` / `repository` | `YYYY-MM-DD` |
//!
//! The [`v2::SecurityInsights`] type is the authoritative structure for the
//! current schema. The validator never touches its fields directly; it reads
//! documents through the narrow [`SecurityInsightsDocument`] trait so that the
//! structure can grow with the upstream schema without the checks changing.
//!
//! YAML authors freely write `schema-version: 2.0.0` (a string) or
//! `schema-version: 1.0` (a float). [`SchemaVersion`] keeps that ambiguity as a
//! tagged value and renders it canonically with its [`Display`](fmt::Display)
//! impl.

pub mod v1;
pub mod v2;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::fmt;

/// A `schema-version` value exactly as it appeared in the document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SchemaVersion {
    /// Key missing or explicitly `null`.
    #[default]
    Absent,
    /// Unquoted numeric scalar, e.g. `schema-version: 1.0`.
    Number(serde_yaml::Number),
    /// Any other scalar, e.g. `schema-version: '2.0.0'` or `2.0.0`.
    Text(String),
}

impl SchemaVersion {
    /// Returns `true` when the canonical rendering starts with `"2."`.
    pub fn is_v2(&self) -> bool {
        self.to_string().starts_with("2.")
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::Absent => Ok(()),
            SchemaVersion::Number(n) => f.write_str(&render_number(n)),
            SchemaVersion::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(SchemaVersion::Absent),
            Value::Number(n) => Ok(SchemaVersion::Number(n)),
            Value::String(s) => Ok(SchemaVersion::Text(s)),
            Value::Bool(b) => Ok(SchemaVersion::Text(b.to_string())),
            Value::Tagged(tagged) => match tagged.value {
                Value::String(s) => Ok(SchemaVersion::Text(s)),
                Value::Number(n) => Ok(SchemaVersion::Number(n)),
                _ => Err(serde::de::Error::custom(
                    "schema-version must be a scalar value",
                )),
            },
            Value::Sequence(_) | Value::Mapping(_) => Err(serde::de::Error::custom(
                "schema-version must be a scalar value",
            )),
        }
    }
}

/// Renders a YAML number the way it reads as a version: integral floats lose
/// their fractional part (`2.0` → `"2"`), everything else keeps its shortest
/// decimal form.
fn render_number(n: &serde_yaml::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64's Display already drops a zero fraction.
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

/// Text form of a YAML scalar; `None` for sequences and mappings.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s),
        Value::Number(n) => Some(render_number(&n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => match tagged.value {
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
            inner => scalar_text(inner),
        },
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn scalar_or_error<E: serde::de::Error>(value: Value) -> Result<String, E> {
    let kind = match &value {
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        _ => "tagged collection",
    };
    scalar_text(value)
        .ok_or_else(|| E::custom(format!("invalid type: {kind}, expected a string")))
}

/// Deserializes any YAML scalar into a `String`.
///
/// Hand-written documents routinely leave versions and dates unquoted, which
/// YAML resolves to numbers or booleans. A missing value or `null` becomes the
/// empty string so presence checks stay a simple `is_empty()`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(String::new()),
        Some(value) => scalar_or_error(value),
    }
}

/// Like [`lenient_string`], keeping `null` as `None`.
pub(crate) fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_or_error(value).map(Some),
    }
}

/// A list of scalars, each rendered as text. `null` is an empty list.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items.into_iter().map(scalar_or_error).collect(),
        Some(_) => Err(serde::de::Error::custom(
            "invalid type, expected a sequence",
        )),
    }
}

/// Parses the first YAML document in `bytes` into `T`.
///
/// Later documents in the stream are ignored. An empty stream (no content,
/// or comments only) or an empty first document yields `T::default()`
/// rather than an error; a document that is present but does not match the
/// shape of `T` is an error.
pub fn parse_document<T>(bytes: &[u8]) -> Result<T, serde_yaml::Error>
where
    T: serde::de::DeserializeOwned + Default,
{
    let Some(document) = serde_yaml::Deserializer::from_slice(bytes).next() else {
        return Ok(T::default());
    };
    match Value::deserialize(document)? {
        Value::Null => Ok(T::default()),
        value => serde_yaml::from_value(value),
    }
}

/// An administrator or core-team member as the validator sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactView<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Read-only view over a schema 2.x document.
///
/// This is the only surface the schema 2.x validator depends on. Any type
/// modelling the upstream schema can be validated by implementing it.
pub trait SecurityInsightsDocument {
    fn schema_version(&self) -> &SchemaVersion;
    fn header_url(&self) -> &str;
    fn last_updated(&self) -> &str;
    fn last_reviewed(&self) -> &str;
    fn project_name(&self) -> &str;
    fn administrators(&self) -> Vec<ContactView<'_>>;
    fn repository_url(&self) -> &str;
    fn repository_status(&self) -> &str;
}
