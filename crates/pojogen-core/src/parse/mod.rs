pub mod operation;
pub mod schema;

use serde_json::Value;

use crate::error::ParseError;

/// Parse a document from YAML into a generic JSON value.
///
/// Mapping keys that are not strings in YAML (such as `200:` response codes)
/// become string keys.
pub fn from_yaml(input: &str) -> Result<Value, ParseError> {
    let yaml: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
    Ok(serde_json::to_value(yaml)?)
}

/// Parse a document from JSON.
pub fn from_json(input: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a document of either surface syntax. Input starting with `{` is
/// treated as JSON, everything else as YAML.
pub fn parse_document(input: &str) -> Result<Value, ParseError> {
    if input.trim_start().starts_with('{') {
        from_json(input)
    } else {
        from_yaml(input)
    }
}
