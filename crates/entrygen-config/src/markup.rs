//! Classification of tag-like strings for the markup helper.
//!
//! A tag is either looked up as a CSS selector or expanded as an
//! abbreviation. The decision is made once, up front, from the characters
//! the tag contains.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Characters shared by selectors and abbreviations
const SHARED_KEYWORDS: &[&str] = &[" ", ".", "#", "=", "+", "~", "[", "]"];

/// Keywords only meaningful to the abbreviation syntax
const ABBREVIATION_KEYWORDS: &[&str] = &["*", ">", "lorem", "$", "^", "(", ")", "{", "}", ":"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// Look the element up; expand as an abbreviation if nothing matches
    Selector,
    /// Expand into new markup
    Abbreviation,
}

/// Classify a string tag.
///
/// Abbreviation-only keywords win over shared ones. A bare tag name (`div`)
/// is an abbreviation: expanding it creates exactly that element.
pub fn classify_tag(tag: &str) -> TagKind {
    if ABBREVIATION_KEYWORDS.iter().any(|k| tag.contains(k)) {
        TagKind::Abbreviation
    } else if SHARED_KEYWORDS.iter().any(|k| tag.contains(k)) {
        TagKind::Selector
    } else {
        TagKind::Abbreviation
    }
}

/// Classify a loosely-typed tag value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTagType` for anything but a JSON string.
pub fn classify(tag: &Value) -> Result<TagKind> {
    match tag {
        Value::String(tag) => Ok(classify_tag(tag)),
        other => Err(ConfigError::InvalidTagType(json_type_name(other).to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
