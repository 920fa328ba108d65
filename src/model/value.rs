//! Leaf values of certificate data and how loosely-typed input (LLM output, form posts) is
//! turned into them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// What any missing or blank field renders as
pub const PLACEHOLDER: &str = "-";

/// A display string that may be absent. Blank strings count as absent. Numbers and booleans
/// given where text was expected are kept in their JSON spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValue(Option<String>);

impl FieldValue {
    pub fn new<S: Into<String>>(text: S) -> FieldValue {
        FieldValue(Some(text.into()))
    }

    pub fn none() -> FieldValue {
        FieldValue(None)
    }

    /// The trimmed text, if there is any
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn is_present(&self) -> bool {
        self.as_str().is_some()
    }

    /// The text to print: the value itself, or [PLACEHOLDER]
    pub fn display(&self) -> &str {
        self.as_str().unwrap_or(PLACEHOLDER)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::new(text)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::new(text)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(text: Option<String>) -> Self {
        FieldValue(text)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => FieldValue(None),
            Value::String(text) => FieldValue(Some(text)),
            other => FieldValue(Some(other.to_string())),
        })
    }
}

/// Deserialize an optional measurement value from a JSON number, a numeric string (decimal
/// comma allowed), `null`, or a placeholder such as `"-"`. Anything else is treated as missing.
pub fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() || text == PLACEHOLDER {
                return None;
            }
            match text.replace(',', ".").parse::<f64>() {
                Ok(number) if number.is_finite() => Some(number),
                _ => {
                    tracing::warn!(value = text, "ignoring non-numeric measurement value");
                    None
                }
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_and_missing_render_placeholder() {
        assert_eq!(FieldValue::none().display(), "-");
        assert_eq!(FieldValue::new("   ").display(), "-");
        assert_eq!(FieldValue::new(" Mitutoyo ").display(), "Mitutoyo");
    }

    #[test]
    fn accepts_non_string_json() {
        let value: FieldValue = serde_json::from_value(json!(23.5)).unwrap();
        assert_eq!(value.display(), "23.5");
        let value: FieldValue = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(value.display(), "true");
        let value: FieldValue = serde_json::from_value(json!(null)).unwrap();
        assert!(!value.is_present());
    }

    #[test]
    fn numbers_parse_leniently() {
        assert_eq!(number_from_value(&json!(12.5)), Some(12.5));
        assert_eq!(number_from_value(&json!("12,5")), Some(12.5));
        assert_eq!(number_from_value(&json!(" -0.02 ")), Some(-0.02));
        assert_eq!(number_from_value(&json!("-")), None);
        assert_eq!(number_from_value(&json!("n/a")), None);
        assert_eq!(number_from_value(&json!(null)), None);
        assert_eq!(number_from_value(&json!([1])), None);
    }
}
