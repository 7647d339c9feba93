//! Values held in form slots.

use serde::{Deserialize, Serialize};

/// The value of one named form field.
///
/// Serializes to plain JSON: `null`, a boolean, a string or an array of
/// strings.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Boolean view; anything but `Bool(true)` reads as unchecked.
    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// Text view; non-text values read as the empty string.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            _ => "",
        }
    }

    /// List view; non-list values read as an empty selection.
    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(values) => values,
            _ => &[],
        }
    }

    /// Whether the value counts as missing for a required field.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Bool(checked) => !checked,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(values) => values.is_empty(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_plain_json() {
        assert_eq!(serde_json::to_value(FieldValue::Empty).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(FieldValue::Bool(true)).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(FieldValue::text("ada")).unwrap(),
            json!("ada")
        );
        assert_eq!(
            serde_json::to_value(FieldValue::list(["react", "vue"])).unwrap(),
            json!(["react", "vue"])
        );
    }

    #[test]
    fn deserializes_from_plain_json() {
        let value: FieldValue = serde_json::from_value(json!(["a"])).unwrap();
        assert_eq!(value, FieldValue::list(["a"]));
        let value: FieldValue = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(value, FieldValue::Empty);
    }

    #[test]
    fn blank_values() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::Bool(false).is_blank());
        assert!(FieldValue::text("   ").is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(!FieldValue::text("x").is_blank());
    }

    #[test]
    fn mismatched_views_read_empty() {
        assert!(!FieldValue::text("true").as_bool());
        assert_eq!(FieldValue::Bool(true).as_text(), "");
        assert!(FieldValue::text("a").as_list().is_empty());
    }
}
