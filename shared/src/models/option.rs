//! Option Group / Option Value Model
//!
//! An option group is one axis of variation ("Color"), an option value is one
//! entry on that axis ("Red"). Groups always end with an empty placeholder
//! row that the editor fills in.

use serde::{Deserialize, Serialize};

/// One concrete value within an option group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Random alphanumeric token, stable for the editing session
    pub id: String,
    pub value: String,
    /// Optional image reference (hash or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl OptionValue {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            image: None,
        }
    }

    /// Empty input row
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(id, "")
    }

    /// Whitespace-only text counts as empty
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Character count shown next to the input
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

/// Named axis of variation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub id: String,
    /// Empty name marks the group as unused
    pub name: String,
    pub values: Vec<OptionValue>,
}

impl OptionGroup {
    /// Unnamed group holding a single placeholder row
    pub fn new(id: impl Into<String>, placeholder_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            values: vec![OptionValue::placeholder(placeholder_id)],
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Values with non-empty text, in entry order
    pub fn filled_values(&self) -> impl Iterator<Item = &OptionValue> {
        self.values.iter().filter(|v| !v.is_empty())
    }

    /// Named and carrying at least one filled value
    pub fn is_active(&self) -> bool {
        self.is_named() && self.filled_values().next().is_some()
    }

    /// The trailing empty row, if the group currently ends with one
    pub fn trailing_placeholder(&self) -> Option<&OptionValue> {
        self.values.last().filter(|v| v.is_empty())
    }

    pub fn value(&self, value_id: &str) -> Option<&OptionValue> {
        self.values.iter().find(|v| v.id == value_id)
    }

    /// Find a filled value by its text
    pub fn value_by_text(&self, text: &str) -> Option<&OptionValue> {
        self.filled_values().find(|v| v.value == text)
    }
}
