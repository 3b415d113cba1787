//! Form field descriptors shared by the input and select widgets.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Base class of a field wrapper.
pub const FIELD_CLASS: &str = "form-field";

/// Default text of the select placeholder option.
pub const DEFAULT_SELECT_PLACEHOLDER: &str = "Seleccione una opción";

/// Class attribute of a field wrapper.
#[must_use]
pub fn field_class(has_error: bool) -> String {
    if has_error {
        format!("{FIELD_CLASS} {FIELD_CLASS}--error")
    } else {
        FIELD_CLASS.to_string()
    }
}

/// A validation message that is actually worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError(String);

impl FieldError {
    /// Normalise an optional message; only an empty message counts as no error.
    #[must_use]
    pub fn visible(message: Option<&str>) -> Option<Self> {
        message
            .filter(|text| !text.is_empty())
            .map(|text| Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTML `type` of a text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Date,
    Search,
    Tel,
}

impl InputKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
            Self::Search => "search",
            Self::Tel => "tel",
        }
    }
}

/// One `{value, label}` choice of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered choices of a select field, with unique values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectOptions(Vec<SelectOption>);

impl SelectOptions {
    /// Validate and wrap a list of options, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateOptionValue`] naming the first
    /// value that appears twice.
    pub fn new(options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        if let Some(value) = first_duplicate(&options) {
            tracing::warn!(%value, "rejecting duplicate select option");
            return Err(ValidationError::DuplicateOptionValue(value));
        }
        Ok(Self(options))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SelectOption] {
        &self.0
    }

    /// Label of the option carrying `value`, if any.
    #[must_use]
    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

fn first_duplicate(options: &[SelectOption]) -> Option<String> {
    let mut seen = HashSet::with_capacity(options.len());
    options
        .iter()
        .find(|option| !seen.insert(option.value.as_str()))
        .map(|option| option.value.clone())
}

impl<'de> Deserialize<'de> for SelectOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = Vec::<SelectOption>::deserialize(deserializer)?;
        Self::new(options).map_err(serde::de::Error::custom)
    }
}

/// An `<option>` as rendered by the select widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

/// The rendered option list: the disabled placeholder first, then the
/// caller's options untouched.
#[must_use]
pub fn select_entries(options: &SelectOptions, placeholder: &str, current: &str) -> Vec<OptionEntry> {
    let placeholder = OptionEntry {
        value: String::new(),
        label: placeholder.to_string(),
        disabled: true,
        selected: current.is_empty(),
    };
    std::iter::once(placeholder)
        .chain(options.as_slice().iter().map(|option| OptionEntry {
            value: option.value.clone(),
            label: option.label.clone(),
            disabled: false,
            selected: !current.is_empty() && option.value == current,
        }))
        .collect()
}
