use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidateLength;

/// Key for errors that belong to the form as a whole.
pub const NON_FIELD_ERRORS: &str = "__all__";

pub(crate) const REQUIRED: &str = "This field is required.";

/// Field name to error messages, in field name order.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }
}

/// Trims a submitted value; blank input counts as absent.
pub(crate) fn clean_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn check_max_chars(errors: &mut FormErrors, field: &str, value: &str, max: usize) {
    if !value.validate_length(None, Some(max as u64), None) {
        errors.add(
            field,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max,
                value.chars().count()
            ),
        );
    }
}

/// Cleans a required text field, recording an error when missing or too long.
pub(crate) fn required_text(
    errors: &mut FormErrors,
    field: &str,
    value: &Option<String>,
    max: usize,
) -> Option<String> {
    match clean_text(value) {
        Some(value) => {
            check_max_chars(errors, field, &value, max);
            Some(value)
        }
        None => {
            errors.add(field, REQUIRED);
            None
        }
    }
}

pub(crate) fn invalid_choice(value: &str) -> String {
    format!(
        "Select a valid choice. {} is not one of the available choices.",
        value
    )
}
