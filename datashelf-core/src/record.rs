//! The `Record` entity and validated field newtypes
//!
//! All user input is validated when constructing these types. Invalid input
//! returns `ValidationError`, not panic, so persisted records always satisfy
//! the field invariants.

use serde::Serialize;

use crate::validation::ValidationError;

/// Maximum length for a record's value field
const MAX_VALUE_LEN: usize = 200;

/// Maximum length for a record's category field
const MAX_CATEGORY_LEN: usize = 100;

/// A persisted record: free-form value plus its category label.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub value: String,
    pub category: String,
}

/// Validated record value (non-empty, bounded length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValue(String);

impl RecordValue {
    /// Create a new record value.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 200 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "value" });
        }

        if s.chars().count() > MAX_VALUE_LEN {
            return Err(ValidationError::TooLong {
                field: "value",
                max: MAX_VALUE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RecordValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated category label (non-empty, bounded length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCategory(String);

impl RecordCategory {
    /// Create a new category label.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 100 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "category" });
        }

        if s.chars().count() > MAX_CATEGORY_LEN {
            return Err(ValidationError::TooLong {
                field: "category",
                max: MAX_CATEGORY_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RecordCategory {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
