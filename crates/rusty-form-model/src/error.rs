// File: crates/rusty-form-model/src/error.rs
// Purpose: Error type for form model metadata lookups

use thiserror::Error;

/// Errors raised by [`FormModel`](crate::FormModel) metadata lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormModelError {
    #[error("Attribute '{attribute}' does not exist.")]
    AttributeNotFound { attribute: String },
}

impl FormModelError {
    pub fn attribute_not_found(attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            attribute: attribute.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormModelError>;
