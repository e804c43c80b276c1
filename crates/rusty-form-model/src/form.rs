// File: crates/rusty-form-model/src/form.rs
// Purpose: Form model wrapper owning errors and display-text overrides

use rusty_form_errors::ErrorCollection;

use crate::error::Result;
use crate::metadata::{self, MetadataKind, ModelAttributes, OverrideMap, Overrides};
use crate::Validate;

/// A form data object with its validation errors and display texts
///
/// Wraps the host model `M`, which decides which attributes exist. Each form
/// owns exactly one [`ErrorCollection`].
///
/// # Example
///
/// ```rust
/// use rusty_form_model::{FieldList, FormModel, Overrides};
///
/// let overrides = Overrides::new()
///     .hints([("email", "We never share your email.")])
///     .placeholders([("email", "you@example.com")]);
/// let form = FormModel::with_overrides(FieldList(&["email"]), overrides);
///
/// assert_eq!(form.label("email").unwrap(), "Email");
/// assert_eq!(form.hint("email").unwrap(), "We never share your email.");
/// assert_eq!(form.placeholder("email").unwrap(), "you@example.com");
/// ```
#[derive(Debug, Clone)]
pub struct FormModel<M> {
    model: M,
    errors: ErrorCollection,
    overrides: Overrides,
}

impl<M: ModelAttributes> FormModel<M> {
    pub fn new(model: M) -> Self {
        Self::with_overrides(model, Overrides::default())
    }

    pub fn with_overrides(model: M, overrides: Overrides) -> Self {
        Self {
            model,
            errors: ErrorCollection::new(),
            overrides,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn into_inner(self) -> M {
        self.model
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn set_overrides(&mut self, overrides: Overrides) {
        self.overrides = overrides;
    }

    /// The form's error collection
    pub fn error(&self) -> &ErrorCollection {
        &self.errors
    }

    pub fn error_mut(&mut self) -> &mut ErrorCollection {
        &mut self.errors
    }

    /// First error for `attribute`, empty if there is none
    pub fn get_first_error(&self, attribute: &str) -> &str {
        self.errors.get_first(attribute)
    }

    /// Whether `attribute` has errors, or whether any attribute does when `None`
    pub fn has_error(&self, attribute: Option<&str>) -> bool {
        self.errors.has(attribute)
    }

    /// Display text of `kind` for `attribute`
    ///
    /// Fails with [`AttributeNotFound`](crate::FormModelError::AttributeNotFound)
    /// when the model has no such attribute. Otherwise the first of these wins:
    /// a non-empty nested value from the model, the override map entry, the
    /// default (generated label, or empty for hints and placeholders).
    pub fn metadata(&self, kind: MetadataKind, attribute: &str) -> Result<String> {
        metadata::resolve(&self.model, &self.overrides, kind, attribute)
    }

    pub fn hint(&self, attribute: &str) -> Result<String> {
        self.metadata(MetadataKind::Hint, attribute)
    }

    /// Label for `attribute`, generated from its name when not overridden
    pub fn label(&self, attribute: &str) -> Result<String> {
        self.metadata(MetadataKind::Label, attribute)
    }

    pub fn placeholder(&self, attribute: &str) -> Result<String> {
        self.metadata(MetadataKind::Placeholder, attribute)
    }

    pub fn hints(&self) -> OverrideMap {
        self.overrides.get(MetadataKind::Hint)
    }

    pub fn labels(&self) -> OverrideMap {
        self.overrides.get(MetadataKind::Label)
    }

    pub fn placeholders(&self) -> OverrideMap {
        self.overrides.get(MetadataKind::Placeholder)
    }
}

impl<M: ModelAttributes + Validate> FormModel<M> {
    /// Run the model's validation and store its errors
    ///
    /// Previous errors are replaced by the reported ones, or cleared when the
    /// model is valid. Returns whether the model is valid.
    pub fn validate(&mut self) -> bool {
        match self.model.validate() {
            Ok(()) => {
                self.errors.clear(None);
                true
            }
            Err(errors) => {
                tracing::debug!(attributes = errors.len(), "form validation failed");
                self.errors.replace_all(errors);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldList;
    use std::collections::BTreeMap;

    struct Signup {
        username: String,
    }

    impl ModelAttributes for Signup {
        fn has_attribute(&self, attribute: &str) -> bool {
            attribute == "username"
        }
    }

    impl Validate for Signup {
        fn validate(&self) -> std::result::Result<(), BTreeMap<String, Vec<String>>> {
            if self.username.is_empty() {
                let mut errors = BTreeMap::new();
                errors.insert("username".to_string(), vec!["Username is required".to_string()]);
                return Err(errors);
            }
            Ok(())
        }
    }

    #[test]
    fn test_validate_ingests_and_clears() {
        let mut form = FormModel::new(Signup {
            username: String::new(),
        });
        form.error_mut().add("other", "stale");

        assert!(!form.validate());
        assert_eq!(form.get_first_error("username"), "Username is required");
        assert!(!form.has_error(Some("other")));

        form.model_mut().username = "alice".to_string();

        assert!(form.validate());
        assert!(!form.has_error(None));
    }

    #[test]
    fn test_override_accessors_default_to_empty() {
        let form = FormModel::new(FieldList(&["amount"]));

        assert!(form.hints().is_empty());
        assert!(form.labels().is_empty());
        assert!(form.placeholders().is_empty());
    }
}
