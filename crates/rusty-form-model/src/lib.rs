//! # rusty-form-model
//!
//! Helpers for web-form data objects: per-attribute error accumulation and
//! label / hint / placeholder text with user-supplied overrides.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_form_model::{FieldList, FormModel, Overrides};
//!
//! let overrides = Overrides::new().labels([("amount", "Amount label text.")]);
//! let mut form = FormModel::with_overrides(FieldList(&["amount", "server"]), overrides);
//!
//! assert_eq!(form.label("amount").unwrap(), "Amount label text.");
//! assert_eq!(form.label("server").unwrap(), "Server");
//! assert!(form.label("missing").is_err());
//!
//! form.error_mut().add("amount", "Amount must be positive.");
//! assert_eq!(form.get_first_error("amount"), "Amount must be positive.");
//! ```
//!
//! ## Architecture
//!
//! - **`rusty-form-errors`** - the [`ErrorCollection`] store (re-exported)
//! - [`metadata`] - override maps and the resolution chain
//!   (nested value, override, generated default)
//! - [`config`] - override maps loaded from `form_metadata.toml`
//! - [`FormModel`] - ties a host model, its errors and its overrides together
//!
//! The host model plugs in through [`ModelAttributes`], which answers whether an
//! attribute exists and, optionally, resolves metadata for nested attributes.

use std::collections::BTreeMap;

pub mod config;
pub mod error;
pub mod form;
pub mod label;
pub mod metadata;

pub use config::MetadataConfig;
pub use error::{FormModelError, Result};
pub use form::FormModel;
pub use label::generate_label;
pub use metadata::{FieldList, MetadataKind, ModelAttributes, OverrideMap, Overrides};
pub use rusty_form_errors::{self as errors, ErrorCollection};

/// Validation hook for form models
///
/// Implement this to let [`FormModel::validate`] ingest the reported errors.
pub trait Validate {
    /// Validate the model and return errors by attribute name
    fn validate(&self) -> std::result::Result<(), BTreeMap<String, Vec<String>>>;
}
