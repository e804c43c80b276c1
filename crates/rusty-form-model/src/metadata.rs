// File: crates/rusty-form-model/src/metadata.rs
// Purpose: Label / hint / placeholder resolution with override maps

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FormModelError, Result};
use crate::label::generate_label;

/// Attribute name -> display text
pub type OverrideMap = IndexMap<String, String>;

type OverrideFn = Arc<dyn Fn() -> OverrideMap + Send + Sync>;

/// The kinds of display text a form attribute carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataKind {
    Hint,
    Label,
    Placeholder,
}

impl MetadataKind {
    pub const ALL: [MetadataKind; 3] = [Self::Hint, Self::Label, Self::Placeholder];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hint => "hint",
            Self::Label => "label",
            Self::Placeholder => "placeholder",
        }
    }

    /// Text used when neither a nested value nor an override exists
    pub fn default_text(&self, attribute: &str) -> String {
        match self {
            Self::Label => generate_label(attribute),
            Self::Hint | Self::Placeholder => String::new(),
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host model knows about its own attributes
///
/// Implemented by the type a [`FormModel`](crate::FormModel) wraps.
pub trait ModelAttributes {
    /// Whether the model has an attribute with this name
    fn has_attribute(&self, attribute: &str) -> bool;

    /// Metadata for a nested attribute (e.g. `address.city` on an embedded
    /// sub-form). `None` or an empty string means there is no nested value.
    fn nested_metadata(&self, _kind: MetadataKind, _attribute: &str) -> Option<String> {
        None
    }
}

impl<T: ModelAttributes + ?Sized> ModelAttributes for &T {
    fn has_attribute(&self, attribute: &str) -> bool {
        (**self).has_attribute(attribute)
    }

    fn nested_metadata(&self, kind: MetadataKind, attribute: &str) -> Option<String> {
        (**self).nested_metadata(kind, attribute)
    }
}

impl<T: ModelAttributes + ?Sized> ModelAttributes for Box<T> {
    fn has_attribute(&self, attribute: &str) -> bool {
        (**self).has_attribute(attribute)
    }

    fn nested_metadata(&self, kind: MetadataKind, attribute: &str) -> Option<String> {
        (**self).nested_metadata(kind, attribute)
    }
}

/// A flat model described by its attribute names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldList(pub &'static [&'static str]);

impl ModelAttributes for FieldList {
    fn has_attribute(&self, attribute: &str) -> bool {
        self.0.contains(&attribute)
    }
}

/// Override maps for hints, labels and placeholders
///
/// Each map comes from a callback that is invoked on every lookup, so a form
/// can compute its texts (e.g. from a translation catalog) at request time.
/// Kinds without a callback behave as an empty map.
#[derive(Clone, Default)]
pub struct Overrides {
    hints: Option<OverrideFn>,
    labels: Option<OverrideFn>,
    placeholders: Option<OverrideFn>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback producing the override map for `kind`
    pub fn with_fn<F>(mut self, kind: MetadataKind, callback: F) -> Self
    where
        F: Fn() -> OverrideMap + Send + Sync + 'static,
    {
        let callback: OverrideFn = Arc::new(callback);
        match kind {
            MetadataKind::Hint => self.hints = Some(callback),
            MetadataKind::Label => self.labels = Some(callback),
            MetadataKind::Placeholder => self.placeholders = Some(callback),
        }
        self
    }

    /// Set a fixed override map for `kind`
    pub fn with_map<I, K, V>(self, kind: MetadataKind, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: OverrideMap = entries
            .into_iter()
            .map(|(attribute, text)| (attribute.into(), text.into()))
            .collect();
        self.with_fn(kind, move || map.clone())
    }

    pub fn hints_fn<F>(self, callback: F) -> Self
    where
        F: Fn() -> OverrideMap + Send + Sync + 'static,
    {
        self.with_fn(MetadataKind::Hint, callback)
    }

    pub fn labels_fn<F>(self, callback: F) -> Self
    where
        F: Fn() -> OverrideMap + Send + Sync + 'static,
    {
        self.with_fn(MetadataKind::Label, callback)
    }

    pub fn placeholders_fn<F>(self, callback: F) -> Self
    where
        F: Fn() -> OverrideMap + Send + Sync + 'static,
    {
        self.with_fn(MetadataKind::Placeholder, callback)
    }

    pub fn hints<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_map(MetadataKind::Hint, entries)
    }

    pub fn labels<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_map(MetadataKind::Label, entries)
    }

    pub fn placeholders<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_map(MetadataKind::Placeholder, entries)
    }

    /// Current override map for `kind`, empty when none was configured
    pub fn get(&self, kind: MetadataKind) -> OverrideMap {
        let callback = match kind {
            MetadataKind::Hint => &self.hints,
            MetadataKind::Label => &self.labels,
            MetadataKind::Placeholder => &self.placeholders,
        };
        callback.as_ref().map(|callback| callback()).unwrap_or_default()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("hints", &self.hints.is_some())
            .field("labels", &self.labels.is_some())
            .field("placeholders", &self.placeholders.is_some())
            .finish()
    }
}

/// Resolve display text of `kind` for `attribute`
///
/// Order: existence check, nested value, override map, kind default.
pub fn resolve<M>(
    model: &M,
    overrides: &Overrides,
    kind: MetadataKind,
    attribute: &str,
) -> Result<String>
where
    M: ModelAttributes + ?Sized,
{
    if !model.has_attribute(attribute) {
        tracing::debug!(attribute, %kind, "metadata requested for unknown attribute");
        return Err(FormModelError::attribute_not_found(attribute));
    }

    if let Some(nested) = model
        .nested_metadata(kind, attribute)
        .filter(|text| !text.is_empty())
    {
        tracing::debug!(attribute, %kind, "using nested metadata");
        return Ok(nested);
    }

    if let Some(text) = overrides.get(kind).shift_remove(attribute) {
        return Ok(text);
    }

    tracing::debug!(attribute, %kind, "no override, using default");
    Ok(kind.default_text(attribute))
}
