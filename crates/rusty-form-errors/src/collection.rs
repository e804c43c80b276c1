// File: crates/rusty-form-errors/src/collection.rs
// Purpose: Attribute -> ordered messages store with summary views

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validation errors of a form, grouped by attribute name
///
/// Attributes keep the order in which they were first reported and each
/// attribute keeps its messages in the order they were added. Querying an
/// attribute that has no errors never fails, it yields an empty result.
///
/// Serializes as a plain JSON object:
///
/// ```json
/// {
///     "username": ["Username is required.", "Username must contain only word characters."],
///     "email": ["Email address is invalid."]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCollection {
    errors: IndexMap<String, Vec<String>>,
}

impl ErrorCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error message for an attribute
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        let attribute = attribute.into();
        tracing::trace!(attribute = %attribute, "adding form error");
        self.errors.entry(attribute).or_default().push(message.into());
    }

    /// Replace every error in the collection with `values`
    ///
    /// Nothing from the previous state survives. Used to ingest the output of
    /// a validation pass in one go.
    pub fn replace_all<I, K, V, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = values
            .into_iter()
            .map(|(attribute, messages)| {
                (
                    attribute.into(),
                    messages.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        tracing::debug!(attributes = self.errors.len(), "replaced form errors");
    }

    /// Remove the errors of one attribute, or of all attributes when `None`
    pub fn clear(&mut self, attribute: Option<&str>) {
        match attribute {
            Some(attribute) => {
                tracing::trace!(attribute, "clearing form errors for attribute");
                self.errors.shift_remove(attribute);
            }
            None => {
                tracing::trace!("clearing all form errors");
                self.errors.clear();
            }
        }
    }

    /// All errors, keyed by attribute name
    pub fn get_all(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// Errors for a single attribute, empty if it has none
    pub fn get(&self, attribute: &str) -> &[String] {
        self.errors
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First error for an attribute, or an empty string if there is none
    pub fn get_first(&self, attribute: &str) -> &str {
        self.get(attribute)
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// First error of every attribute that has at least one error
    pub fn get_firsts(&self) -> IndexMap<String, String> {
        self.errors
            .iter()
            .filter_map(|(attribute, messages)| {
                messages
                    .first()
                    .map(|first| (attribute.clone(), first.clone()))
            })
            .collect()
    }

    /// Every message as one flat list
    ///
    /// When `only_attributes` is non-empty, only those attributes contribute.
    /// Messages always follow the collection's own attribute order.
    pub fn get_summary(&self, only_attributes: &[&str]) -> Vec<String> {
        self.errors
            .iter()
            .filter(|(attribute, _)| {
                only_attributes.is_empty() || only_attributes.contains(&attribute.as_str())
            })
            .flat_map(|(_, messages)| messages.iter().cloned())
            .collect()
    }

    /// The first message of every attribute as one flat list
    pub fn get_summary_first(&self) -> Vec<String> {
        self.errors
            .values()
            .filter_map(|messages| messages.first().cloned())
            .collect()
    }

    /// Whether `attribute` has an entry, or whether any attribute does when `None`
    pub fn has(&self, attribute: Option<&str>) -> bool {
        match attribute {
            Some(attribute) => self.errors.contains_key(attribute),
            None => !self.errors.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of attributes with an entry
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(attribute, messages)| (attribute.as_str(), messages.as_slice()))
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Appends `(attribute, message)` pairs, same as calling [`ErrorCollection::add`]
impl<K, M> Extend<(K, M)> for ErrorCollection
where
    K: Into<String>,
    M: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, M)>>(&mut self, iter: T) {
        for (attribute, message) in iter {
            self.add(attribute, message);
        }
    }
}

impl<K, M> FromIterator<(K, M)> for ErrorCollection
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, M)>>(iter: T) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl From<BTreeMap<String, Vec<String>>> for ErrorCollection {
    fn from(errors: BTreeMap<String, Vec<String>>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(errors);
        collection
    }
}

impl From<HashMap<String, Vec<String>>> for ErrorCollection {
    fn from(errors: HashMap<String, Vec<String>>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(errors);
        collection
    }
}

impl From<IndexMap<String, Vec<String>>> for ErrorCollection {
    fn from(errors: IndexMap<String, Vec<String>>) -> Self {
        Self { errors }
    }
}
