//! Changes - Explicit field assignments for partial updates

use super::{Entity, FieldValue};
use crate::core::{StoreError, StoreResult};

/// Ordered set of `field = value` assignments.
///
/// Only the named fields are touched by an update; assigning the same field
/// twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changes {
    entries: Vec<(String, FieldValue)>,
}

impl Changes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style assignment
    pub fn set(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Checks every assignment against the persisted fields of `E`: the name
    /// must exist and the value must fit the field's kind and nullability.
    ///
    /// The identifier is not part of `E::FIELDS`, so assigning it is rejected
    /// like any other unknown name.
    pub fn validate<E: Entity>(&self) -> StoreResult<()> {
        for (name, value) in &self.entries {
            let Some(field) = E::field(name) else {
                return Err(StoreError::unknown_field(E::NAME, name.clone()));
            };
            if !field.accepts(value) {
                return Err(StoreError::field_type(
                    E::NAME,
                    name.clone(),
                    field.describe(),
                    value.type_name(),
                ));
            }
        }
        Ok(())
    }
}

impl IntoIterator for Changes {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Changes
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut changes = Changes::new();
        for (field, value) in iter {
            changes.insert(field, value);
        }
        changes
    }
}
