//! Raw inputs, partial records and merged observations.
//!
//! All three are maps from field name to value. Keys are kept sorted so an
//! observation always serializes the same way regardless of merge order.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// One tick of environmental values fed to every sensor.
pub type RawInput = BTreeMap<String, f64>;

/// The fields a single sensor contributes to an observation.
pub type PartialRecord = BTreeMap<String, f64>;

/// Indentation used when an observation is written out.
const INDENT: &[u8] = b"    ";

/// Merged state accumulated from every sensor.
///
/// Merging is a patch: fields present in the incoming record are inserted or
/// overwritten, every other field keeps its previous value. Nothing is ever
/// removed except by [`Observation::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation {
    fields: BTreeMap<String, f64>,
}

impl Observation {
    /// Creates an empty observation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `patch` on top of the current fields.
    pub fn merge_patch(&mut self, patch: &PartialRecord) {
        for (field, value) in patch {
            self.fields.insert(field.clone(), *value);
        }
    }

    /// Returns the value recorded for `field`.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.fields.iter()
    }

    /// Drops every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Serializes as JSON indented with four spaces.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Observation {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Observation {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
