//! Ordered style property maps

use std::fmt;

/// Insertion-ordered mapping from style property to value.
///
/// Setting an existing property replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, keeping its original position if already present
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Gets the value of a property
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no property is set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the map as an inline CSS declaration list
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StyleMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// Formats a pixel length, printing negative zero as `0px`
pub(crate) fn px(value: f64) -> String {
    format!("{}px", value + 0.0)
}
