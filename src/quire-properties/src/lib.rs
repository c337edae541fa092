//! Registry of formatting-object properties and the value categories
//! each of them accepts.
//!
//! A registry is consumed through the [`PropertyRegistry`] trait. The
//! [`PropertyTable`] provided here implements it over an ordered map
//! which can be loaded from JSON of the form
//!
//! ```json
//! { "font-size": { "categories": ["length", "percentage"] } }
//! ```
//!
//! or taken from the [built-in](PropertyTable::builtin) set of common
//! properties.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::io;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

mod builtin;

mod categories;
pub use categories::*;

mod registry;
pub use registry::*;

/// Errors that may occur when loading a [`PropertyTable`].
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occured while reading a property table.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// An error occurred during JSON deserialization.
    #[error("{0}")]
    Serde(serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match value.classify() {
            Category::Io => Self::Io(value.into()),
            _ => Self::Serde(value),
        }
    }
}

/// The definition of a single property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// The property name.
    #[serde(skip)]
    pub name: String,
    /// The categories of value the property accepts.
    pub categories: Categories,
}

/// An ordered table of property definitions.
///
/// The [`PropertyId`] of a property is its position in the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyTable(IndexMap<String, PropertyDef>);

impl PropertyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table of common formatting-object properties.
    pub fn builtin() -> Self {
        let mut table = Self(IndexMap::with_capacity(builtin::PROPERTIES.len()));
        for &(name, categories) in builtin::PROPERTIES {
            table.insert(name, categories);
        }

        table
    }

    /// Deserializes a property table in JSON format from a given reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
        let table: Self = serde_json::from_reader(reader)?;
        log::debug!("Loaded property table with {} entries", table.len());

        Ok(table)
    }

    /// Deserializes a property table in JSON format from a given string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> Result<Self, Error> {
        let table: Self = serde_json::from_str(data)?;
        log::debug!("Loaded property table with {} entries", table.len());

        Ok(table)
    }

    /// Defines a property, replacing the categories of an existing
    /// entry with the same name.
    ///
    /// A replaced entry keeps its [`PropertyId`].
    pub fn insert(&mut self, name: &str, categories: Categories) -> PropertyId {
        let def = PropertyDef {
            name: name.to_owned(),
            categories,
        };

        let (index, old) = self.0.insert_full(name.to_owned(), def);
        if let Some(old) = old {
            log::warn!(
                "Redefining property '{name}' ({} -> {categories})",
                old.categories
            );
        }

        PropertyId(index as u32)
    }

    /// Merges all entries from `other` into `self`.
    ///
    /// New names are appended; known names are redefined in place.
    pub fn merge(&mut self, other: PropertyTable) {
        self.0.reserve(other.len());

        for (name, def) in other.0 {
            self.insert(&name, def.categories);
        }
    }

    /// Gets the definition behind a handle.
    pub fn get(&self, id: PropertyId) -> Option<&PropertyDef> {
        self.0.get_index(id.0 as usize).map(|(_, def)| def)
    }

    /// Gets a definition by name.
    pub fn get_by_name(&self, name: &str) -> Option<&PropertyDef> {
        self.0.get(name)
    }

    /// Iterates over all definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &PropertyDef)> + '_ {
        self.0
            .values()
            .enumerate()
            .map(|(i, def)| (PropertyId(i as u32), def))
    }

    /// Gets the number of properties in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PropertyRegistry for PropertyTable {
    fn property_index(&self, name: &str) -> Option<PropertyId> {
        self.0.get_index_of(name).map(|i| PropertyId(i as u32))
    }

    fn property_name(&self, id: PropertyId) -> Option<&str> {
        self.get(id).map(|def| def.name.as_str())
    }

    fn legal_categories(&self, id: PropertyId) -> Option<Categories> {
        self.get(id).map(|def| def.categories)
    }
}

impl<'de> Deserialize<'de> for PropertyTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = IndexMap::<String, PropertyDef>::deserialize(deserializer)?;
        for (name, def) in map.iter_mut() {
            def.name.clone_from(name);
        }

        Ok(Self(map))
    }
}
