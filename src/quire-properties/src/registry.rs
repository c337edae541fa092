use std::fmt;

use serde::Serialize;

use crate::Categories;

/// An opaque handle to a property in a [`PropertyRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PropertyId(pub u32);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of the value constraints attached to properties.
pub trait PropertyRegistry {
    /// Resolves a property name to its handle.
    fn property_index(&self, name: &str) -> Option<PropertyId>;

    /// Gets the name of the property behind a handle.
    fn property_name(&self, id: PropertyId) -> Option<&str>;

    /// Gets the categories of value the property accepts.
    fn legal_categories(&self, id: PropertyId) -> Option<Categories>;
}
