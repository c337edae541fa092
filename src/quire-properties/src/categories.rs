use std::fmt;

use bitflags::bitflags;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

bitflags! {
    /// The categories of value a property accepts.
    ///
    /// In JSON these are written as a list of lowercase names, e.g.
    /// `["length", "percentage"]`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct Categories: u32 {
        const NUMBER = 1 << 0;
        const PERCENTAGE = 1 << 1;
        const LENGTH = 1 << 2;
        const FREQUENCY = 1 << 3;
        const TIME = 1 << 4;
        const ANGLE = 1 << 5;
    }
}

impl Categories {
    /// Looks up a single category by its lowercase name.
    pub fn from_lowercase_name(name: &str) -> Option<Self> {
        Self::from_name(&name.to_ascii_uppercase())
    }
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;

            f.write_str(&name.to_ascii_lowercase())?;
        }

        if first { f.write_str("none") } else { Ok(()) }
    }
}

impl Serialize for Categories {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter_names().map(|(name, _)| name.to_ascii_lowercase()))
    }
}

struct CategoriesVisitor;

impl<'de> Visitor<'de> for CategoriesVisitor {
    type Value = Categories;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of value category names")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut categories = Categories::empty();
        while let Some(name) = seq.next_element::<String>()? {
            categories |= Categories::from_lowercase_name(&name).ok_or_else(|| {
                <A::Error as de::Error>::custom(format!("unknown value category: '{name}'"))
            })?;
        }

        Ok(categories)
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(CategoriesVisitor)
    }
}
