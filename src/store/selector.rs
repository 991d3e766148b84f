//! Collection names and read selectors.

use std::fmt;
use std::str::FromStr;

use super::errors::StoreError;

/// A writable collection of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Fixed-wing aircraft
    Planes,
    /// Rotary-wing aircraft
    Helicopters,
}

impl Collection {
    /// Both collections in document order
    pub const ALL: [Collection; 2] = [Collection::Planes, Collection::Helicopters];

    /// Returns the collection's key in the catalog document
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Planes => "planes",
            Collection::Helicopters => "helicopters",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a mutation target. `all` is rejected: the combined view is read-only.
impl FromStr for Collection {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planes" => Ok(Collection::Planes),
            "helicopters" => Ok(Collection::Helicopters),
            other => Err(StoreError::InvalidCollection(other.to_string())),
        }
    }
}

/// A read target: one collection or the concatenated `all` view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single collection
    One(Collection),
    /// `planes` followed by `helicopters`
    All,
}

impl Selector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::One(collection) => collection.as_str(),
            Selector::All => "all",
        }
    }
}

impl From<Collection> for Selector {
    fn from(collection: Collection) -> Self {
        Selector::One(collection)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selector {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Selector::All);
        }
        s.parse::<Collection>().map(Selector::One)
    }
}
