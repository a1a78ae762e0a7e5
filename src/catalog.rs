//! Collaborators supplied by the host: the modifier catalog, the country
//! table and the pre-rendered base icon.

use std::collections::{BTreeMap, BTreeSet};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::descriptor::SymbolDescriptor;
use crate::modifiers::Modifier;
use crate::types::BoundsBox;

/// Which modifiers a symbol is allowed to carry.
pub trait ModifierCatalog {
    fn supports(&self, symbol: &SymbolDescriptor, key: Modifier) -> bool;
}

impl<T: ModifierCatalog + ?Sized> ModifierCatalog for &T {
    fn supports(&self, symbol: &SymbolDescriptor, key: Modifier) -> bool {
        (**self).supports(symbol, key)
    }
}

/// Catalog that accepts every key for every symbol
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl ModifierCatalog for AllowAll {
    fn supports(&self, _symbol: &SymbolDescriptor, _key: Modifier) -> bool {
        true
    }
}

/// Explicit key lists per basic id (symbol set + entity code).
///
/// Symbols with no entry fall back to `fallback`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    entries: BTreeMap<String, BTreeSet<Modifier>>,
    #[serde(default)]
    fallback: BTreeSet<Modifier>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(
        mut self,
        basic_id: impl Into<String>,
        keys: impl IntoIterator<Item = Modifier>,
    ) -> Self {
        self.entries
            .entry(basic_id.into())
            .or_default()
            .extend(keys);
        self
    }

    pub fn with_fallback(mut self, keys: impl IntoIterator<Item = Modifier>) -> Self {
        self.fallback.extend(keys);
        self
    }
}

impl ModifierCatalog for StaticCatalog {
    fn supports(&self, symbol: &SymbolDescriptor, key: Modifier) -> bool {
        match self.entries.get(&symbol.basic_id()) {
            Some(keys) => keys.contains(&key),
            None => self.fallback.contains(&key),
        }
    }
}

/// Numeric country code to three-letter code.
pub trait CountryLookup {
    fn alpha3(&self, code: u16) -> Option<String>;
}

impl<T: CountryLookup + ?Sized> CountryLookup for &T {
    fn alpha3(&self, code: u16) -> Option<String> {
        (**self).alpha3(code)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoCountries;

impl CountryLookup for NoCountries {
    fn alpha3(&self, _code: u16) -> Option<String> {
        None
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCountries(BTreeMap<u16, String>);

impl StaticCountries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: u16, alpha3: impl Into<String>) -> Self {
        self.0.insert(code, alpha3.into());
        self
    }
}

impl CountryLookup for StaticCountries {
    fn alpha3(&self, code: u16) -> Option<String> {
        self.0.get(&code).cloned()
    }
}

/// Pre-rendered base symbol: frame, fill and main icon.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseIcon {
    /// SVG markup, drawn as-is
    pub content: String,
    /// Tight bounds of the drawn symbol
    pub bounds: BoundsBox,
    /// Point that sits on the symbol's map location
    pub anchor: DVec2,
}

impl BaseIcon {
    pub fn new(content: impl Into<String>, bounds: BoundsBox, anchor: DVec2) -> Self {
        BaseIcon {
            content: content.into(),
            bounds,
            anchor,
        }
    }

    /// Empty content with the anchor at the bounds center.
    pub fn placeholder(bounds: BoundsBox) -> Self {
        BaseIcon {
            content: String::new(),
            anchor: bounds.center(),
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SymbolSet;

    #[test]
    fn static_catalog_uses_entry_then_fallback() {
        let catalog = StaticCatalog::new()
            .with_entry("10121100", [Modifier::T, Modifier::B])
            .with_fallback([Modifier::W]);
        let infantry = SymbolDescriptor::new(SymbolSet::LandUnit, 121100);
        let other = SymbolDescriptor::new(SymbolSet::LandUnit, 130000);
        assert!(catalog.supports(&infantry, Modifier::T));
        assert!(!catalog.supports(&infantry, Modifier::W));
        assert!(catalog.supports(&other, Modifier::W));
        assert!(!catalog.supports(&other, Modifier::T));
    }

    #[test]
    fn static_countries() {
        let countries = StaticCountries::new().with(840, "USA");
        assert_eq!(countries.alpha3(840).as_deref(), Some("USA"));
        assert_eq!(countries.alpha3(124), None);
        assert_eq!(NoCountries.alpha3(840), None);
    }
}
