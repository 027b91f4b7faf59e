use crate::domain::model::ProductRecord;
use crate::utils::repr::PyRepr;
use indexmap::IndexMap;
use serde::Serialize;

/// Two-level product table: category, then product name.
///
/// Reading through [`Inventory::entry`] creates missing categories and
/// products on the spot, filled with [`ProductRecord::default`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    categories: IndexMap<String, IndexMap<String, ProductRecord>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-insert-default at `[category][product]`.
    pub fn entry(&mut self, category: &str, product: &str) -> &mut ProductRecord {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(product.to_string())
            .or_default()
    }

    /// Replaces the record at `[category][product]`, returning the old one.
    pub fn insert(
        &mut self,
        category: &str,
        product: &str,
        record: ProductRecord,
    ) -> Option<ProductRecord> {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(product.to_string(), record)
    }

    /// Lookup that never creates entries.
    pub fn peek(&self, category: &str, product: &str) -> Option<&ProductRecord> {
        self.categories.get(category)?.get(product)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn category_len(&self, category: &str) -> usize {
        self.categories.get(category).map_or(0, IndexMap::len)
    }

    pub fn total_records(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }
}

impl PyRepr for Inventory {
    fn repr(&self) -> String {
        self.categories.repr()
    }
}
