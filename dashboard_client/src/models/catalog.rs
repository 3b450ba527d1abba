//! The grouped catalog of symbols offered by the backend.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// All symbols the backend can serve, grouped by [`Category`].
///
/// Loaded once per session and read-only afterward. Symbol order within a
/// group is the backend's presentation order and is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    groups: IndexMap<Category, Vec<String>>,
}

impl SymbolCatalog {
    pub fn new(groups: IndexMap<Category, Vec<String>>) -> Self {
        Self { groups }
    }

    /// True until a catalog has actually been loaded.
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// The symbols available under a category, in backend order.
    pub fn symbols(&self, category: Category) -> Option<&[String]> {
        self.groups.get(&category).map(Vec::as_slice)
    }

    /// Best-effort membership check; the session does not enforce this.
    pub fn contains(&self, category: Category, symbol: &str) -> bool {
        self.symbols(category)
            .is_some_and(|syms| syms.iter().any(|s| s == symbol))
    }

    /// Iterates groups in backend order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.groups.iter().map(|(c, v)| (*c, v.as_slice()))
    }
}
