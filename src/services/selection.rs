//! Dataset slicing for a run.

use crate::domain::models::{Category, QaItem};

/// Number of items used by a smoke run.
pub const SMOKE_SIZE: usize = 5;

/// Which part of the dataset a run covers.
///
/// The category filter is applied first and the size limit second, so a
/// limit never silently drops a requested category before filtering. An
/// explicit `limit` takes precedence over `smoke`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Categories to keep; empty keeps every category
    pub categories: Vec<Category>,
    pub limit: Option<usize>,
    pub smoke: bool,
}

impl Selection {
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.or(if self.smoke { Some(SMOKE_SIZE) } else { None })
    }

    /// Select items, preserving dataset order.
    pub fn apply<'a>(&self, items: &'a [QaItem]) -> Vec<&'a QaItem> {
        let filtered = items
            .iter()
            .filter(|item| self.categories.is_empty() || self.categories.contains(&item.category));

        match self.effective_limit() {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}
