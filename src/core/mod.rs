pub mod availability;
pub mod catalog;
pub mod inventory;
pub mod normalizer;
pub mod pantry;

pub use crate::domain::model::{IngredientRequirement, IngredientStock, RawStockLine, Recipe, Shortfall};
pub use crate::domain::ports::{ConfigProvider, MatchPolicy, RecordSource, StockLookup};
pub use crate::utils::error::{NormalizationError, Result};

/// One skipped line or record and why it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// 1-based line number (ingredients) or array index (recipes).
    pub position: usize,
    pub error: NormalizationError,
}

/// Outcome of a load: how many items made it in, and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
