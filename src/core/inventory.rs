use crate::core::normalizer::{normalize_line, trim_spaces};
use crate::core::{LoadIssue, LoadReport};
use crate::domain::model::{IngredientStock, RawStockLine};
use crate::domain::ports::StockLookup;
use crate::utils::error::{NormalizationError, ValidationError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_quantity};

/// On-hand ingredient lines in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    stocks: Vec<IngredientStock>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every line that normalizes cleanly. Bad lines are reported, never fatal.
    pub fn load<I>(&mut self, records: I) -> LoadReport
    where
        I: IntoIterator<Item = RawStockLine>,
    {
        let mut report = LoadReport::default();

        for record in records {
            match Self::stock_from_line(&record) {
                Ok(stock) => {
                    tracing::debug!("Loaded stock line {}: {}", record.position, stock);
                    self.stocks.push(stock);
                    report.loaded += 1;
                }
                Err(error) => {
                    tracing::warn!("Skipping ingredient line {}: {}", record.position, error);
                    report.issues.push(LoadIssue {
                        position: record.position,
                        error,
                    });
                }
            }
        }

        report
    }

    fn stock_from_line(record: &RawStockLine) -> Result<IngredientStock, NormalizationError> {
        let normalized = normalize_line(record)?;
        if normalized.quantity < 0 {
            return Err(NormalizationError::NegativeQuantity {
                value: normalized.quantity,
            });
        }
        let quantity = u32::try_from(normalized.quantity).map_err(|_| NormalizationError::InvalidQuantity {
            value: normalized.quantity.to_string(),
        })?;
        Ok(IngredientStock::new(normalized.name, quantity, normalized.unit))
    }

    /// Manual entry. Requires quantity >= 1 and a non-empty name and unit.
    pub fn add(&mut self, name: &str, quantity: i64, unit: &str) -> Result<&IngredientStock, ValidationError> {
        let name = trim_spaces(name);
        let unit = trim_spaces(unit);
        validate_non_empty_string("name", name)?;
        validate_non_empty_string("unit", unit)?;
        let quantity = validate_positive_quantity(quantity)?;

        let stock = IngredientStock::new(name, quantity, unit);
        tracing::info!("Added ingredient {}", stock);
        self.stocks.push(stock);
        Ok(&self.stocks[self.stocks.len() - 1])
    }

    pub fn all(&self) -> &[IngredientStock] {
        &self.stocks
    }

    pub fn find(&self, name: &str, unit: &str) -> Option<&IngredientStock> {
        self.stocks.iter().find(|stock| stock.matches(name, unit))
    }

    pub fn total_quantity(&self, name: &str, unit: &str) -> Option<u64> {
        self.stocks
            .iter()
            .filter(|stock| stock.matches(name, unit))
            .fold(None, |acc, stock| Some(acc.unwrap_or(0) + u64::from(stock.quantity)))
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

impl StockLookup for InventoryStore {
    fn find(&self, name: &str, unit: &str) -> Option<&IngredientStock> {
        InventoryStore::find(self, name, unit)
    }

    fn total_quantity(&self, name: &str, unit: &str) -> Option<u64> {
        InventoryStore::total_quantity(self, name, unit)
    }
}
