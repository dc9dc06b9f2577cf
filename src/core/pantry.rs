use crate::core::availability::AvailabilityEngine;
use crate::core::catalog::RecipeCatalog;
use crate::core::inventory::InventoryStore;
use crate::core::LoadReport;
use crate::domain::model::{Recipe, Shortfall};
use crate::domain::ports::{MatchPolicy, RecordSource};
use crate::utils::error::Result;

/// Owns one inventory and one catalog and answers availability questions over them.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    inventory: InventoryStore,
    catalog: RecipeCatalog,
    engine: AvailabilityEngine,
}

impl Pantry {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            inventory: InventoryStore::new(),
            catalog: RecipeCatalog::new(),
            engine: AvailabilityEngine::new(policy),
        }
    }

    pub fn from_parts(inventory: InventoryStore, catalog: RecipeCatalog, policy: MatchPolicy) -> Self {
        Self {
            inventory,
            catalog,
            engine: AvailabilityEngine::new(policy),
        }
    }

    /// Appends stock read from `source`. If the source cannot be read nothing
    /// is loaded and the pantry keeps whatever it already had.
    pub fn load_inventory<S: RecordSource + ?Sized>(&mut self, source: &S) -> Result<LoadReport> {
        let lines = source.read_stock_lines()?;
        let report = self.inventory.load(lines);
        tracing::info!(
            "Loaded {} ingredient lines ({} skipped)",
            report.loaded,
            report.issues.len()
        );
        Ok(report)
    }

    /// Replaces the catalog with the recipes read from `source`.
    pub fn load_recipes<S: RecordSource + ?Sized>(&mut self, source: &S) -> Result<LoadReport> {
        let records = source.read_recipes()?;
        let (catalog, report) = RecipeCatalog::load(records);
        self.catalog = catalog;
        tracing::info!(
            "Loaded {} recipes ({} skipped)",
            report.loaded,
            report.issues.len()
        );
        Ok(report)
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryStore {
        &mut self.inventory
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &AvailabilityEngine {
        &self.engine
    }

    pub fn available(&self) -> Vec<&Recipe> {
        self.engine.list_available(&self.catalog, &self.inventory)
    }

    pub fn is_feasible(&self, index: usize) -> Result<bool> {
        let recipe = self.catalog.by_index(index)?;
        Ok(self.engine.is_feasible(recipe, &self.inventory))
    }

    pub fn shortfalls(&self, index: usize) -> Result<Vec<Shortfall>> {
        let recipe = self.catalog.by_index(index)?;
        Ok(self.engine.shortfalls(recipe, &self.inventory))
    }
}
