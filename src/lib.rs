pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::menu::Menu;
pub use config::{cli::LocalFiles, toml_config::PantryConfig};
pub use core::{
    availability::AvailabilityEngine, catalog::RecipeCatalog, inventory::InventoryStore,
    pantry::Pantry, LoadIssue, LoadReport,
};
pub use domain::model::{IngredientRequirement, IngredientStock, RawStockLine, Recipe, Shortfall};
pub use domain::ports::{ConfigProvider, MatchPolicy, RecordSource, StockLookup};
pub use utils::error::{NormalizationError, PantryError, Result, ValidationError};
