use crate::domain::model::{IngredientStock, RawStockLine};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Read-only view of on-hand stock used by the availability engine.
pub trait StockLookup {
    /// First line, in insertion order, whose name and unit match exactly.
    fn find(&self, name: &str, unit: &str) -> Option<&IngredientStock>;

    /// Sum over every line with the given name and unit; `None` when no line matches.
    fn total_quantity(&self, name: &str, unit: &str) -> Option<u64>;
}

/// Where raw ingredient lines and recipe records come from.
pub trait RecordSource {
    fn read_stock_lines(&self) -> Result<Vec<RawStockLine>>;
    fn read_recipes(&self) -> Result<Vec<serde_json::Value>>;
}

/// Rule deciding which stock quantity a requirement is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Only the first line with the requirement's name and unit counts.
    #[default]
    FirstMatch,
    /// All lines with the requirement's name and unit are added together.
    SumByKey,
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_match" => Ok(MatchPolicy::FirstMatch),
            "sum_by_key" => Ok(MatchPolicy::SumByKey),
            other => Err(format!(
                "unknown match policy '{}' (expected first-match or sum-by-key)",
                other
            )),
        }
    }
}

pub trait ConfigProvider {
    fn ingredients_path(&self) -> &str;
    fn recipes_path(&self) -> &str;
    fn match_policy(&self) -> MatchPolicy;
}
