use std::fmt;

/// One line of on-hand inventory. Lines sharing a name and unit are kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientStock {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

impl IngredientStock {
    pub fn new(name: impl Into<String>, quantity: u32, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    pub fn matches(&self, name: &str, unit: &str) -> bool {
        self.name == name && self.unit == unit
    }
}

impl fmt::Display for IngredientStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

/// One ingredient line a recipe needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRequirement {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

impl IngredientRequirement {
    pub fn new(name: impl Into<String>, quantity: u32, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for IngredientRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Expected to be unique but never checked.
    pub id: i64,
    pub name: String,
    pub requirements: Vec<IngredientRequirement>,
    pub instructions: String,
}

impl Recipe {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        requirements: Vec<IngredientRequirement>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            requirements,
            instructions: instructions.into(),
        }
    }
}

/// A delimited ingredient line as split by a loader, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStockLine {
    /// 1-based line number in the source, used when reporting issues.
    pub position: usize,
    pub fields: Vec<String>,
}

impl RawStockLine {
    pub fn new(position: usize, fields: Vec<String>) -> Self {
        Self { position, fields }
    }

    pub fn from_triple(position: usize, name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            position,
            fields: vec![name.to_string(), quantity.to_string(), unit.to_string()],
        }
    }
}

/// An unmet requirement together with what the pantry currently offers for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub requirement: IngredientRequirement,
    pub available: u64,
}

impl Shortfall {
    pub fn missing(&self) -> u64 {
        u64::from(self.requirement.quantity).saturating_sub(self.available)
    }
}
