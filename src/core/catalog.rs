use crate::core::{LoadIssue, LoadReport};
use crate::domain::model::{IngredientRequirement, Recipe};
use crate::utils::error::{NormalizationError, PantryError, Result};
use serde_json::Value;

/// Recipes in source order. Rebuilt wholesale on every load.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from decoded JSON records.
    ///
    /// Missing fields fall back to defaults (`0`, `""`, no ingredients) and an
    /// ingredient entry of the wrong shape is defaulted field by field instead
    /// of dropping the recipe. Only records that are not objects, or that ask
    /// for a negative quantity, are skipped.
    pub fn load<I>(records: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = Value>,
    {
        let mut catalog = Self::new();
        let mut report = LoadReport::default();

        for (index, record) in records.into_iter().enumerate() {
            let position = index + 1;
            match recipe_from_value(position, &record) {
                Ok(recipe) => {
                    tracing::debug!(
                        "Loaded recipe {} '{}' with {} ingredients",
                        recipe.id,
                        recipe.name,
                        recipe.requirements.len()
                    );
                    catalog.recipes.push(recipe);
                    report.loaded += 1;
                }
                Err(error) => {
                    tracing::warn!("Skipping recipe record {}: {}", position, error);
                    report.issues.push(LoadIssue { position, error });
                }
            }
        }

        (catalog, report)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Zero-based lookup.
    pub fn by_index(&self, index: usize) -> Result<&Recipe> {
        self.recipes.get(index).ok_or(PantryError::RecipeNotFound {
            number: index + 1,
            available: self.recipes.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeCatalog {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

fn recipe_from_value(position: usize, record: &Value) -> std::result::Result<Recipe, NormalizationError> {
    let object = record.as_object().ok_or_else(|| NormalizationError::MalformedRecord {
        reason: format!("expected an object, found {}", json_kind(record)),
    })?;

    let id = object.get("id").map_or(0, |v| {
        v.as_i64().unwrap_or_else(|| {
            tracing::warn!("Recipe record {}: non-integer id {}, using 0", position, v);
            0
        })
    });
    let name = string_field(object.get("name"));
    let instructions = string_field(object.get("instructions"));

    let requirements = match object.get("ingredients") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| requirement_from_value(position, item))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        Some(other) => {
            tracing::warn!(
                "Recipe record {}: ingredients is {}, treating as empty",
                position,
                json_kind(other)
            );
            Vec::new()
        }
    };

    Ok(Recipe::new(id, name, requirements, instructions))
}

fn requirement_from_value(position: usize, item: &Value) -> std::result::Result<IngredientRequirement, NormalizationError> {
    let Some(object) = item.as_object() else {
        tracing::warn!(
            "Recipe record {}: ingredient entry is {}, using defaults",
            position,
            json_kind(item)
        );
        return Ok(IngredientRequirement::new("", 0, ""));
    };

    let quantity = match object.get("quantity") {
        None | Some(Value::Null) => 0,
        Some(v) => match v.as_i64() {
            Some(q) if q < 0 => return Err(NormalizationError::NegativeQuantity { value: q }),
            Some(q) => u32::try_from(q).map_err(|_| NormalizationError::InvalidQuantity { value: q.to_string() })?,
            None => {
                tracing::warn!("Recipe record {}: non-integer quantity {}, using 0", position, v);
                0
            }
        },
    };

    Ok(IngredientRequirement::new(
        string_field(object.get("name")),
        quantity,
        string_field(object.get("unit")),
    ))
}

fn string_field(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
