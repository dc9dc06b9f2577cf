//! Plain-text rendering of pantry contents. Callers choose the writer.

use crate::core::{IngredientStock, Recipe, Shortfall};
use std::io::{self, Write};

pub fn write_ingredients<W: Write>(out: &mut W, stocks: &[IngredientStock]) -> io::Result<()> {
    if stocks.is_empty() {
        return writeln!(out, "No ingredients on hand.");
    }
    for stock in stocks {
        writeln!(out, "- {}: Quantity: {} {}", stock.name, stock.quantity, stock.unit)?;
    }
    Ok(())
}

pub fn write_recipe_list<W: Write>(out: &mut W, recipes: &[&Recipe]) -> io::Result<()> {
    if recipes.is_empty() {
        return writeln!(out, "No recipes.");
    }
    for recipe in recipes {
        writeln!(out, "{}. {}", recipe.id, recipe.name)?;
    }
    Ok(())
}

/// Catalog positions start at 1 so users can pick by number.
pub fn write_numbered_recipes<W: Write>(out: &mut W, recipes: &[Recipe]) -> io::Result<()> {
    for (i, recipe) in recipes.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, recipe.name)?;
    }
    Ok(())
}

pub fn write_recipe_detail<W: Write>(out: &mut W, recipe: &Recipe, shortfalls: &[Shortfall]) -> io::Result<()> {
    writeln!(out, "--- {} ---", recipe.name)?;
    writeln!(out, "Ingredients:")?;
    for requirement in &recipe.requirements {
        writeln!(
            out,
            "- {}: {} {}",
            requirement.name, requirement.quantity, requirement.unit
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Instructions: {}", recipe.instructions)?;

    if shortfalls.is_empty() {
        writeln!(out, "You have everything for this recipe.")?;
    } else {
        writeln!(out, "Missing:")?;
        for shortfall in shortfalls {
            writeln!(
                out,
                "- {}: need {} {}, have {}",
                shortfall.requirement.name,
                shortfall.requirement.quantity,
                shortfall.requirement.unit,
                shortfall.available
            )?;
        }
    }
    Ok(())
}
