use crate::app::display;
use crate::core::pantry::Pantry;
use crate::core::normalizer::trim_spaces;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
1. Show all ingredients
2. Add ingredients manually
3. Show all recipes
4. Show available recipes
5. Select a recipe
6. Exit";

/// Interactive loop over any line-based input. Returns when the user exits or input ends.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, pantry: &mut Pantry) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.read_number("Choose an option: ", 1, 6)? else {
                return Ok(());
            };

            match choice {
                1 => display::write_ingredients(&mut self.output, pantry.inventory().all())?,
                2 => {
                    if !self.add_ingredients(pantry)? {
                        return Ok(());
                    }
                }
                3 => {
                    let recipes: Vec<_> = pantry.catalog().all().iter().collect();
                    display::write_recipe_list(&mut self.output, &recipes)?;
                }
                4 => {
                    writeln!(self.output, "Available recipes with your ingredients are:")?;
                    display::write_recipe_list(&mut self.output, &pantry.available())?;
                }
                5 => {
                    if !self.select_recipe(pantry)? {
                        return Ok(());
                    }
                }
                _ => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
            }
        }
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_number(&mut self, text: &str, min: usize, max: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
                Ok(_) => writeln!(
                    self.output,
                    "Choice out of range. Input a number between {} and {}.",
                    min, max
                )?,
                Err(_) => writeln!(self.output, "Invalid input.")?,
            }
        }
    }

    /// Returns false if input ran out mid-entry.
    fn add_ingredients(&mut self, pantry: &mut Pantry) -> io::Result<bool> {
        loop {
            let Some(name) = self.prompt("Ingredient Name: ")? else {
                return Ok(false);
            };
            let Some(quantity) = self.prompt("Quantity: ")? else {
                return Ok(false);
            };
            let Some(unit) = self.prompt("Unit: ")? else {
                return Ok(false);
            };

            let quantity = match trim_spaces(&quantity).parse::<i64>() {
                Ok(q) => q,
                Err(_) => {
                    writeln!(self.output, "Quantity must be a whole number, try again.")?;
                    continue;
                }
            };

            match pantry.inventory_mut().add(&name, quantity, &unit) {
                Ok(stock) => {
                    let name = stock.name.clone();
                    writeln!(self.output, "Ingredient {} added successfully!", name)?;
                }
                Err(e) => {
                    tracing::debug!("Manual add rejected: {}", e);
                    writeln!(self.output, "{}, try again.", e)?;
                    continue;
                }
            }

            match self.ask_yes_no("Want to add another ingredient? (y/n): ")? {
                Some(true) => continue,
                Some(false) => return Ok(true),
                None => return Ok(false),
            }
        }
    }

    fn ask_yes_no(&mut self, text: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please input 'y/yes' or 'n/no'")?,
            }
        }
    }

    fn select_recipe(&mut self, pantry: &Pantry) -> io::Result<bool> {
        let recipes = pantry.catalog().all();
        if recipes.is_empty() {
            writeln!(self.output, "No recipes available.")?;
            return Ok(true);
        }

        display::write_numbered_recipes(&mut self.output, recipes)?;
        let Some(number) = self.read_number("Select a recipe (number): ", 1, recipes.len())? else {
            return Ok(false);
        };

        let index = number - 1;
        let recipe = &recipes[index];
        let shortfalls = pantry.engine().shortfalls(recipe, pantry.inventory());
        display::write_recipe_detail(&mut self.output, recipe, &shortfalls)?;
        Ok(true)
    }
}
