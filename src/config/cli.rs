use crate::core::{RawStockLine, RecordSource};
use crate::utils::error::{PantryError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Reads the ingredients file and the recipes file from the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFiles {
    ingredients_path: PathBuf,
    recipes_path: PathBuf,
}

impl LocalFiles {
    pub fn new(ingredients_path: impl Into<PathBuf>, recipes_path: impl Into<PathBuf>) -> Self {
        Self {
            ingredients_path: ingredients_path.into(),
            recipes_path: recipes_path.into(),
        }
    }

    fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|source| PantryError::SourceUnavailable {
            path: path.display().to_string(),
            source,
        })
    }
}

impl RecordSource for LocalFiles {
    /// `name,quantity,unit` per line, no header. Field counts are not checked here.
    fn read_stock_lines(&self) -> Result<Vec<RawStockLine>> {
        let file = Self::open(&self.ingredients_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(file);

        let mut lines = Vec::new();
        for record in reader.byte_records() {
            let record = record?;
            let position = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(lines.len() + 1);
            lines.push(RawStockLine::new(
                position,
                record
                    .iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect(),
            ));
        }

        tracing::debug!(
            "Read {} ingredient lines from {}",
            lines.len(),
            self.ingredients_path.display()
        );
        Ok(lines)
    }

    fn read_recipes(&self) -> Result<Vec<serde_json::Value>> {
        let file = Self::open(&self.recipes_path)?;
        let document: serde_json::Value = serde_json::from_reader(std::io::BufReader::new(file))?;

        match document {
            serde_json::Value::Array(records) => {
                tracing::debug!(
                    "Read {} recipe records from {}",
                    records.len(),
                    self.recipes_path.display()
                );
                Ok(records)
            }
            _ => Err(PantryError::ProcessingError {
                message: format!(
                    "{} must contain a JSON array of recipes",
                    self.recipes_path.display()
                ),
            }),
        }
    }
}
