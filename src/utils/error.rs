use thiserror::Error;

/// Raised while turning raw text fields into a canonical stock or requirement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Invalid quantity '{value}': expected a whole number")]
    InvalidQuantity { value: String },

    #[error("Malformed line: expected {expected} fields, found {found}")]
    MalformedLine { expected: usize, found: usize },

    #[error("Negative quantity {value} is not allowed")]
    NegativeQuantity { value: i64 },

    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },
}

/// Raised by the manual-add path of the inventory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Quantity must be at least 1, got {quantity}")]
    NonPositiveQuantity { quantity: i64 },

    #[error("Quantity {quantity} exceeds the maximum of {max}", max = u32::MAX)]
    QuantityTooLarge { quantity: i64 },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Source '{path}' not found or cannot be opened: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    /// `number` is the 1-based position shown to the user.
    #[error("Recipe #{number} does not exist (catalog holds {available})")]
    RecipeNotFound { number: usize, available: usize },

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PantryError {
    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PantryError::SourceUnavailable { path, .. } => {
                format!("Could not open '{}'", path)
            }
            PantryError::IoError(_) => "A file could not be read".to_string(),
            PantryError::CsvError(_) => "The ingredients file could not be parsed".to_string(),
            PantryError::JsonError(_) => "The recipes file is not valid JSON".to_string(),
            PantryError::ConfigError { .. }
            | PantryError::InvalidConfigValueError { .. }
            | PantryError::ConfigValidationError { .. } => format!("Invalid configuration: {}", self),
            PantryError::ProcessingError { message } => message.clone(),
            PantryError::RecipeNotFound { .. } => self.to_string(),
            PantryError::Normalization(e) => format!("Bad input: {}", e),
            PantryError::Validation(e) => format!("Rejected: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PantryError::SourceUnavailable { .. } | PantryError::IoError(_) => {
                "Check the path passed with --ingredients/--recipes or in the [sources] section"
            }
            PantryError::CsvError(_) => "Each ingredient line should look like: name,quantity,unit",
            PantryError::JsonError(_) | PantryError::ProcessingError { .. } => {
                "The recipes file must be a JSON array of recipe objects"
            }
            PantryError::ConfigError { .. }
            | PantryError::InvalidConfigValueError { .. }
            | PantryError::ConfigValidationError { .. } => {
                "Fix the configuration file or the command line flags and try again"
            }
            PantryError::RecipeNotFound { .. } => "Run the 'recipes' command to see valid numbers",
            PantryError::Normalization(_) => "Quantities must be whole numbers",
            PantryError::Validation(_) => "Enter a quantity between 1 and 4294967295 and a non-empty name and unit",
        }
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_keeps_path_in_messages() {
        let err = PantryError::SourceUnavailable {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("missing.txt"));
        assert_eq!(err.user_friendly_message(), "Could not open 'missing.txt'");
        assert!(err.recovery_suggestion().contains("--ingredients"));
    }

    #[test]
    fn test_validation_error_converts_into_pantry_error() {
        let err: PantryError = ValidationError::NonPositiveQuantity { quantity: 0 }.into();
        assert_eq!(err.to_string(), "Quantity must be at least 1, got 0");
        assert!(matches!(err, PantryError::Validation(_)));
    }

    #[test]
    fn test_recipe_not_found_reports_the_number_the_user_typed() {
        let err = PantryError::RecipeNotFound {
            number: 5,
            available: 3,
        };
        assert_eq!(err.user_friendly_message(), "Recipe #5 does not exist (catalog holds 3)");
    }
}
