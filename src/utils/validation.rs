use crate::utils::error::{PantryError, Result, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str());

    match extension {
        Some(ext) if allowed_extensions.contains(&ext) => Ok(()),
        Some(ext) => Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                ext,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(PantryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// Manual entry requires at least one unit of stock.
pub fn validate_positive_quantity(quantity: i64) -> std::result::Result<u32, ValidationError> {
    if quantity < 1 {
        return Err(ValidationError::NonPositiveQuantity { quantity });
    }
    u32::try_from(quantity).map_err(|_| ValidationError::QuantityTooLarge { quantity })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("sources.ingredients", "ingredients.txt").is_ok());
        assert!(validate_path("sources.ingredients", "").is_err());
        assert!(validate_path("sources.ingredients", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("sources.recipes", "recipes.json", &["json"]).is_ok());
        assert!(validate_file_extension("sources.recipes", "recipes.yaml", &["json"]).is_err());
        assert!(validate_file_extension("sources.recipes", "recipes", &["json"]).is_err());
    }

    #[test]
    fn test_validate_positive_quantity() {
        assert_eq!(validate_positive_quantity(5), Ok(5));
        assert_eq!(validate_positive_quantity(1), Ok(1));
        assert_eq!(
            validate_positive_quantity(0),
            Err(ValidationError::NonPositiveQuantity { quantity: 0 })
        );
        assert!(validate_positive_quantity(-3).is_err());
        assert_eq!(validate_positive_quantity(i64::from(u32::MAX)), Ok(u32::MAX));
        assert_eq!(
            validate_positive_quantity(5_000_000_000),
            Err(ValidationError::QuantityTooLarge {
                quantity: 5_000_000_000
            })
        );
        assert_eq!(
            ValidationError::QuantityTooLarge {
                quantity: 5_000_000_000
            }
            .to_string(),
            "Quantity 5000000000 exceeds the maximum of 4294967295"
        );
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "sugar").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
