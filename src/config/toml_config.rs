use crate::core::{ConfigProvider, MatchPolicy};
use crate::utils::error::{PantryError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INGREDIENTS_PATH: &str = "ingredients.txt";
pub const DEFAULT_RECIPES_PATH: &str = "recipes.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PantryConfig {
    pub sources: SourcesConfig,
    pub matching: MatchingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub ingredients: String,
    pub recipes: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            ingredients: DEFAULT_INGREDIENTS_PATH.to_string(),
            recipes: DEFAULT_RECIPES_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub policy: MatchPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl PantryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| PantryError::SourceUnavailable {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PantryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PantryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("sources.ingredients", &self.sources.ingredients)?;
        validate_path("sources.recipes", &self.sources.recipes)?;
        validate_file_extension("sources.recipes", &self.sources.recipes, &["json"])?;
        Ok(())
    }
}

impl ConfigProvider for PantryConfig {
    fn ingredients_path(&self) -> &str {
        &self.sources.ingredients
    }

    fn recipes_path(&self) -> &str {
        &self.sources.recipes
    }

    fn match_policy(&self) -> MatchPolicy {
        self.matching.policy
    }
}

impl Validate for PantryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
