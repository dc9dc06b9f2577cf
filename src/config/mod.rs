pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::MatchPolicy;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use toml_config::PantryConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-planner")]
#[command(about = "Track your pantry and find the recipes you can cook right now")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Ingredients file (name,quantity,unit per line)
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Recipes file (JSON array)
    #[arg(long)]
    pub recipes: Option<String>,

    /// How duplicate stock lines are counted: first-match or sum-by-key
    #[arg(long)]
    pub match_policy: Option<MatchPolicy>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every ingredient line on hand
    Ingredients,
    /// List every recipe in the catalog
    Recipes,
    /// List the recipes that can be prepared with the current stock
    Available,
    /// Show one recipe by its number in the catalog (starting at 1)
    Show { number: usize },
    /// Interactive menu (default)
    Menu,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional TOML file with command line overrides.
    /// Precedence: flag, then file, then built-in default.
    pub fn resolve(&self) -> Result<PantryConfig> {
        let mut settings = match &self.config {
            Some(path) => PantryConfig::from_file(path)?,
            None => PantryConfig::default(),
        };

        if let Some(path) = &self.ingredients {
            settings.sources.ingredients = path.clone();
        }
        if let Some(path) = &self.recipes {
            settings.sources.recipes = path.clone();
        }
        if let Some(policy) = self.match_policy {
            settings.matching.policy = policy;
        }
        settings.logging.verbose |= self.verbose;
        settings.logging.json |= self.log_json;

        Ok(settings)
    }

    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}
