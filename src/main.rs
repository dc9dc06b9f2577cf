use anyhow::Context;
use clap::Parser;
use pantry_planner::app::display;
use pantry_planner::utils::{logger, validation::Validate};
use pantry_planner::{CliConfig, Command, ConfigProvider, LoadReport, LocalFiles, Menu, Pantry, PantryError};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 解析配置 (CLI 覆蓋 TOML)
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.logging.json {
        logger::init_json_logger(settings.logging.verbose);
    } else {
        logger::init_cli_logger(settings.logging.verbose);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = LocalFiles::new(settings.ingredients_path(), settings.recipes_path());
    let mut pantry = Pantry::new(settings.match_policy());

    // 載入失敗不終止程式，只是資料為空
    report_load("ingredients", pantry.load_inventory(&source));
    report_load("recipes", pantry.load_recipes(&source));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.selected_command() {
        Command::Ingredients => display::write_ingredients(&mut out, pantry.inventory().all())?,
        Command::Recipes => {
            let recipes: Vec<_> = pantry.catalog().all().iter().collect();
            display::write_recipe_list(&mut out, &recipes)?;
        }
        Command::Available => display::write_recipe_list(&mut out, &pantry.available())?,
        Command::Show { number } => {
            let index = number.checked_sub(1).ok_or(PantryError::RecipeNotFound {
                number,
                available: pantry.catalog().len(),
            });
            let detail = index.and_then(|i| {
                let recipe = pantry.catalog().by_index(i)?;
                Ok((recipe, pantry.shortfalls(i)?))
            });
            match detail {
                Ok((recipe, shortfalls)) => display::write_recipe_detail(&mut out, recipe, &shortfalls)?,
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(2);
                }
            }
        }
        Command::Menu => {
            drop(out);
            let stdin = std::io::stdin();
            let mut menu = Menu::new(stdin.lock(), std::io::stdout());
            menu.run(&mut pantry).context("interactive menu failed")?;
            return Ok(());
        }
    }

    out.flush()?;
    Ok(())
}

fn report_load(kind: &str, result: pantry_planner::Result<LoadReport>) {
    match result {
        Ok(report) => {
            for issue in &report.issues {
                eprintln!("⚠️  {} #{} skipped: {}", kind, issue.position, issue.error);
            }
        }
        Err(e) => {
            tracing::warn!("Could not load {}: {}", kind, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }
}
