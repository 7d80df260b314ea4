use anyhow::{Context, Result};
use std::time::Duration;
use tokio::fs;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use smart_meals::cli::parse_args;
use smart_meals::config::GeneratorConfig;
use smart_meals::generator::RecipeGenerator;
use smart_meals::inputs::{load_pantry, load_preferences};
use smart_meals::prompt::build_recipe_prompt;
use smart_meals::recipe_book::{Notice, RecipeBook, RefreshOutcome};
use smart_meals::samples::sample_recipes;
use smart_meals::schema::recipe_list_schema;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for API keys
    init_logging();

    let cli_args = parse_args();

    let pantry = load_pantry(cli_args.pantry.as_deref()).await?;
    let preferences = load_preferences(cli_args.preferences.as_deref()).await?;

    if cli_args.print_prompt {
        println!("{}", build_recipe_prompt(&pantry, &preferences));
        println!();
        println!("{}", serde_json::to_string_pretty(&recipe_list_schema())?);
        return Ok(());
    }

    let mut config = GeneratorConfig::from_env();
    if let Some(model) = cli_args.model {
        config = config.with_model(model);
    }

    let mut book = RecipeBook::new(sample_recipes());

    match RecipeGenerator::from_config(&config) {
        Ok(generator) => {
            let ticket = book.begin_refresh();
            let generation = generator.generate(&pantry, &preferences);

            let result = match cli_args.timeout_secs {
                Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), generation).await {
                    Ok(result) => Some(result),
                    Err(_) => {
                        error!(timeout_secs = secs, "recipe generation timed out");
                        book.time_out(ticket);
                        None
                    }
                },
                None => Some(generation.await),
            };

            if let Some(result) = result {
                if let RefreshOutcome::Replaced { count } = book.finish_refresh(ticket, result) {
                    info!(count, model = generator.model(), "using generated recipes");
                }
            }
        }
        Err(err) => {
            // Caller fallback: keep the sample recipes and say why.
            warn!(error = %err, "recipe generation disabled");
            book.report(&err);
        }
    }

    match book.notice() {
        Some(Notice::Persistent(message)) => eprintln!("Note: {}", message),
        Some(Notice::Transient(message)) => eprintln!("{}", message),
        None => {}
    }

    let rendered = serde_json::to_string_pretty(book.recipes())?;
    match cli_args.output {
        Some(path) => {
            fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write recipes to '{}'", path.display()))?;
            info!(path = %path.display(), "recipes written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
