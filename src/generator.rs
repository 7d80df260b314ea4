use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info, warn};

use crate::api_connection::Provider;
use crate::completion::CompletionPort;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::pantry::{DietaryPreferences, PantryItem};
use crate::prompt::build_recipe_prompt;
use crate::recipe::GeneratedRecipe;
use crate::schema::recipe_list_schema;
use crate::validation::parse_recipe_drafts;

const IMAGE_BASE_URL: &str = "https://picsum.photos/seed";
const IMAGE_WIDTH: u32 = 600;
const IMAGE_HEIGHT: u32 = 400;

// Distinguishes batches minted within the same millisecond.
static BATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Asks the model for recipes that fit a pantry and a set of dietary preferences.
///
/// Holds no state between calls. Concurrent calls are independent; callers
/// that care about superseded requests track that themselves (see
/// [`RecipeBook`](crate::recipe_book::RecipeBook)).
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    model: String,
    port: Arc<dyn CompletionPort>,
}

impl RecipeGenerator {
    /// Build a generator backed by OpenRouter.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let provider = Provider::openrouter(config)?;
        Ok(Self::assemble(config, Arc::new(provider)))
    }

    /// Build a generator over any completion port. The credential is still
    /// required, so a missing key fails here rather than halfway through a call.
    pub fn with_port(
        config: &GeneratorConfig,
        port: Arc<dyn CompletionPort>,
    ) -> Result<Self, GenerationError> {
        config.require_api_key()?;
        Ok(Self::assemble(config, port))
    }

    fn assemble(config: &GeneratorConfig, port: Arc<dyn CompletionPort>) -> Self {
        info!(
            provider = port.provider_name(),
            model = %config.model,
            "recipe generator ready"
        );
        Self {
            model: config.model.clone(),
            port,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One outbound call, no retries. Either every recipe validates and the
    /// whole batch comes back, or an error does.
    pub async fn generate(
        &self,
        pantry: &[PantryItem],
        preferences: &DietaryPreferences,
    ) -> Result<Vec<GeneratedRecipe>, GenerationError> {
        let prompt = build_recipe_prompt(pantry, preferences);
        let schema = recipe_list_schema();
        debug!(pantry_items = pantry.len(), prompt_len = prompt.len(), "requesting recipes");

        let raw_text = self
            .port
            .complete(&self.model, &prompt, &schema)
            .await
            .map_err(|e| {
                error!(provider = self.port.provider_name(), error = %e, "recipe generation request failed");
                GenerationError::Request(e)
            })?;

        let drafts = parse_recipe_drafts(&raw_text).map_err(|e| {
            warn!(reason = %e.reason, excerpt = %e.excerpt, "model response failed validation");
            GenerationError::ResponseFormat(e)
        })?;

        let token = batch_token();
        let recipes: Vec<GeneratedRecipe> = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                let image = placeholder_image_url(&draft.title);
                draft.into_recipe(recipe_id(&token, index), image)
            })
            .collect();

        info!(count = recipes.len(), "generated recipes");
        Ok(recipes)
    }
}

/// Unique per call within this process: wall-clock millis plus a monotonic counter.
fn batch_token() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let sequence = BATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{sequence}")
}

fn recipe_id(batch_token: &str, index: usize) -> String {
    format!("gen-{batch_token}-{index}")
}

/// Placeholder image seeded by the title with all whitespace removed.
/// Different titles may share an image.
pub fn placeholder_image_url(title: &str) -> String {
    let seed: String = title.split_whitespace().collect();
    format!(
        "{IMAGE_BASE_URL}/{}/{IMAGE_WIDTH}/{IMAGE_HEIGHT}",
        urlencoding::encode(&seed)
    )
}
