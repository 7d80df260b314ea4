pub mod api_connection;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod generator;
pub mod inputs;
pub mod pantry;
pub mod prompt;
pub mod recipe;
pub mod recipe_book;
pub mod samples;
pub mod schema;
pub mod validation;

pub use completion::{CompletionPort, ScriptedCompletion};
pub use error::{GenerationError, ResponseFormatError};
pub use generator::RecipeGenerator;
pub use pantry::{DietaryPreferences, PantryItem};
pub use recipe::GeneratedRecipe;
