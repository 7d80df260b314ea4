use serde_json::json;

use crate::api_connection::endpoints::{JsonSchema, JsonSchemaDefinition};
use crate::recipe::Cost;

pub const RECIPE_SCHEMA_NAME: &str = "generated_recipes";

/// Schema for the array of recipes the model must return.
///
/// `id` and `image` are not part of it; the pipeline fills those in.
pub fn recipe_list_schema() -> JsonSchemaDefinition {
    let ingredient = JsonSchema::object(vec![
        ("item", JsonSchema::string()),
        (
            "checked",
            JsonSchema::boolean()
                .with_description("Always false")
                .with_enum(vec![json!(false)]),
        ),
    ]);

    let nutritional_info = JsonSchema::object(vec![
        ("calories", JsonSchema::string().with_description("e.g. '350 kcal'")),
        ("protein", JsonSchema::string().with_description("e.g. '20g'")),
        ("carbs", JsonSchema::string().with_description("e.g. '30g'")),
        ("fat", JsonSchema::string().with_description("e.g. '12g'")),
    ]);

    let recipe = JsonSchema::object(vec![
        ("title", JsonSchema::string()),
        ("description", JsonSchema::string()),
        ("prepTime", JsonSchema::string()),
        ("cookTime", JsonSchema::string()),
        ("servings", JsonSchema::integer().with_minimum(1)),
        (
            "cost",
            JsonSchema::string()
                .with_description("Cost estimation as '$', '$$', or '$$$'")
                .with_enum(Cost::symbols().iter().map(|s| json!(s)).collect()),
        ),
        ("tags", JsonSchema::array(JsonSchema::string())),
        ("ingredients", JsonSchema::array(ingredient)),
        (
            "instructions",
            JsonSchema::array(JsonSchema::string()).with_description("Steps in cooking order"),
        ),
        ("nutritionalInfo", nutritional_info),
    ]);

    JsonSchemaDefinition {
        name: RECIPE_SCHEMA_NAME.to_string(),
        strict: Some(true),
        schema: JsonSchema::array(recipe),
    }
}
