//! Defensive checking of the model's JSON output.
//!
//! The schema sent with the request is only a request; every field is checked
//! again here before anything reaches the caller.

use serde_json::{Map, Value};

use crate::error::ResponseFormatError;
use crate::recipe::{Cost, Ingredient, NutritionalInfo, RecipeDraft};

/// Parse and validate the raw completion text. Only surrounding whitespace is
/// tolerated; prose or markdown fences around the JSON are a format error.
pub fn parse_recipe_drafts(raw_text: &str) -> Result<Vec<RecipeDraft>, ResponseFormatError> {
    let text = raw_text.trim();

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ResponseFormatError::new(format!("response is not valid JSON: {e}"), text))?;

    let elements = value.as_array().ok_or_else(|| {
        ResponseFormatError::new(
            format!("expected a JSON array of recipes, got {}", kind(&value)),
            text,
        )
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            validate_recipe(index, element).map_err(|reason| ResponseFormatError::new(reason, text))
        })
        .collect()
}

fn validate_recipe(index: usize, element: &Value) -> Result<RecipeDraft, String> {
    let recipe = Fields::of(format!("recipe[{index}]"), element)?;

    let title = recipe.string("title")?;
    if title.trim().is_empty() {
        return Err(format!("{}.title: must not be blank", recipe.path));
    }

    let cost_symbol = recipe.string("cost")?;
    let cost = Cost::from_symbol(&cost_symbol).ok_or_else(|| {
        format!(
            "{}.cost: expected one of {:?}, got {:?}",
            recipe.path,
            Cost::symbols(),
            cost_symbol
        )
    })?;

    let ingredients = recipe
        .array("ingredients")?
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ingredient = Fields::of(format!("{}.ingredients[{i}]", recipe.path), value)?;
            let item = ingredient.string("item")?;
            if ingredient.boolean("checked")? {
                return Err(format!("{}.checked: must be false", ingredient.path));
            }
            Ok(Ingredient {
                item,
                checked: false,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let nutrition = recipe.nested("nutritionalInfo")?;
    let nutritional_info = NutritionalInfo {
        calories: nutrition.string("calories")?,
        protein: nutrition.string("protein")?,
        carbs: nutrition.string("carbs")?,
        fat: nutrition.string("fat")?,
    };

    Ok(RecipeDraft {
        title,
        description: recipe.string("description")?,
        prep_time: recipe.string("prepTime")?,
        cook_time: recipe.string("cookTime")?,
        servings: recipe.positive_integer("servings")?,
        cost,
        tags: recipe.string_array("tags")?,
        ingredients,
        instructions: recipe.string_array("instructions")?,
        nutritional_info,
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Typed access to one JSON object, with errors that name the offending path.
struct Fields<'a> {
    path: String,
    object: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn of(path: String, value: &'a Value) -> Result<Self, String> {
        match value.as_object() {
            Some(object) => Ok(Self { path, object }),
            None => Err(format!("{path}: expected an object, got {}", kind(value))),
        }
    }

    // `null` counts as missing.
    fn field(&self, name: &str) -> Result<&'a Value, String> {
        self.object
            .get(name)
            .filter(|value| !value.is_null())
            .ok_or_else(|| format!("{}: missing required field `{name}`", self.path))
    }

    fn mismatch(&self, name: &str, expected: &str, value: &Value) -> String {
        format!("{}.{name}: expected {expected}, got {}", self.path, kind(value))
    }

    fn string(&self, name: &str) -> Result<String, String> {
        let value = self.field(name)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(name, "a string", value))
    }

    fn boolean(&self, name: &str) -> Result<bool, String> {
        let value = self.field(name)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(name, "a boolean", value))
    }

    fn positive_integer(&self, name: &str) -> Result<u32, String> {
        let value = self.field(name)?;
        value
            .as_u64()
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.mismatch(name, "a positive integer", value))
    }

    fn array(&self, name: &str) -> Result<&'a Vec<Value>, String> {
        let value = self.field(name)?;
        value
            .as_array()
            .ok_or_else(|| self.mismatch(name, "an array", value))
    }

    fn string_array(&self, name: &str) -> Result<Vec<String>, String> {
        self.array(name)?
            .iter()
            .enumerate()
            .map(|(i, value)| {
                value.as_str().map(str::to_string).ok_or_else(|| {
                    format!("{}.{name}[{i}]: expected a string, got {}", self.path, kind(value))
                })
            })
            .collect()
    }

    fn nested(&self, name: &str) -> Result<Fields<'a>, String> {
        Fields::of(format!("{}.{name}", self.path), self.field(name)?)
    }
}
