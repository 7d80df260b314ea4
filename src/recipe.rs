use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cost {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
}

impl Cost {
    pub const ALL: [Cost; 3] = [Cost::Budget, Cost::Moderate, Cost::Premium];

    pub fn symbols() -> [&'static str; 3] {
        Cost::ALL.map(Cost::symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Cost::Budget => "$",
            Cost::Moderate => "$$",
            Cost::Premium => "$$$",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "$" => Some(Cost::Budget),
            "$$" => Some(Cost::Moderate),
            "$$$" => Some(Cost::Premium),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub item: String,
    pub checked: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NutritionalInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A recipe as the model describes it, before the pipeline assigns `id` and `image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub cost: Cost,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutritional_info: NutritionalInfo,
}

impl RecipeDraft {
    pub fn into_recipe(self, id: String, image: String) -> GeneratedRecipe {
        GeneratedRecipe {
            id,
            title: self.title,
            description: self.description,
            image,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            cost: self.cost,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
            nutritional_info: self.nutritional_info,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub cost: Cost,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    /// Step order matters.
    pub instructions: Vec<String>,
    pub nutritional_info: NutritionalInfo,
}
