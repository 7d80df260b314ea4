//! Built-in data used when no files are given, and as the fallback recipe list
//! when generation is not configured.

use crate::pantry::{
    CalorieGoal, DietaryPreferences, DietaryRestriction, HealthGoal, NutrientFocus, PantryItem,
};
use crate::recipe::{Cost, GeneratedRecipe, Ingredient, NutritionalInfo};

pub fn sample_pantry() -> Vec<PantryItem> {
    vec![
        PantryItem::new("Milk", "1 liter"),
        PantryItem::new("Tomatoes", "5 pcs"),
        PantryItem::new("Bread", "1 loaf"),
        PantryItem::new("Chicken Breast", "2 lbs"),
        PantryItem::new("Lentils", "1 can"),
        PantryItem::new("Avocado", "3 pcs"),
    ]
}

pub fn sample_preferences() -> DietaryPreferences {
    DietaryPreferences {
        restrictions: [DietaryRestriction::Vegan].into(),
        allergies: ["Gluten".to_string(), "Peanuts".to_string()].into(),
        health_goal: HealthGoal::LoseWeight,
        calorie_goal: CalorieGoal::new(2200).unwrap_or_default(),
        nutrient_focus: [NutrientFocus::LowCarb].into(),
    }
}

struct Sample<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    seed: &'a str,
    times: (&'a str, &'a str),
    servings: u32,
    cost: Cost,
    tags: &'a [&'a str],
    ingredients: &'a [&'a str],
    instructions: &'a [&'a str],
    nutrition: [&'a str; 4],
}

impl Sample<'_> {
    fn build(self) -> GeneratedRecipe {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let [calories, protein, carbs, fat] = self.nutrition;
        GeneratedRecipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: format!("https://picsum.photos/seed/{}/600/400", self.seed),
            prep_time: self.times.0.to_string(),
            cook_time: self.times.1.to_string(),
            servings: self.servings,
            cost: self.cost,
            tags: owned(self.tags),
            ingredients: self
                .ingredients
                .iter()
                .map(|item| Ingredient {
                    item: item.to_string(),
                    checked: false,
                })
                .collect(),
            instructions: owned(self.instructions),
            nutritional_info: NutritionalInfo {
                calories: calories.to_string(),
                protein: protein.to_string(),
                carbs: carbs.to_string(),
                fat: fat.to_string(),
            },
        }
    }
}

pub fn sample_recipes() -> Vec<GeneratedRecipe> {
    vec![
        Sample {
            id: "1",
            title: "Quick Lentil Soup",
            description: "A hearty and nutritious soup that's perfect for a chilly day. It's budget-friendly and easy to make.",
            seed: "lentil",
            times: ("10 min", "20 min"),
            servings: 4,
            cost: Cost::Budget,
            tags: &["Vegan", "Budget-Friendly"],
            ingredients: &[
                "1 tbsp olive oil",
                "1 onion, chopped",
                "2 carrots, chopped",
                "2 celery stalks, chopped",
                "1 cup brown or green lentils, rinsed",
                "6 cups vegetable broth",
                "1 tsp dried thyme",
            ],
            instructions: &[
                "Heat olive oil in a large pot or Dutch oven over medium heat.",
                "Add onion, carrots, and celery and cook until softened, about 5-7 minutes.",
                "Stir in lentils, vegetable broth, and thyme.",
                "Bring to a boil, then reduce heat and simmer for 20-25 minutes, or until lentils are tender.",
                "Season with salt and pepper to taste before serving.",
            ],
            nutrition: ["250 kcal", "15g", "40g", "5g"],
        }
        .build(),
        Sample {
            id: "2",
            title: "15-Min Chicken & Veggie Stir-fry",
            description: "A super-fast and flavorful stir-fry that is packed with protein and colorful vegetables.",
            seed: "stirfry",
            times: ("5 min", "10 min"),
            servings: 2,
            cost: Cost::Moderate,
            tags: &["High-Protein", "Quick Meal"],
            ingredients: &[
                "1 lb boneless, skinless chicken breast, cut into chunks",
                "1 tbsp soy sauce",
                "1 tbsp honey",
                "1 tsp sesame oil",
                "2 cups mixed vegetables (broccoli, bell peppers, carrots)",
                "1 tbsp olive oil",
            ],
            instructions: &[
                "In a small bowl, whisk together soy sauce, honey, and sesame oil.",
                "Heat olive oil in a large skillet or wok over medium-high heat.",
                "Add chicken and cook until browned and cooked through.",
                "Add mixed vegetables and stir-fry for 3-5 minutes until crisp-tender.",
                "Pour the sauce over the chicken and vegetables and toss to coat. Serve immediately.",
            ],
            nutrition: ["450 kcal", "40g", "25g", "20g"],
        }
        .build(),
        Sample {
            id: "3",
            title: "Simple Avocado & Tomato Salad",
            description: "A refreshing and simple salad that takes only minutes to prepare. Perfect for a light lunch or side dish.",
            seed: "avocado",
            times: ("10 min", "0 min"),
            servings: 2,
            cost: Cost::Budget,
            tags: &["Gluten-Free", "Low-Carb"],
            ingredients: &[
                "2 large ripe avocados, diced",
                "1 pint cherry tomatoes, halved",
                "1/4 red onion, thinly sliced",
                "1/4 cup fresh cilantro, chopped",
                "Juice of 1 lime",
                "2 tbsp olive oil",
            ],
            instructions: &[
                "In a medium bowl, gently combine diced avocados, cherry tomatoes, red onion, and cilantro.",
                "In a small bowl, whisk together lime juice and olive oil.",
                "Pour the dressing over the salad and toss gently to combine.",
                "Season with salt and pepper to taste. Serve immediately.",
            ],
            nutrition: ["300 kcal", "4g", "15g", "25g"],
        }
        .build(),
    ]
}
