use crate::pantry::{DietaryPreferences, PantryItem};

/// How many recipes the model is asked for.
pub const RECIPE_COUNT: usize = 5;

const NO_RESTRICTIONS: &str = "None";
const EMPTY_PANTRY: &str = "None";
const NO_FOCUS: &str = "Balanced";

pub fn render_pantry(pantry: &[PantryItem]) -> String {
    if pantry.is_empty() {
        return EMPTY_PANTRY.to_string();
    }
    pantry
        .iter()
        .map(|item| format!("{} ({})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_or<I, S>(values: I, placeholder: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = values
        .into_iter()
        .map(|value| value.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        placeholder.to_string()
    } else {
        joined
    }
}

/// Builds the generation prompt. Pure: the same inputs always give the same bytes.
pub fn build_recipe_prompt(pantry: &[PantryItem], preferences: &DietaryPreferences) -> String {
    let pantry_list = render_pantry(pantry);
    let restrictions = join_or(
        preferences.restrictions.iter().map(|r| r.label()),
        NO_RESTRICTIONS,
    );
    let allergies = join_or(&preferences.allergies, NO_RESTRICTIONS);
    let nutrient_focus = join_or(
        preferences.nutrient_focus.iter().map(|n| n.label()),
        NO_FOCUS,
    );

    format!(
        "You are a creative chef creating recipes for the SmartMeals app.
Based on the user's pantry and dietary preferences, generate exactly {count} unique meal recipes.

User's Pantry: {pantry_list}.

User's Preferences:
- Dietary Restrictions: {restrictions}
- Allergies: {allergies}
- Health Goal: {health_goal}
- Daily Calorie Goal: ~{calories} kcal
- Nutritional Focus: {nutrient_focus}

Prioritize recipes that reuse as many of the available pantry items as possible.
Provide a diverse range of meal types (breakfast, lunch, dinner, snack).
Strictly respect every dietary restriction and never include an ingredient the user is allergic to.
For each recipe, write a unique, appealing title and a short, enticing description.
Every ingredient must have \"checked\" set to false.
Respond with the JSON array only, without any surrounding text or markdown.",
        count = RECIPE_COUNT,
        health_goal = preferences.health_goal.label(),
        calories = preferences.calorie_goal.kcal(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantry::{CalorieGoal, DietaryRestriction, HealthGoal, NutrientFocus};

    fn lentil_scenario() -> (Vec<PantryItem>, DietaryPreferences) {
        let pantry = vec![
            PantryItem::new("Lentils", "1 can"),
            PantryItem::new("Onion", "2 pcs"),
        ];
        let preferences = DietaryPreferences {
            restrictions: [DietaryRestriction::Vegan].into(),
            allergies: Default::default(),
            health_goal: HealthGoal::LoseWeight,
            calorie_goal: CalorieGoal::new(2200).unwrap(),
            nutrient_focus: [NutrientFocus::LowCarb].into(),
        };
        (pantry, preferences)
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let (pantry, preferences) = lentil_scenario();
        let first = build_recipe_prompt(&pantry, &preferences);
        let second = build_recipe_prompt(&pantry, &preferences);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_lentil_scenario_contents() {
        let (pantry, preferences) = lentil_scenario();
        let prompt = build_recipe_prompt(&pantry, &preferences);

        assert!(prompt.contains("User's Pantry: Lentils (1 can), Onion (2 pcs)."));
        assert!(prompt.contains("- Dietary Restrictions: Vegan\n"));
        assert!(prompt.contains("- Allergies: None\n"));
        assert!(prompt.contains("- Health Goal: Lose Weight\n"));
        assert!(prompt.contains("~2200 kcal"));
        assert!(prompt.contains("- Nutritional Focus: Low Carb\n"));
        assert!(prompt.contains("exactly 5 unique meal recipes"));
    }

    #[test]
    fn test_empty_sets_use_placeholders() {
        let prompt = build_recipe_prompt(
            &[PantryItem::new("Rice", "1 kg")],
            &DietaryPreferences::default(),
        );
        assert!(prompt.contains("- Dietary Restrictions: None\n"));
        assert!(prompt.contains("- Allergies: None\n"));
        assert!(prompt.contains("- Nutritional Focus: Balanced\n"));
    }

    #[test]
    fn test_multiple_values_are_comma_joined() {
        let preferences = DietaryPreferences {
            restrictions: [DietaryRestriction::Vegetarian, DietaryRestriction::Pescatarian].into(),
            allergies: ["Gluten".to_string(), "Peanuts".to_string()].into(),
            nutrient_focus: [NutrientFocus::HighProtein, NutrientFocus::HighFiber].into(),
            ..DietaryPreferences::default()
        };
        let prompt = build_recipe_prompt(&[], &preferences);
        assert!(prompt.contains("- Dietary Restrictions: Vegetarian, Pescatarian\n"));
        assert!(prompt.contains("- Allergies: Gluten, Peanuts\n"));
        assert!(prompt.contains("- Nutritional Focus: High Protein, High Fiber\n"));
        assert!(prompt.contains("User's Pantry: None."));
    }
}
