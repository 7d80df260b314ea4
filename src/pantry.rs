use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PantryItem {
    pub name: String,
    pub quantity: String,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    Pescatarian,
}

impl DietaryRestriction {
    pub fn label(self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "Vegetarian",
            DietaryRestriction::Vegan => "Vegan",
            DietaryRestriction::Pescatarian => "Pescatarian",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthGoal {
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    #[serde(rename = "Gain Muscle")]
    GainMuscle,
    #[default]
    #[serde(rename = "Maintain Health")]
    MaintainHealth,
}

impl HealthGoal {
    pub fn label(self) -> &'static str {
        match self {
            HealthGoal::LoseWeight => "Lose Weight",
            HealthGoal::GainMuscle => "Gain Muscle",
            HealthGoal::MaintainHealth => "Maintain Health",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NutrientFocus {
    #[serde(rename = "High Protein")]
    HighProtein,
    #[serde(rename = "Low Carb")]
    LowCarb,
    #[serde(rename = "High Fiber")]
    HighFiber,
}

impl NutrientFocus {
    pub fn label(self) -> &'static str {
        match self {
            NutrientFocus::HighProtein => "High Protein",
            NutrientFocus::LowCarb => "Low Carb",
            NutrientFocus::HighFiber => "High Fiber",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(DietaryRestriction, HealthGoal, NutrientFocus);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("calorie goal {0} kcal is outside {min}..={max}", min = CalorieGoal::MIN, max = CalorieGoal::MAX)]
pub struct CalorieGoalOutOfRange(pub u32);

/// Daily calorie target, always within `MIN..=MAX`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct CalorieGoal(u32);

impl CalorieGoal {
    pub const MIN: u32 = 1200;
    pub const MAX: u32 = 3000;

    pub fn new(kcal: u32) -> Result<Self, CalorieGoalOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&kcal) {
            Ok(Self(kcal))
        } else {
            Err(CalorieGoalOutOfRange(kcal))
        }
    }

    pub fn kcal(self) -> u32 {
        self.0
    }
}

impl Default for CalorieGoal {
    fn default() -> Self {
        Self(2000)
    }
}

impl TryFrom<u32> for CalorieGoal {
    type Error = CalorieGoalOutOfRange;

    fn try_from(kcal: u32) -> Result<Self, Self::Error> {
        Self::new(kcal)
    }
}

impl From<CalorieGoal> for u32 {
    fn from(goal: CalorieGoal) -> Self {
        goal.0
    }
}

/// Empty sets mean "no restriction" / "balanced".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    #[serde(default)]
    pub restrictions: BTreeSet<DietaryRestriction>,
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    #[serde(default)]
    pub health_goal: HealthGoal,
    #[serde(default)]
    pub calorie_goal: CalorieGoal,
    #[serde(default)]
    pub nutrient_focus: BTreeSet<NutrientFocus>,
}
