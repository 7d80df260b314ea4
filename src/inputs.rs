use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::pantry::{DietaryPreferences, PantryItem};
use crate::samples::{sample_pantry, sample_preferences};

/// Reads a JSON array of `{ "name", "quantity" }` objects. Other keys are ignored.
pub async fn load_pantry(path: Option<&Path>) -> Result<Vec<PantryItem>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read pantry file '{}'", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse pantry file '{}'", path.display()))
        }
        None => Ok(sample_pantry()),
    }
}

pub async fn load_preferences(path: Option<&Path>) -> Result<DietaryPreferences> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read preferences file '{}'", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse preferences file '{}'", path.display()))
        }
        None => Ok(sample_preferences()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantry::DietaryRestriction;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_pantry_ignores_extra_keys() {
        let file = temp_json(
            r#"[{ "id": "1", "name": "Milk", "quantity": "1 liter", "image": "https://picsum.photos/seed/milk/100/100" }]"#,
        );
        let pantry = load_pantry(Some(file.path())).await.unwrap();
        assert_eq!(pantry, vec![PantryItem::new("Milk", "1 liter")]);
    }

    #[tokio::test]
    async fn test_load_preferences_from_file() {
        let file = temp_json(r#"{ "restrictions": ["Pescatarian"], "calorieGoal": 1800 }"#);
        let prefs = load_preferences(Some(file.path())).await.unwrap();
        assert!(prefs.restrictions.contains(&DietaryRestriction::Pescatarian));
        assert_eq!(prefs.calorie_goal.kcal(), 1800);
    }

    #[tokio::test]
    async fn test_invalid_preferences_report_the_path() {
        let file = temp_json(r#"{ "calorieGoal": 900 }"#);
        let err = load_preferences(Some(file.path())).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse preferences file"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let err = load_pantry(Some(Path::new("/nonexistent/pantry.json")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read pantry file"));
    }

    #[tokio::test]
    async fn test_no_path_uses_samples() {
        assert_eq!(load_pantry(None).await.unwrap(), sample_pantry());
        assert_eq!(load_preferences(None).await.unwrap(), sample_preferences());
    }
}
