//! Food entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use foods_core::error::AppError;
use foods_core::result::AppResult;
use foods_core::traits::Record;

/// A dish in the catalog.
///
/// Every field except the identifier is optional so the same shape serves
/// as a creation body and as a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Food {
    /// Storage-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique dish name.
    #[serde(default)]
    pub name: Option<String>,
    /// Cuisine style.
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Diet category (vegan, vegetarian, ...).
    #[serde(default)]
    pub diet: Option<String>,
    /// Region of origin.
    #[serde(default)]
    pub region: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub info: Option<String>,
    /// Image reference.
    #[serde(default)]
    pub img: Option<String>,
}

impl Food {
    /// Shorthand for a named food in a region.
    pub fn named(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            region: Some(region.into()),
            ..Self::default()
        }
    }
}

impl Record for Food {
    const RESOURCE: &'static str = "food";
    const FIELDS: &'static [&'static str] = &["name", "cuisine", "diet", "region", "info", "img"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => self.name.as_deref(),
            "cuisine" => self.cuisine.as_deref(),
            "diet" => self.diet.as_deref(),
            "region" => self.region.as_deref(),
            "info" => self.info.as_deref(),
            "img" => self.img.as_deref(),
            _ => None,
        }
    }

    fn unique_key(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn check_required(&self) -> AppResult<()> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => Err(AppError::validation(
                "Food name is required",
                "Path `name` is required",
            )),
        }
    }

    fn merge(&mut self, patch: Self) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.cuisine.is_some() {
            self.cuisine = patch.cuisine;
        }
        if patch.diet.is_some() {
            self.diet = patch.diet;
        }
        if patch.region.is_some() {
            self.region = patch.region;
        }
        if patch.info.is_some() {
            self.info = patch.info;
        }
        if patch.img.is_some() {
            self.img = patch.img;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_absent_fields_and_id() {
        let mut stored = Food {
            id: Some("1".to_string()),
            cuisine: Some("andina".to_string()),
            ..Food::named("ceviche", "peru")
        };
        let patch = Food {
            id: Some("other".to_string()),
            info: Some("fresh fish".to_string()),
            ..Food::default()
        };

        stored.merge(patch);

        assert_eq!(stored.id.as_deref(), Some("1"));
        assert_eq!(stored.name.as_deref(), Some("ceviche"));
        assert_eq!(stored.cuisine.as_deref(), Some("andina"));
        assert_eq!(stored.info.as_deref(), Some("fresh fish"));
    }

    #[test]
    fn test_name_is_required() {
        assert!(Food::named("pastel de choclo", "chile").check_required().is_ok());
        assert!(Food::default().check_required().is_err());
        assert!(Food::named("  ", "chile").check_required().is_err());
    }

    #[test]
    fn test_json_shape() {
        let food: Food = serde_json::from_value(serde_json::json!({
            "name": "arepa",
            "region": "mexico",
            "img": "arepa.png"
        }))
        .unwrap();
        assert_eq!(food.field("img"), Some("arepa.png"));
        assert_eq!(food.id, None);

        let json = serde_json::to_value(&food).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "arepa");
    }
}
