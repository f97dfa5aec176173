use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a recipe. The API hands out integers, but stored or
/// imported data may carry string ids, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(id) => write!(f, "{}", id),
            RecipeId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for RecipeId {
    fn from(id: i64) -> Self {
        RecipeId::Number(id)
    }
}

impl From<i32> for RecipeId {
    fn from(id: i32) -> Self {
        RecipeId::Number(i64::from(id))
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Everything else the API sent along. Carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            servings: None,
            prep_time_minutes: None,
            cook_time_minutes: None,
            rating: None,
            extra: Map::new(),
        }
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn with_times(mut self, prep_minutes: u32, cook_minutes: u32) -> Self {
        self.prep_time_minutes = Some(prep_minutes);
        self.cook_time_minutes = Some(cook_minutes);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_ids_deserialize() {
        let numeric: Recipe = serde_json::from_value(json!({"id": 5, "name": "Pizza"})).unwrap();
        let text: Recipe = serde_json::from_value(json!({"id": "a-5", "name": "Pizza"})).unwrap();

        assert_eq!(numeric.id, RecipeId::Number(5));
        assert_eq!(text.id, RecipeId::Text("a-5".to_string()));
        assert_ne!(numeric.id, RecipeId::Text("5".to_string()));
    }

    #[test]
    fn unknown_fields_survive_serialization() {
        let raw = json!({
            "id": 1,
            "name": "Classic Margherita Pizza",
            "prepTimeMinutes": 20,
            "cuisine": "Italian",
            "tags": ["Pizza", "Italian"]
        });

        let recipe: Recipe = serde_json::from_value(raw).unwrap();
        assert_eq!(recipe.prep_time_minutes, Some(20));
        assert_eq!(recipe.extra.get("cuisine"), Some(&json!("Italian")));

        let back = serde_json::to_value(&recipe).unwrap();
        assert_eq!(back["tags"], json!(["Pizza", "Italian"]));
        assert_eq!(back["prepTimeMinutes"], json!(20));
        assert!(back.get("servings").is_none());
    }

    #[test]
    fn display_matches_raw_id() {
        assert_eq!(RecipeId::from(42).to_string(), "42");
        assert_eq!(RecipeId::from("abc").to_string(), "abc");
    }
}
