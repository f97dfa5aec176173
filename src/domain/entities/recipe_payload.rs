use super::{Recipe, RecipeId};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A recipe record as found in the wild (API response, stored wishlist,
/// imported file), every field optional and untyped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipePayload {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    image: Option<Value>,
    #[serde(default)]
    ingredients: Option<Value>,
    #[serde(default)]
    instructions: Option<Value>,
    #[serde(default)]
    servings: Option<Value>,
    #[serde(default)]
    prep_time_minutes: Option<Value>,
    #[serde(default)]
    cook_time_minutes: Option<Value>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RecipePayload {
    fn into_recipe(self) -> Option<Recipe> {
        let Some(id) = self.id.as_ref().and_then(recipe_id) else {
            tracing::warn!("Skipping recipe without a usable id: {:?}", self.id);
            return None;
        };

        Some(Recipe {
            id,
            name: self.name.and_then(non_empty_string).unwrap_or_default(),
            image: self.image.and_then(non_empty_string),
            ingredients: string_list(self.ingredients),
            instructions: string_list(self.instructions),
            servings: self.servings.as_ref().and_then(minutes_or_count),
            prep_time_minutes: self.prep_time_minutes.as_ref().and_then(minutes_or_count),
            cook_time_minutes: self.cook_time_minutes.as_ref().and_then(minutes_or_count),
            rating: self.rating.as_ref().and_then(Value::as_f64),
            extra: self.extra,
        })
    }
}

/// Turns one loosely typed record into a [`Recipe`]. Missing or mistyped
/// fields fall back to empty values; only a record without a usable id (or
/// one that is not an object at all) is rejected, since it could never be
/// favorited.
pub fn normalize_recipe(raw: Value) -> Option<Recipe> {
    match serde_json::from_value::<RecipePayload>(raw) {
        Ok(payload) => payload.into_recipe(),
        Err(e) => {
            tracing::warn!("Skipping recipe that is not an object: {}", e);
            None
        }
    }
}

/// Normalizes every record, returning the usable recipes and how many were
/// skipped.
pub fn normalize_recipes(raw: Vec<Value>) -> (Vec<Recipe>, usize) {
    let total = raw.len();
    let recipes: Vec<Recipe> = raw.into_iter().filter_map(normalize_recipe).collect();
    let skipped = total - recipes.len();
    (recipes, skipped)
}

fn recipe_id(value: &Value) -> Option<RecipeId> {
    match value {
        Value::Number(number) => number.as_i64().map(RecipeId::Number),
        Value::String(text) if !text.trim().is_empty() => Some(RecipeId::Text(text.clone())),
        _ => None,
    }
}

fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}

fn string_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(non_empty_string).collect(),
        Some(Value::String(text)) if !text.trim().is_empty() => vec![text],
        _ => Vec::new(),
    }
}

fn minutes_or_count(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_payload_maps_every_field() {
        let recipe = normalize_recipe(json!({
            "id": 1,
            "name": "Classic Margherita Pizza",
            "image": "https://cdn.dummyjson.com/recipe-images/1.webp",
            "ingredients": ["Pizza dough", "Tomato sauce"],
            "instructions": ["Preheat the oven", "Bake"],
            "servings": 4,
            "prepTimeMinutes": 20,
            "cookTimeMinutes": 15,
            "rating": 4.6,
            "cuisine": "Italian"
        }))
        .unwrap();

        assert_eq!(recipe.id, RecipeId::Number(1));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.prep_time_minutes, Some(20));
        assert_eq!(recipe.cook_time_minutes, Some(15));
        assert_eq!(recipe.rating, Some(4.6));
        assert_eq!(recipe.extra.get("cuisine"), Some(&json!("Italian")));
    }

    #[test]
    fn missing_fields_become_defaults() {
        let recipe = normalize_recipe(json!({"id": 3, "name": null, "ingredients": null})).unwrap();

        assert_eq!(recipe.name, "");
        assert!(recipe.image.is_none());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.servings.is_none());
        assert!(recipe.rating.is_none());
    }

    #[test]
    fn mistyped_fields_are_dropped_not_fatal() {
        let recipe = normalize_recipe(json!({
            "id": 2,
            "name": "Pie",
            "servings": 2.5,
            "rating": "great",
            "cookTimeMinutes": -5
        }))
        .unwrap();

        assert_eq!(recipe.name, "Pie");
        assert!(recipe.servings.is_none());
        assert!(recipe.rating.is_none());
        assert!(recipe.cook_time_minutes.is_none());
    }

    #[test]
    fn single_instruction_string_becomes_a_list() {
        let recipe =
            normalize_recipe(json!({"id": 3, "name": "Toast", "instructions": "Toast it."})).unwrap();
        assert_eq!(recipe.instructions, vec!["Toast it.".to_string()]);
    }

    #[test]
    fn records_without_usable_id_are_dropped() {
        assert!(normalize_recipe(json!({"name": "Nameless"})).is_none());
        assert!(normalize_recipe(json!({"id": "  ", "name": "Blank"})).is_none());
        assert!(normalize_recipe(json!({"id": 1.5, "name": "Fraction"})).is_none());
        assert!(normalize_recipe(json!(42)).is_none());
    }

    #[test]
    fn skipped_records_are_counted() {
        let (recipes, skipped) = normalize_recipes(vec![
            json!({"id": 1, "name": "Soup"}),
            json!("junk"),
            json!({"id": 2, "name": "Pie", "ingredients": null}),
        ]);

        assert_eq!(recipes.len(), 2);
        assert_eq!(skipped, 1);
    }
}
