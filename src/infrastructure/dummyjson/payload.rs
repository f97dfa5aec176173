use crate::domain::entities::{Recipe, normalize_recipe};
use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /recipes/search`. Only `recipes` matters; `total`, `skip`
/// and `limit` are ignored since results are never paginated.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub recipes: Option<Vec<Value>>,
}

impl SearchResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
            .unwrap_or_default()
            .into_iter()
            .filter_map(normalize_recipe)
            .collect()
    }
}
