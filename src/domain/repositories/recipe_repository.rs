use crate::domain::entities::Recipe;
use crate::domain::errors::SearchError;
use async_trait::async_trait;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>, SearchError>;
}
