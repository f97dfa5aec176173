use crate::application::event_bus::{AppEvent, EventBus};
use crate::domain::{entities::Recipe, repositories::RecipeRepository};
use std::sync::Arc;

/// Turns a query into the list of recipes to show. Any failure degrades to
/// an empty list; the cause only goes to the log and the event bus.
pub struct SearchRecipes {
    repository: Arc<dyn RecipeRepository>,
    events: EventBus,
}

impl SearchRecipes {
    pub fn new(repository: Arc<dyn RecipeRepository>, events: EventBus) -> Self {
        Self { repository, events }
    }

    pub async fn execute(&self, query: &str) -> Vec<Recipe> {
        match self.repository.search_recipes(query).await {
            Ok(recipes) => {
                tracing::info!("Found {} recipes for '{}'", recipes.len(), query);
                self.events.publish(AppEvent::SearchCompleted {
                    query: query.to_string(),
                    count: recipes.len(),
                });
                recipes
            }
            Err(e) => {
                tracing::warn!("Error fetching recipes for '{}': {}", query, e);
                self.events.publish(AppEvent::SearchFailed {
                    query: query.to_string(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        }
    }
}
