use crate::application::event_bus::EventBus;
use crate::application::use_cases::*;
use crate::domain::repositories::{KeyValueStore, RecipeRepository};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub search: Arc<SearchRecipes>,
    pub export_wishlist: Arc<ExportWishlist>,
    pub import_wishlist: Arc<ImportWishlist>,
    favorites_store: Arc<dyn KeyValueStore>,
    events: EventBus,
}

impl UseCaseContainer {
    pub fn new(
        recipe_repository: Arc<dyn RecipeRepository>,
        favorites_store: Arc<dyn KeyValueStore>,
        events: EventBus,
    ) -> Self {
        Self {
            search: Arc::new(SearchRecipes::new(recipe_repository, events.clone())),
            export_wishlist: Arc::new(ExportWishlist::new()),
            import_wishlist: Arc::new(ImportWishlist::new()),
            favorites_store,
            events,
        }
    }

    /// Reads the stored wishlist and hands back the manager that owns it.
    pub fn favorites_manager(&self) -> FavoritesManager {
        FavoritesManager::initialize(Arc::clone(&self.favorites_store), self.events.clone())
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}
