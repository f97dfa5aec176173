use crate::application::event_bus::{AppEvent, EventBus};
use crate::domain::{
    entities::{Favorites, Recipe, RecipeId, normalize_recipes},
    errors::StorageError,
    repositories::KeyValueStore,
};
use serde_json::Value;
use std::sync::Arc;

/// Storage key holding the JSON array of favorited recipes.
pub const FAVORITES_KEY: &str = "favorites";

/// How reading the stored wishlist went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Some records had no usable id and were left out.
    Partial { skipped: usize },
    Absent,
    Malformed,
    ReadFailed,
}

impl LoadOutcome {
    /// Whether the stored value may be replaced by the loaded set at startup.
    /// A failed read or a partially usable value is left alone.
    pub fn allows_write_back(self) -> bool {
        matches!(self, LoadOutcome::Absent | LoadOutcome::Malformed)
    }
}

/// Reads the stored wishlist. Anything unreadable counts as an empty
/// wishlist; records are normalized one by one so a single odd field never
/// costs the rest.
pub fn load_favorites(store: &dyn KeyValueStore) -> (Favorites, LoadOutcome) {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No stored favorites, starting empty");
            return (Favorites::new(), LoadOutcome::Absent);
        }
        Err(e) => {
            tracing::warn!("Could not read stored favorites, starting empty: {}", e);
            return (Favorites::new(), LoadOutcome::ReadFailed);
        }
    };

    if raw.trim().is_empty() {
        return (Favorites::new(), LoadOutcome::Absent);
    }

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => (Favorites::new(), LoadOutcome::Absent),
        Ok(Value::Array(items)) => {
            let (recipes, skipped) = normalize_recipes(items);
            let favorites = Favorites::from_recipes(recipes);
            if skipped == 0 {
                (favorites, LoadOutcome::Loaded)
            } else {
                tracing::warn!("Left out {} unusable stored favorites", skipped);
                (favorites, LoadOutcome::Partial { skipped })
            }
        }
        Ok(other) => {
            tracing::warn!("Stored favorites are not a list, starting empty: {}", other);
            (Favorites::new(), LoadOutcome::Malformed)
        }
        Err(e) => {
            tracing::warn!("Stored favorites are malformed, starting empty: {}", e);
            (Favorites::new(), LoadOutcome::Malformed)
        }
    }
}

/// Writes the whole wishlist under [`FAVORITES_KEY`], replacing the old value.
pub fn persist_favorites(
    store: &dyn KeyValueStore,
    favorites: &Favorites,
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(favorites)?;
    store.set(FAVORITES_KEY, &payload)
}

/// Owns the in-session wishlist and mirrors every change into the store.
///
/// The in-memory set is authoritative: a failed write is logged and
/// remembered in [`last_persist_error`](Self::last_persist_error) but never
/// rolls back the change.
pub struct FavoritesManager {
    store: Arc<dyn KeyValueStore>,
    events: EventBus,
    favorites: Favorites,
    last_persist_error: Option<String>,
}

impl FavoritesManager {
    pub fn initialize(store: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        let (favorites, outcome) = load_favorites(store.as_ref());
        tracing::info!("Loaded {} favorite recipes ({:?})", favorites.len(), outcome);

        let mut manager = Self {
            store,
            events,
            favorites,
            last_persist_error: None,
        };
        match outcome {
            _ if outcome.allows_write_back() => {
                manager.persist();
            }
            LoadOutcome::Partial { skipped } => tracing::warn!(
                "Keeping {} unusable stored records until the wishlist changes",
                skipped
            ),
            LoadOutcome::ReadFailed => {
                tracing::warn!("Leaving unreadable stored favorites untouched")
            }
            _ => {}
        }
        manager
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.favorites.contains(id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn toggle(&mut self, recipe: &Recipe) -> &Favorites {
        let next = self.favorites.toggled(recipe);
        if next.contains(&recipe.id) {
            tracing::info!("Added '{}' ({}) to the wishlist", recipe.name, recipe.id);
        } else {
            tracing::info!("Removed '{}' ({}) from the wishlist", recipe.name, recipe.id);
        }
        self.commit(next)
    }

    pub fn add(&mut self, recipe: &Recipe) -> &Favorites {
        let next = self.favorites.with(recipe);
        self.commit(next)
    }

    pub fn remove(&mut self, id: &RecipeId) -> &Favorites {
        let next = self.favorites.without(id);
        tracing::info!("Removed recipe {} from the wishlist", id);
        self.commit(next)
    }

    /// Adds every recipe whose id is not already present, keeping existing
    /// entries. Returns how many were added.
    pub fn merge(&mut self, recipes: Vec<Recipe>) -> usize {
        let before = self.favorites.len();
        let next = recipes
            .iter()
            .fold(self.favorites.clone(), |favorites, recipe| favorites.with(recipe));
        let added = next.len() - before;
        self.commit(next);
        added
    }

    /// Writes the current set to the store. Errors are logged and kept for
    /// the view, never propagated.
    pub fn persist(&mut self) -> bool {
        match persist_favorites(self.store.as_ref(), &self.favorites) {
            Ok(()) => {
                self.last_persist_error = None;
                true
            }
            Err(e) => {
                tracing::error!("Failed to save favorites, keeping them in memory: {}", e);
                let reason = e.to_string();
                self.last_persist_error = Some(reason.clone());
                self.events.publish(AppEvent::PersistFailed(reason));
                false
            }
        }
    }

    fn commit(&mut self, next: Favorites) -> &Favorites {
        self.favorites = next;
        self.persist();
        self.events
            .publish(AppEvent::FavoritesChanged(self.favorites.clone()));
        &self.favorites
    }
}
