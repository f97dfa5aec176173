mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::{EventBus, UseCaseContainer};
use domain::repositories::{KeyValueStore, RecipeRepository};
use infrastructure::{ConfigRepository, DummyJsonRecipeRepository, FileKeyValueStore, InMemoryKeyValueStore};
use presentation::services::{AsyncExecutor, init_log_capture};
use presentation::ui::RecipeFinderApp;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let log_rx = init_log_capture()?;

    let config_repository = ConfigRepository::new();
    let config = config_repository.load_or_default();

    let recipe_repository: Arc<dyn RecipeRepository> =
        Arc::new(DummyJsonRecipeRepository::new(config.search_endpoint.clone())?);
    let use_cases = Arc::new(UseCaseContainer::new(
        recipe_repository,
        open_favorites_store(),
        EventBus::new(),
    ));
    let executor = AsyncExecutor::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Recipe Finder",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(RecipeFinderApp::new(
                use_cases,
                config_repository,
                config,
                executor,
                log_rx,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the application window: {}", e))
}

/// The on-disk store, or a session-only one when the storage directory
/// cannot be created.
fn open_favorites_store() -> Arc<dyn KeyValueStore> {
    let store = FileKeyValueStore::new();
    match store.ensure_dir() {
        Ok(()) => {
            tracing::info!("Favorites are stored in {}", store.storage_dir().display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!("Favorites will only last for this session: {}", e);
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}
