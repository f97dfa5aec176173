use crate::domain::entities::Favorites;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub enum AppEvent {
    FavoritesChanged(Favorites),
    PersistFailed(String),
    SearchCompleted { query: String, count: usize },
    SearchFailed { query: String, reason: String },
}

type Listener = Box<dyn Fn(&AppEvent) + Send + Sync>;

/// Fan-out of application events to whoever subscribed. Listeners run
/// synchronously on the publishing thread.
pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn publish(&self, event: AppEvent) {
        match self.listeners.lock() {
            Ok(listeners) => {
                for listener in listeners.iter() {
                    listener(&event);
                }
            }
            Err(e) => tracing::error!("Event listeners unavailable, dropping {:?}: {}", event, e),
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        match self.listeners.lock() {
            Ok(mut listeners) => listeners.push(Box::new(listener)),
            Err(e) => tracing::error!("Could not register event listener: {}", e),
        }
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
