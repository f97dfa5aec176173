pub mod config;
pub mod favorites;
pub mod recipe;
pub mod recipe_payload;

pub use config::{AppConfig, ThemeMode};
pub use favorites::Favorites;
pub use recipe::{Recipe, RecipeId};
pub use recipe_payload::{normalize_recipe, normalize_recipes};
