pub mod log;
pub mod recipes;
pub mod settings;
pub mod wishlist;

pub use log::{LogAction, LogTab};
pub use recipes::{RecipesAction, RecipesTab};
pub use settings::{SettingsAction, SettingsTab};
pub use wishlist::{WishlistAction, WishlistTab};
