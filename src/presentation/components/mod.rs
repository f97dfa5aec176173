pub mod info_modal;
pub mod log_manager;
pub mod recipe_cards;
pub mod search_state;
pub mod tab_manager;

pub use info_modal::InfoModal;
pub use log_manager::{LogLevel, LogManager};
pub use recipe_cards::{CardAction, RecipeCards};
pub use search_state::SearchState;
pub use tab_manager::{Tab, TabManager};
