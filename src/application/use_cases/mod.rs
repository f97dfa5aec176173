pub mod favorites_operations;
pub mod search_operations;
pub mod wishlist_transfer;

pub use favorites_operations::*;
pub use search_operations::*;
pub use wishlist_transfer::*;
