pub mod dto;
pub mod event_bus;
pub mod use_case_container;
pub mod use_cases;

pub use event_bus::{AppEvent, EventBus};
pub use use_case_container::UseCaseContainer;
