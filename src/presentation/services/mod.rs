pub mod async_executor;
mod log_capture;
mod search_tasks;

pub use async_executor::AsyncExecutor;
pub use log_capture::init_log_capture;
pub use search_tasks::SearchTaskManager;
