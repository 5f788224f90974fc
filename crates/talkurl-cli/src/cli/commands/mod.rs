//! CLI command handlers, one per file.

mod batch;
mod compose;
mod config;
mod slug;

pub use batch::run_batch;
pub use compose::run_compose;
pub use config::run_config;
pub use slug::run_slug;
