pub mod config;
pub mod logging;

pub mod backend;
pub mod batch;
pub mod composer;
pub mod session;
pub mod slug;
pub mod template;

pub use backend::BackendType;
pub use composer::{SessionUrlComposer, SessionUrlComposition};
pub use session::Session;
