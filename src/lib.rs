pub mod config;
pub mod logging;
pub mod pipeline;
pub mod template;
pub mod version;
