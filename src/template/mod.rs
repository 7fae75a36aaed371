//! Dockerfile template handling
//!
//! - [`selector`]: Picks the template for a CrateDB version
//! - [`renderer`]: Renders a template with the resolved release
//! - [`error`]: Template loading and rendering errors

pub mod error;
pub mod renderer;
pub mod selector;
