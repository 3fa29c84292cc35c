//! CLI library components for the admin console.

pub mod logging;
pub mod prompt;
pub mod render;
