//! CLI library components for the Pluxee order generator.

pub mod logging;
pub mod pipeline;
