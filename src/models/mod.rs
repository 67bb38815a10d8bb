//! Core data models for the estimation engine.

mod indices;
mod queue;
mod reward;

pub use indices::*;
pub use queue::*;
pub use reward::*;
