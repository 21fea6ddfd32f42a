//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the exported model artifacts.

mod inference;

pub use inference::{Regressor, Scaler};
