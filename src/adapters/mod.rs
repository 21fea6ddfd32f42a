//! Adapters layer: Concrete implementations of ports.
//!
//! - `artifacts`: JSON-exported dense network and fitted scaler

pub mod artifacts;
