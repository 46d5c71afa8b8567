//! Core types shared across the steptrace workspace.
//!
//! Provides the [`Component`] trait for pure, deterministic evaluation
//! units, the [`TimeGrid`] sample-time container, and the [`Signal`] type
//! holding one sampled output value per grid entry.

mod component;
mod grid;
mod signal;

pub use component::Component;
pub use grid::{GridError, TimeGrid};
pub use signal::Signal;
