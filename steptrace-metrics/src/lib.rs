//! Time-domain performance metrics for sampled step responses.
//!
//! Given a [`Signal`] evaluated over a [`TimeGrid`], this crate finds the
//! practical settling time with respect to a [`ToleranceBand`] (the first
//! entry into the band from which the signal never departs again), measures
//! overshoot and peak location, and batch-evaluates labeled systems into
//! ordered [`ResponseRecord`]s.
//!
//! All reported times are grid sample times; nothing is interpolated
//! between samples, so resolution is bounded by the grid's spacing.
//!
//! [`Signal`]: steptrace_core::Signal
//! [`TimeGrid`]: steptrace_core::TimeGrid

mod band;
mod batch;
mod error;
mod measure;
mod settling;

pub use band::{BandError, ToleranceBand};
pub use batch::{BatchError, ResponseRecord, evaluate_batch};
pub use error::MetricsError;
pub use measure::{peak, percent_overshoot};
pub use settling::{
    SettlingDetector, SettlingInput, SettlingTime, first_crossing_time, first_persistent_time,
    settling_time,
};
