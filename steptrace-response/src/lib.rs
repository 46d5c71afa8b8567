//! Closed-form unit-step responses for canonical first- and second-order
//! LTI systems.
//!
//! The central type is [`SecondOrderParameters`], which classifies a
//! normalized second-order system `G(s) = ωₙ² / (s² + 2ζωₙs + ωₙ²)` into
//! its damping [`Regime`] once and evaluates the matching closed-form
//! response over a [`TimeGrid`]. First-order systems, series RLC / RC
//! circuit conversions, and transient-spec design helpers round out the
//! crate.
//!
//! [`TimeGrid`]: steptrace_core::TimeGrid

mod circuit;
mod design;
mod error;
mod first_order;
mod second_order;

pub use circuit::{RcFilter, SeriesRlc};
pub use design::{damping_from_overshoot, frequency_from_settling, from_transient_specs};
pub use error::ParameterError;
pub use first_order::{FirstOrderParameters, FirstOrderStep, FirstOrderStepInput};
pub use second_order::{Regime, SecondOrderParameters, SecondOrderStep, SecondOrderStepInput};
