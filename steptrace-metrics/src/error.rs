use thiserror::Error;

/// Errors that can occur when analyzing a sampled signal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MetricsError {
    /// The signal and grid do not have one sample per time.
    #[error("signal has {signal} samples but grid has {grid}")]
    LengthMismatch { signal: usize, grid: usize },
}
