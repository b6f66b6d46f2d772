use thiserror::Error;

/// Errors raised by network construction, inference and training.
///
/// Activation saturation is deliberately absent: out-of-range arguments are
/// clipped to the asymptote inside `ActivationFunction` and never reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// The topology has fewer than two entries or a zero-width layer.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A vector handed to the network does not match the configured width.
    #[error("dimension mismatch for {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// Training parameters that make the run meaningless (empty dataset, zero epochs).
    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

impl NetworkError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize) -> Self {
        NetworkError::DimensionMismatch { context, expected, got }
    }
}
