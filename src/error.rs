//! Error type shared by every fallible operation of the engine.
//!
//! Validation happens at the public entry points before any buffer is
//! touched, so a rejected call never leaves the fields half-updated.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The call was rejected; the simulation state is unchanged.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A field holds NaN or infinite values after a step. Not fatal: the
    /// solver keeps running, but the results are meaningless until reset.
    #[error("numerical instability: {cells} non-finite cells in {field}")]
    NumericalInstability { field: &'static str, cells: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FluidError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FluidError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FluidError::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for FluidError {
    fn from(e: serde_json::Error) -> Self {
        FluidError::Config(e.to_string())
    }
}
