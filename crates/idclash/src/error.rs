//! Error types for the collision analysis engine.
//!
//! This module defines the central `Error` enum, which captures every
//! reportable failure of a single analysis request. All variants are terminal
//! for the request that produced them: nothing is retried internally and
//! nothing is logged on the error path; the error value is returned to the
//! caller, whose job is to render the message verbatim.

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for the collision analysis engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input string did not match the `format:length:rate/unit` grammar.
    #[error("invalid input: {reason}")]
    Parse { reason: String },

    /// The requested format key is not in the generator catalog.
    #[error("unknown generator `{name}` (supported: {supported})")]
    UnsupportedGenerator { name: String, supported: String },

    /// The rate unit is not one of `sec`, `min`, `ms`, `ns`.
    #[error("unsupported rate unit `{unit}` (expected sec, min, ms or ns)")]
    UnsupportedRateUnit { unit: String },

    /// A generator was constructed with an unusable parameter.
    #[error("generator construction failed: {reason}")]
    GeneratorConstruction { reason: String },

    /// The probability engine received a non-positive ID count or an empty
    /// ID space.
    #[error("calculation error: {reason}")]
    Calculation { reason: String },

    /// The simulation engine received a non-positive iteration count.
    #[error("simulation error: {reason}")]
    Simulation { reason: String },
}
