//! Rating domain errors

use thiserror::Error;

/// Errors raised by the comparison board
///
/// Rate calculation itself never fails: unrecognized enum values price at
/// the neutral factor by design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Unknown quote option: {0}")]
    UnknownOption(String),
}
