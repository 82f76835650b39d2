use thiserror::Error;

/// Errors raised before clustering starts
///
/// The engine never coerces bad input into a zone; every precondition failure
/// surfaces here instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneError {
    #[error("invalid cluster policy: {0}")]
    InvalidPolicy(&'static str),

    #[error("report {id}: invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("report {id}: confidence {confidence} outside [0, 100]")]
    InvalidConfidence { id: String, confidence: f64 },

    #[error("duplicate report id {0}")]
    DuplicateId(String),

    #[error("unknown severity tag {0:?}")]
    UnknownSeverity(String),

    #[error("unknown damage type {0:?}")]
    UnknownDamageType(String),
}
