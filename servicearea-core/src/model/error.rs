use crate::geometry::GeometryError;

/// reasons a submitted geofence cannot enter the zone store.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("invalid time restriction: {0}")]
    InvalidTimeRestriction(String),
    #[error("price modifier must be a finite number greater than zero, found {0}")]
    InvalidPriceModifier(f64),
    #[error("geofence id must not be empty")]
    InvalidGeofenceId,
}

impl ValidationError {
    /// stable name of this error category, reported to API callers
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Geometry(e) => e.kind(),
            ValidationError::InvalidTimeRestriction(_) => "InvalidTimeRestriction",
            ValidationError::InvalidPriceModifier(_) => "InvalidPriceModifier",
            ValidationError::InvalidGeofenceId => "InvalidGeofenceId",
        }
    }
}
