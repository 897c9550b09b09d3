use crate::model::{GeofenceId, ValidationError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("geofence '{id}' is invalid: {source}")]
    InvalidGeofence {
        id: GeofenceId,
        source: ValidationError,
    },
    #[error("geofence '{0}' not found")]
    ZoneNotFound(GeofenceId),
    #[error("geofence id '{0}' appears more than once in the zone collection")]
    DuplicateId(GeofenceId),
}

impl StoreError {
    /// stable name of this error category, reported to API callers
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::InvalidGeofence { source, .. } => source.kind(),
            StoreError::ZoneNotFound(_) => "ZoneNotFound",
            StoreError::DuplicateId(_) => "DuplicateId",
        }
    }
}
