use crate::geometry::GeometryError;

/// resolution only fails on malformed input, never on stored zone state.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("invalid query location: {0}")]
    InvalidCoordinate(#[from] GeometryError),
}

impl ResolutionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionError::InvalidCoordinate(_) => "InvalidCoordinate",
        }
    }
}
