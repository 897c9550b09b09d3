#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("coordinate ({lat}, {lng}) is outside of the valid range lat [-90, 90], lng [-180, 180]")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),
}

impl GeometryError {
    /// stable name of this error category, reported to API callers
    pub fn kind(&self) -> &'static str {
        match self {
            GeometryError::InvalidCoordinate { .. } => "InvalidCoordinate",
            GeometryError::DegeneratePolygon(_) => "DegeneratePolygon",
        }
    }
}
