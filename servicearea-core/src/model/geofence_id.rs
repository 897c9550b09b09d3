use serde::{Deserialize, Serialize};

/// unique, stable identifier of a geofence. ordering is lexicographic and is
/// used as the final precedence tie-break.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeofenceId(pub String);

impl GeofenceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GeofenceId {
    fn from(value: &str) -> Self {
        GeofenceId(value.to_string())
    }
}

impl From<String> for GeofenceId {
    fn from(value: String) -> Self {
        GeofenceId(value)
    }
}

impl std::fmt::Display for GeofenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
