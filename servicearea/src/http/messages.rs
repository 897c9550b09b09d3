use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use servicearea_core::{
    model::{
        default_price_modifier, Geofence, GeofenceDefinition, GeofenceId, TimeRestriction,
        ZoneType,
    },
    resolution::ResolutionResult,
};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct EligibilityRequest {
    pub lat: f64,
    pub lng: f64,
    /// RFC 3339 instant of the booking, defaults to the time of the request.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub serviceable: bool,
    pub governing_zone_id: Option<GeofenceId>,
    pub zone_type: ZoneType,
    pub price_modifier: f64,
    pub matched_zone_ids: Vec<GeofenceId>,
    pub time_restricted: bool,
    pub snapshot_version: u64,
}

impl From<ResolutionResult> for EligibilityResponse {
    fn from(result: ResolutionResult) -> Self {
        EligibilityResponse {
            serviceable: result.serviceable,
            governing_zone_id: result.governing_zone,
            zone_type: result.zone_type,
            price_modifier: result.effective_price_modifier,
            matched_zone_ids: result.matched_zones,
            time_restricted: result.time_restricted,
            snapshot_version: result.snapshot_version,
        }
    }
}

/// body of `PUT /geofences/{id}`, the id is taken from the path.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceRequest {
    pub name: String,
    pub zone_type: ZoneType,
    pub polygon: Vec<[f64; 2]>,
    #[serde(default)]
    pub time_restriction: Option<TimeRestriction>,
    #[serde(default = "default_price_modifier")]
    pub price_modifier: f64,
    #[serde(default)]
    pub description: String,
}

impl GeofenceRequest {
    pub fn into_definition(self, id: GeofenceId) -> GeofenceDefinition {
        GeofenceDefinition {
            id,
            name: self.name,
            zone_type: self.zone_type,
            polygon: self.polygon,
            time_restriction: self.time_restriction,
            price_modifier: self.price_modifier,
            description: self.description,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct GeofenceListing {
    pub version: u64,
    pub geofences: Vec<Geofence>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub zones: usize,
    pub version: u64,
}
