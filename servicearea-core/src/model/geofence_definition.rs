use serde::{Deserialize, Serialize};

use crate::model::{GeofenceId, TimeRestriction, ZoneType};

/// an unvalidated geofence as submitted by an administrator or read from a
/// seed file. polygon coordinates are [lat, lng] pairs, open or closed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceDefinition {
    pub id: GeofenceId,
    pub name: String,
    pub zone_type: ZoneType,
    pub polygon: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_restriction: Option<TimeRestriction>,
    #[serde(default = "default_price_modifier")]
    pub price_modifier: f64,
    #[serde(default)]
    pub description: String,
}

impl GeofenceDefinition {
    pub fn new(
        id: &str,
        name: &str,
        zone_type: ZoneType,
        polygon: Vec<[f64; 2]>,
        price_modifier: f64,
    ) -> GeofenceDefinition {
        GeofenceDefinition {
            id: GeofenceId::from(id),
            name: name.to_string(),
            zone_type,
            polygon,
            time_restriction: None,
            price_modifier,
            description: String::new(),
        }
    }

    pub fn with_time_restriction(mut self, restriction: TimeRestriction) -> GeofenceDefinition {
        self.time_restriction = Some(restriction);
        self
    }
}

pub fn default_price_modifier() -> f64 {
    1.0
}
