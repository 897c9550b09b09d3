use serde::{Deserialize, Serialize};

use crate::model::{GeofenceId, ZoneType};

/// outcome of resolving a location against a zone set snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// every zone whose polygon contains the point, in precedence order.
    pub matched_zones: Vec<GeofenceId>,
    /// the zone whose policy applies, None when the location falls back to Standard.
    pub governing_zone: Option<GeofenceId>,
    pub zone_type: ZoneType,
    /// true if some matched zone was passed over because its time restriction
    /// was inactive at the query time.
    pub time_restricted: bool,
    pub effective_price_modifier: f64,
    pub serviceable: bool,
    pub snapshot_version: u64,
}
