use serde::Serialize;

use crate::model::{
    GeoPoint, GeofenceDefinition, GeofenceId, Polygon, TimeRestriction, ValidationError, ZoneType,
};

/// a named polygonal region carrying a service policy. only constructed through
/// validation of a [`GeofenceDefinition`], so every stored geofence upholds the
/// polygon, time restriction, and price modifier invariants.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Geofence {
    pub id: GeofenceId,
    pub name: String,
    pub zone_type: ZoneType,
    pub polygon: Polygon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_restriction: Option<TimeRestriction>,
    pub price_modifier: f64,
    pub description: String,
}

impl Geofence {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.polygon.contains(point)
    }
}

impl TryFrom<GeofenceDefinition> for Geofence {
    type Error = ValidationError;

    fn try_from(definition: GeofenceDefinition) -> Result<Self, Self::Error> {
        if definition.id.as_str().trim().is_empty() {
            return Err(ValidationError::InvalidGeofenceId);
        }
        let polygon = Polygon::try_from(definition.polygon)?;
        if let Some(restriction) = &definition.time_restriction {
            restriction.validate()?;
        }
        let price_modifier = definition.price_modifier;
        if !price_modifier.is_finite() || price_modifier <= 0.0 {
            return Err(ValidationError::InvalidPriceModifier(price_modifier));
        }
        Ok(Geofence {
            id: definition.id,
            name: definition.name,
            zone_type: definition.zone_type,
            polygon,
            time_restriction: definition.time_restriction,
            price_modifier,
            description: definition.description,
        })
    }
}
