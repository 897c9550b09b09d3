mod error;
mod geo_point;
mod geofence;
mod geofence_definition;
mod geofence_id;
mod polygon;
mod time_restriction;
mod zone_type;

pub use error::ValidationError;
pub use geo_point::GeoPoint;
pub use geofence::Geofence;
pub use geofence_definition::{default_price_modifier, GeofenceDefinition};
pub use geofence_id::GeofenceId;
pub use polygon::Polygon;
pub use time_restriction::{HourRange, RestrictionMode, TimeRestriction};
pub use zone_type::ZoneType;
