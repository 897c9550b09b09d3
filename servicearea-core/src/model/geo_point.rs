use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;

/// a WGS84 coordinate in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    /// builds a point, rejecting values outside of the valid lat/lng range.
    pub fn try_new(lat: f64, lng: f64) -> Result<GeoPoint, GeometryError> {
        let point = GeoPoint { lat, lng };
        point.validate()?;
        Ok(point)
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeometryError::InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

/// coordinates are exchanged as [lat, lng] pairs.
impl From<[f64; 2]> for GeoPoint {
    fn from(value: [f64; 2]) -> Self {
        GeoPoint::new(value[0], value[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(value: GeoPoint) -> Self {
        [value.lat, value.lng]
    }
}

/// geo-types uses x=lng, y=lat.
impl From<GeoPoint> for geo::Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        geo::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_limits_are_valid() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::try_new(-26.105, 28.055).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert!(GeoPoint::try_new(90.0001, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::INFINITY, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_pair_order_is_lat_lng() {
        let point = GeoPoint::from([-26.1, 28.05]);
        assert_eq!(point.lat, -26.1);
        assert_eq!(point.lng, 28.05);
        let coord = geo::Coord::from(point);
        assert_eq!(coord.x, 28.05);
        assert_eq!(coord.y, -26.1);
    }
}
