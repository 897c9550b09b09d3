use rstar::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::model::GeoPoint;

/// axis-aligned bounds of a polygon in degrees. used as a cheap pre-filter
/// before running the full containment test.
#[derive(Clone, Debug, Serialize, Deserialize, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// these bounds grown by `margin` degrees on every side.
    pub fn expanded(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.min_lat - margin,
            self.min_lng - margin,
            self.max_lat + margin,
            self.max_lng + margin,
        )
    }

    /// boundary-inclusive test of a point against these bounds.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.min_lat <= point.lat
            && point.lat <= self.max_lat
            && self.min_lng <= point.lng
            && point.lng <= self.max_lng
    }

    /// envelope in (x=lng, y=lat) order for the spatial index.
    pub fn to_rectangle(&self) -> Rectangle<[f64; 2]> {
        Rectangle::from_corners([self.min_lng, self.min_lat], [self.max_lng, self.max_lat])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let bbox = BoundingBox::new(-26.12, 28.04, -26.09, 28.07);
        assert!(bbox.contains(&GeoPoint::new(-26.10, 28.05)));
        assert!(bbox.contains(&GeoPoint::new(-26.12, 28.04)));
        assert!(bbox.contains(&GeoPoint::new(-26.09, 28.07)));
        assert!(!bbox.contains(&GeoPoint::new(-26.08, 28.05)));
        assert!(!bbox.contains(&GeoPoint::new(-26.10, 28.08)));
    }

    #[test]
    fn test_expanded() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).expanded(0.5);
        assert_eq!(bbox, BoundingBox::new(-0.5, -0.5, 1.5, 1.5));
        assert!(bbox.contains(&GeoPoint::new(1.25, -0.25)));
    }
}
