use serde::{Deserialize, Serialize};

use crate::{
    geometry::{geometry_ops, BoundingBox, GeometryError},
    model::GeoPoint,
};

/// a validated, implicitly closed polygon ring. construction normalizes the
/// ring (no repeated closing vertex, no consecutive duplicates) and caches
/// the bounding box and planar area used by the resolver.
///
/// serializes as an open ring of [lat, lng] pairs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
    bbox: BoundingBox,
    area: f64,
}

impl Polygon {
    pub fn try_new(vertices: Vec<GeoPoint>) -> Result<Polygon, GeometryError> {
        geometry_ops::validate_polygon(&vertices)?;
        let vertices = geometry_ops::normalize_ring(&vertices);
        let bbox = geometry_ops::ring_bounding_box(&vertices).ok_or_else(|| {
            GeometryError::DegeneratePolygon(String::from("polygon has no vertices"))
        })?;
        let area = geometry_ops::ring_area(&vertices);
        Ok(Polygon {
            vertices,
            bbox,
            area,
        })
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// planar area in square degrees, only meaningful for comparing polygons.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// bounding box pre-filter followed by the full containment test. the box is
    /// padded by the on-edge tolerance so it never rejects a point the edge test accepts.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.bbox
            .expanded(geometry_ops::ON_EDGE_TOLERANCE)
            .contains(point)
            && geometry_ops::contains_point(self, point)
    }
}

impl TryFrom<Vec<[f64; 2]>> for Polygon {
    type Error = GeometryError;

    fn try_from(value: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Polygon::try_new(value.into_iter().map(GeoPoint::from).collect())
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(value: Polygon) -> Self {
        value.vertices.into_iter().map(<[f64; 2]>::from).collect()
    }
}
