use geo::{Area, Coord, LineString};

use crate::{
    geometry::{BoundingBox, GeometryError},
    model::{GeoPoint, Polygon},
};

/// polygons with less area than this (in square degrees) are treated as collinear.
pub const AREA_TOLERANCE: f64 = 1e-12;

/// maximum perpendicular distance (in degrees) at which a point counts as lying on an edge.
pub const ON_EDGE_TOLERANCE: f64 = 1e-9;

/// drops a repeated closing vertex and collapses consecutive duplicate vertices,
/// producing an open ring.
pub fn normalize_ring(vertices: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut ring: Vec<GeoPoint> = Vec::with_capacity(vertices.len());
    for vertex in vertices.iter() {
        if ring.last() != Some(vertex) {
            ring.push(*vertex);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        let _ = ring.pop();
    }
    ring
}

/// confirms a vertex sequence describes a usable polygon.
///
/// # Arguments
///
/// * `vertices` - polygon ring, open or closed
///
/// # Returns
///
/// * `InvalidCoordinate` if any vertex is out of range, otherwise `DegeneratePolygon`
///   if the normalized ring has fewer than 3 distinct vertices or no area
pub fn validate_polygon(vertices: &[GeoPoint]) -> Result<(), GeometryError> {
    for vertex in vertices.iter() {
        vertex.validate()?;
    }
    let ring = normalize_ring(vertices);
    let distinct = count_distinct(&ring);
    if distinct < 3 {
        return Err(GeometryError::DegeneratePolygon(format!(
            "polygon requires at least 3 distinct vertices, found {distinct}"
        )));
    }
    let area = ring_area(&ring);
    if area <= AREA_TOLERANCE {
        return Err(GeometryError::DegeneratePolygon(format!(
            "polygon has zero area ({area}), vertices may be collinear"
        )));
    }
    Ok(())
}

/// even-odd ray casting along +longitude. points on an edge are inside.
///
/// an edge only counts as a crossing when exactly one of its endpoints lies
/// strictly above the point's latitude, so a ray passing through a shared
/// vertex is counted once regardless of traversal direction.
pub fn contains_point(polygon: &Polygon, point: &GeoPoint) -> bool {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        if on_segment(a, b, point) {
            return true;
        }
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let crossing_lng = a.lng + (point.lat - a.lat) * (b.lng - a.lng) / (b.lat - a.lat);
            if point.lng < crossing_lng {
                inside = !inside;
            }
        }
    }
    inside
}

/// bounds of a validated polygon.
pub fn bounding_box(polygon: &Polygon) -> BoundingBox {
    *polygon.bbox()
}

/// bounds of a raw vertex sequence. None when the sequence is empty.
pub fn ring_bounding_box(vertices: &[GeoPoint]) -> Option<BoundingBox> {
    let first = vertices.first()?;
    let init = BoundingBox::new(first.lat, first.lng, first.lat, first.lng);
    let bbox = vertices.iter().skip(1).fold(init, |acc, v| {
        BoundingBox::new(
            acc.min_lat.min(v.lat),
            acc.min_lng.min(v.lng),
            acc.max_lat.max(v.lat),
            acc.max_lng.max(v.lng),
        )
    });
    Some(bbox)
}

/// planar (unsigned) area of a ring in square degrees.
pub fn ring_area(vertices: &[GeoPoint]) -> f64 {
    let exterior: LineString<f64> = vertices.iter().map(|v| Coord::from(*v)).collect();
    geo::Polygon::new(exterior, vec![]).unsigned_area()
}

fn count_distinct(vertices: &[GeoPoint]) -> usize {
    let mut sorted = vertices.to_vec();
    sorted.sort_by(|a, b| a.lat.total_cmp(&b.lat).then(a.lng.total_cmp(&b.lng)));
    sorted.dedup();
    sorted.len()
}

fn on_segment(a: &GeoPoint, b: &GeoPoint, p: &GeoPoint) -> bool {
    let d_lng = b.lng - a.lng;
    let d_lat = b.lat - a.lat;
    let cross = d_lng * (p.lat - a.lat) - d_lat * (p.lng - a.lng);
    let length = (d_lng * d_lng + d_lat * d_lat).sqrt();
    if cross.abs() > ON_EDGE_TOLERANCE * length {
        return false;
    }
    let within_lat =
        a.lat.min(b.lat) - ON_EDGE_TOLERANCE <= p.lat && p.lat <= a.lat.max(b.lat) + ON_EDGE_TOLERANCE;
    let within_lng =
        a.lng.min(b.lng) - ON_EDGE_TOLERANCE <= p.lng && p.lng <= a.lng.max(b.lng) + ON_EDGE_TOLERANCE;
    within_lat && within_lng
}
