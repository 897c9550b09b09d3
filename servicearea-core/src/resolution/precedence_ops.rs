use std::cmp::Ordering;
use std::sync::Arc;

use crate::{geometry::geometry_ops::AREA_TOLERANCE, model::Geofence};

/// total order over geofences, where `Less` means higher precedence:
///   1. zone type: NoService > HighRisk > Premium > Standard
///   2. smaller polygon area (the more specific zone)
///   3. lexicographically smaller id
pub fn compare_precedence(a: &Geofence, b: &Geofence) -> Ordering {
    a.zone_type
        .precedence_rank()
        .cmp(&b.zone_type.precedence_rank())
        .then_with(|| compare_area(a.polygon.area(), b.polygon.area()))
        .then_with(|| a.id.cmp(&b.id))
}

/// areas within [`AREA_TOLERANCE`] of each other are equal. the same ring listed
/// from another starting vertex may differ in its last bits.
fn compare_area(a: f64, b: f64) -> Ordering {
    if (a - b).abs() <= AREA_TOLERANCE {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// picks the geofence that governs a location from the zones matching it.
/// None means no zone matched and the implicit Standard policy applies.
pub fn governing_zone(candidates: &[Arc<Geofence>]) -> Option<&Arc<Geofence>> {
    candidates
        .iter()
        .min_by(|a, b| compare_precedence(a.as_ref(), b.as_ref()))
}

/// sorts zones so the highest precedence zone is first.
pub fn sort_by_precedence(zones: &mut [Arc<Geofence>]) {
    zones.sort_by(|a, b| compare_precedence(a.as_ref(), b.as_ref()));
}
