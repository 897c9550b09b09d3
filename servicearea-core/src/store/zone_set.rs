use std::{collections::BTreeMap, sync::Arc};

use rstar::{
    primitives::{GeomWithData, Rectangle},
    RTree,
};

use crate::{
    geometry::geometry_ops::ON_EDGE_TOLERANCE,
    model::{GeoPoint, Geofence, GeofenceId},
};

type ZoneEnvelope = GeomWithData<Rectangle<[f64; 2]>, GeofenceId>;

/// an immutable view of every geofence at one moment in time. zones are keyed
/// by id and indexed by bounding box for the containment pre-filter. a zone set
/// is never modified after construction; edits produce a new zone set.
#[derive(Debug)]
pub struct ZoneSet {
    version: u64,
    zones: BTreeMap<GeofenceId, Arc<Geofence>>,
    index: RTree<ZoneEnvelope>,
}

impl ZoneSet {
    pub fn empty() -> ZoneSet {
        ZoneSet {
            version: 0,
            zones: BTreeMap::new(),
            index: RTree::new(),
        }
    }

    fn build(version: u64, zones: BTreeMap<GeofenceId, Arc<Geofence>>) -> ZoneSet {
        let envelopes = zones
            .values()
            .map(|zone| {
                let envelope = zone.polygon.bbox().expanded(ON_EDGE_TOLERANCE);
                GeomWithData::new(envelope.to_rectangle(), zone.id.clone())
            })
            .collect();
        ZoneSet {
            version,
            zones,
            index: RTree::bulk_load(envelopes),
        }
    }

    /// number of edits published before this zone set, starting from 0 for the empty set.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: &GeofenceId) -> Option<&Arc<Geofence>> {
        self.zones.get(id)
    }

    pub fn contains_id(&self, id: &GeofenceId) -> bool {
        self.zones.contains_key(id)
    }

    /// geofences in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Geofence>> {
        self.zones.values()
    }

    /// geofences whose bounding box contains the point. these are candidates only,
    /// the point may still fall outside of their polygon.
    pub fn candidates_at<'a>(
        &'a self,
        point: &GeoPoint,
    ) -> impl Iterator<Item = &'a Arc<Geofence>> + 'a {
        self.index
            .locate_all_at_point(&[point.lng, point.lat])
            .filter_map(|envelope| self.zones.get(&envelope.data))
    }

    /// geofences whose polygon contains the point (boundary inclusive), in id order.
    pub fn zones_containing(&self, point: &GeoPoint) -> Vec<Arc<Geofence>> {
        let mut matched: Vec<Arc<Geofence>> = self
            .candidates_at(point)
            .filter(|zone| zone.contains(point))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.id.cmp(&b.id));
        matched
    }

    pub(crate) fn with_upserted(&self, geofence: Arc<Geofence>) -> ZoneSet {
        let mut zones = self.zones.clone();
        let _ = zones.insert(geofence.id.clone(), geofence);
        ZoneSet::build(self.version + 1, zones)
    }

    /// a copy of this zone set without the geofence, along with the removed geofence.
    pub(crate) fn without(&self, id: &GeofenceId) -> Option<(ZoneSet, Arc<Geofence>)> {
        let mut zones = self.zones.clone();
        let removed = zones.remove(id)?;
        Some((ZoneSet::build(self.version + 1, zones), removed))
    }

    pub(crate) fn replaced_with(&self, zones: BTreeMap<GeofenceId, Arc<Geofence>>) -> ZoneSet {
        ZoneSet::build(self.version + 1, zones)
    }
}

impl Default for ZoneSet {
    fn default() -> Self {
        ZoneSet::empty()
    }
}
