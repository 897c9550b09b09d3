use std::{collections::BTreeMap, sync::Arc};

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::{
    model::{Geofence, GeofenceDefinition, GeofenceId},
    store::{StoreError, ZoneSet},
};

/// holds the live zone set. readers take an atomic snapshot without locking,
/// writers are serialized on `write_lock` and publish a brand-new [`ZoneSet`]
/// rather than mutating the one readers may hold.
///
/// once a write returns, any snapshot taken afterwards observes it. a snapshot
/// taken before the write remains a complete, consistent view of the prior state.
pub struct ZoneStore {
    current: ArcSwap<ZoneSet>,
    write_lock: Mutex<()>,
}

impl ZoneStore {
    pub fn new() -> ZoneStore {
        ZoneStore {
            current: ArcSwap::from_pointee(ZoneSet::empty()),
            write_lock: Mutex::new(()),
        }
    }

    /// the current zone set. O(1), never blocks on writers.
    pub fn snapshot(&self) -> Arc<ZoneSet> {
        self.current.load_full()
    }

    pub fn get(&self, id: &GeofenceId) -> Option<Arc<Geofence>> {
        self.current.load().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// validates the definition and inserts it, replacing any geofence with the same id.
    /// on failure the store is unchanged.
    pub fn upsert(&self, definition: GeofenceDefinition) -> Result<Arc<Geofence>, StoreError> {
        let geofence = validate(definition)?;
        let _guard = self.write_lock.lock();
        let next = self.current.load().with_upserted(geofence.clone());
        self.publish(next, "upsert", &geofence.id);
        Ok(geofence)
    }

    /// validates the definition and replaces an existing geofence with the same id.
    pub fn update(&self, definition: GeofenceDefinition) -> Result<Arc<Geofence>, StoreError> {
        let geofence = validate(definition)?;
        let _guard = self.write_lock.lock();
        let current = self.current.load();
        if !current.contains_id(&geofence.id) {
            return Err(StoreError::ZoneNotFound(geofence.id.clone()));
        }
        let next = current.with_upserted(geofence.clone());
        self.publish(next, "update", &geofence.id);
        Ok(geofence)
    }

    pub fn remove(&self, id: &GeofenceId) -> Result<Arc<Geofence>, StoreError> {
        let _guard = self.write_lock.lock();
        let (next, removed) = self
            .current
            .load()
            .without(id)
            .ok_or_else(|| StoreError::ZoneNotFound(id.clone()))?;
        self.publish(next, "remove", id);
        Ok(removed)
    }

    /// replaces the entire zone set with the provided definitions. every definition
    /// must be valid and ids must be unique, otherwise nothing is published.
    pub fn replace_all(
        &self,
        definitions: Vec<GeofenceDefinition>,
    ) -> Result<Arc<ZoneSet>, StoreError> {
        let mut zones: BTreeMap<GeofenceId, Arc<Geofence>> = BTreeMap::new();
        for definition in definitions.into_iter() {
            let geofence = validate(definition)?;
            if let Some(prev) = zones.insert(geofence.id.clone(), geofence) {
                return Err(StoreError::DuplicateId(prev.id.clone()));
            }
        }
        let _guard = self.write_lock.lock();
        let next = Arc::new(self.current.load().replaced_with(zones));
        log::info!(
            "published zone set version {} with {} geofences after bulk replace",
            next.version(),
            next.len()
        );
        self.current.store(next.clone());
        Ok(next)
    }

    fn publish(&self, next: ZoneSet, op: &str, id: &GeofenceId) {
        log::info!(
            "published zone set version {} with {} geofences after {op} of '{id}'",
            next.version(),
            next.len()
        );
        self.current.store(Arc::new(next));
    }
}

impl Default for ZoneStore {
    fn default() -> Self {
        ZoneStore::new()
    }
}

fn validate(definition: GeofenceDefinition) -> Result<Arc<Geofence>, StoreError> {
    let id = definition.id.clone();
    let geofence = Geofence::try_from(definition).map_err(|source| {
        log::warn!("rejected geofence '{id}': {source}");
        StoreError::InvalidGeofence { id, source }
    })?;
    Ok(Arc::new(geofence))
}
