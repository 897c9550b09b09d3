use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::{
    model::{GeoPoint, ZoneType},
    resolution::{precedence_ops, time_window_ops, ResolutionError, ResolutionResult},
    store::{ZoneSet, ZoneStore},
};

/// answers whether a location is serviceable at a moment in time, under which
/// zone, and at what price modifier. resolution is read-only: it works against
/// one zone set snapshot and never waits on writers.
pub struct EligibilityResolver {
    store: Arc<ZoneStore>,
    utc_offset: FixedOffset,
}

impl EligibilityResolver {
    /// # Arguments
    ///
    /// * `store` - the live zone store shared with writers
    /// * `utc_offset` - offset of the service area's wall clock, used for time restrictions
    pub fn new(store: Arc<ZoneStore>, utc_offset: FixedOffset) -> EligibilityResolver {
        EligibilityResolver { store, utc_offset }
    }

    pub fn store(&self) -> &Arc<ZoneStore> {
        &self.store
    }

    pub fn utc_offset(&self) -> &FixedOffset {
        &self.utc_offset
    }

    pub fn resolve(
        &self,
        point: &GeoPoint,
        at: &DateTime<Utc>,
    ) -> Result<ResolutionResult, ResolutionError> {
        let snapshot = self.store.snapshot();
        self.resolve_in(&snapshot, point, at)
    }

    pub fn resolve_now(&self, point: &GeoPoint) -> Result<ResolutionResult, ResolutionError> {
        self.resolve(point, &Utc::now())
    }

    /// resolves against an explicit snapshot. for a fixed snapshot and timestamp
    /// the result is always the same.
    pub fn resolve_in(
        &self,
        snapshot: &ZoneSet,
        point: &GeoPoint,
        at: &DateTime<Utc>,
    ) -> Result<ResolutionResult, ResolutionError> {
        point.validate()?;
        let local = time_window_ops::to_local(at, &self.utc_offset);

        let mut matched = snapshot.zones_containing(point);
        precedence_ops::sort_by_precedence(&mut matched);

        // walking the matches in precedence order is the same as repeatedly picking
        // the governing zone and discarding it while its restriction is inactive
        let mut time_restricted = false;
        let mut governing = None;
        for zone in matched.iter() {
            if time_window_ops::is_active_at(zone.time_restriction.as_ref(), &local) {
                governing = Some(zone);
                break;
            }
            log::debug!(
                "zone '{}' contains {point} but its time restriction is inactive at {local}",
                zone.id
            );
            time_restricted = true;
        }

        let (governing_zone, zone_type, effective_price_modifier) = match governing {
            Some(zone) => (Some(zone.id.clone()), zone.zone_type, zone.price_modifier),
            None => (None, ZoneType::Standard, 1.0),
        };
        let result = ResolutionResult {
            matched_zones: matched.iter().map(|zone| zone.id.clone()).collect(),
            governing_zone,
            zone_type,
            time_restricted,
            effective_price_modifier,
            serviceable: zone_type.is_serviceable(),
            snapshot_version: snapshot.version(),
        };
        log::debug!(
            "resolved {point} at {local} to {} (zone {:?}, modifier {}) from {} matches",
            result.zone_type,
            result.governing_zone.as_ref().map(|id| id.as_str()),
            result.effective_price_modifier,
            result.matched_zones.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryError;
    use crate::model::{GeofenceDefinition, GeofenceId, HourRange, TimeRestriction};
    use chrono::TimeZone;

    const INNER: [[f64; 2]; 4] = [
        [-26.10, 28.05],
        [-26.10, 28.06],
        [-26.11, 28.06],
        [-26.11, 28.05],
    ];

    const OUTER: [[f64; 2]; 4] = [
        [-26.09, 28.04],
        [-26.09, 28.07],
        [-26.12, 28.07],
        [-26.12, 28.04],
    ];

    fn utc(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, hour, 0, 0)
            .single()
            .expect("test invariant failed: invalid timestamp")
    }

    fn resolver() -> EligibilityResolver {
        let offset = FixedOffset::east_opt(0).expect("test invariant failed");
        EligibilityResolver::new(Arc::new(ZoneStore::new()), offset)
    }

    fn upsert(resolver: &EligibilityResolver, def: GeofenceDefinition) {
        resolver
            .store()
            .upsert(def)
            .expect("test invariant failed: upsert should succeed");
    }

    #[test]
    fn test_no_zones_is_standard() {
        let r = resolver();
        let result = r
            .resolve(&GeoPoint::new(-26.105, 28.055), &utc(12))
            .expect("test invariant failed");
        assert!(result.serviceable);
        assert_eq!(result.zone_type, ZoneType::Standard);
        assert_eq!(result.governing_zone, None);
        assert_eq!(result.effective_price_modifier, 1.0);
        assert!(result.matched_zones.is_empty());
        assert!(!result.time_restricted);
    }

    #[test]
    fn test_no_service_zone() {
        let r = resolver();
        upsert(
            &r,
            GeofenceDefinition::new("alex", "Alexandra", ZoneType::NoService, INNER.to_vec(), 1.0),
        );
        let result = r
            .resolve(&GeoPoint::new(-26.105, 28.055), &utc(12))
            .expect("test invariant failed");
        assert!(!result.serviceable);
        assert_eq!(result.governing_zone, Some(GeofenceId::from("alex")));
        assert_eq!(result.zone_type, ZoneType::NoService);
    }

    #[test]
    fn test_no_service_nested_in_premium() {
        let r = resolver();
        upsert(
            &r,
            GeofenceDefinition::new("sandton", "Sandton", ZoneType::Premium, OUTER.to_vec(), 1.5),
        );
        upsert(
            &r,
            GeofenceDefinition::new("alex", "Alexandra", ZoneType::NoService, INNER.to_vec(), 1.0),
        );

        let inner = r
            .resolve(&GeoPoint::new(-26.105, 28.055), &utc(12))
            .expect("test invariant failed");
        assert!(!inner.serviceable);
        assert_eq!(inner.governing_zone, Some(GeofenceId::from("alex")));
        assert_eq!(
            inner.matched_zones,
            vec![GeofenceId::from("alex"), GeofenceId::from("sandton")]
        );

        let premium_only = r
            .resolve(&GeoPoint::new(-26.095, 28.045), &utc(12))
            .expect("test invariant failed");
        assert!(premium_only.serviceable);
        assert_eq!(premium_only.zone_type, ZoneType::Premium);
        assert_eq!(premium_only.effective_price_modifier, 1.5);
        assert_eq!(premium_only.matched_zones, vec![GeofenceId::from("sandton")]);
    }

    #[test]
    fn test_time_restricted_high_risk_falls_back() {
        let r = resolver();
        let restriction = TimeRestriction::daily(vec![HourRange::from_hours(18, 6)]);
        upsert(
            &r,
            GeofenceDefinition::new("night", "Night risk", ZoneType::HighRisk, INNER.to_vec(), 1.3)
                .with_time_restriction(restriction),
        );
        let point = GeoPoint::new(-26.105, 28.055);

        let morning = r.resolve(&point, &utc(10)).expect("test invariant failed");
        assert_eq!(morning.zone_type, ZoneType::Standard);
        assert_eq!(morning.governing_zone, None);
        assert!(morning.time_restricted);
        assert!(morning.serviceable);
        assert_eq!(morning.effective_price_modifier, 1.0);
        assert_eq!(morning.matched_zones, vec![GeofenceId::from("night")]);

        let evening = r.resolve(&point, &utc(20)).expect("test invariant failed");
        assert_eq!(evening.zone_type, ZoneType::HighRisk);
        assert_eq!(evening.governing_zone, Some(GeofenceId::from("night")));
        assert!(!evening.time_restricted);
        assert_eq!(evening.effective_price_modifier, 1.3);
    }

    #[test]
    fn test_time_restricted_falls_through_to_lower_precedence() {
        let r = resolver();
        let restriction = TimeRestriction::daily(vec![HourRange::from_hours(18, 6)]);
        upsert(
            &r,
            GeofenceDefinition::new("curfew", "Curfew", ZoneType::NoService, INNER.to_vec(), 1.0)
                .with_time_restriction(restriction),
        );
        upsert(
            &r,
            GeofenceDefinition::new("sandton", "Sandton", ZoneType::Premium, OUTER.to_vec(), 1.5),
        );
        let point = GeoPoint::new(-26.105, 28.055);

        let day = r.resolve(&point, &utc(12)).expect("test invariant failed");
        assert_eq!(day.governing_zone, Some(GeofenceId::from("sandton")));
        assert!(day.serviceable);
        assert!(day.time_restricted);
        assert_eq!(day.effective_price_modifier, 1.5);

        let night = r.resolve(&point, &utc(23)).expect("test invariant failed");
        assert_eq!(night.governing_zone, Some(GeofenceId::from("curfew")));
        assert!(!night.serviceable);
    }

    #[test]
    fn test_utc_offset_shifts_restriction() {
        let offset = FixedOffset::east_opt(2 * 3600).expect("test invariant failed");
        let r = EligibilityResolver::new(Arc::new(ZoneStore::new()), offset);
        let restriction = TimeRestriction::daily(vec![HourRange::from_hours(18, 6)]);
        upsert(
            &r,
            GeofenceDefinition::new("night", "Night risk", ZoneType::HighRisk, INNER.to_vec(), 1.3)
                .with_time_restriction(restriction),
        );
        // 17:00 UTC is 19:00 local
        let result = r
            .resolve(&GeoPoint::new(-26.105, 28.055), &utc(17))
            .expect("test invariant failed");
        assert_eq!(result.zone_type, ZoneType::HighRisk);
    }

    #[test]
    fn test_boundary_point_matches() {
        let r = resolver();
        upsert(
            &r,
            GeofenceDefinition::new("alex", "Alexandra", ZoneType::NoService, INNER.to_vec(), 1.0),
        );
        let result = r
            .resolve(&GeoPoint::new(-26.10, 28.055), &utc(12))
            .expect("test invariant failed");
        assert_eq!(result.governing_zone, Some(GeofenceId::from("alex")));
    }

    #[test]
    fn test_invalid_point() {
        let r = resolver();
        let result = r.resolve(&GeoPoint::new(-95.0, 28.0), &utc(12));
        assert!(matches!(
            result,
            Err(ResolutionError::InvalidCoordinate(GeometryError::InvalidCoordinate { .. }))
        ));
    }

    #[test]
    fn test_resolve_is_idempotent_for_snapshot() {
        let r = resolver();
        upsert(
            &r,
            GeofenceDefinition::new("sandton", "Sandton", ZoneType::Premium, OUTER.to_vec(), 1.5),
        );
        let snapshot = r.store().snapshot();
        let point = GeoPoint::new(-26.105, 28.055);
        let first = r.resolve_in(&snapshot, &point, &utc(9)).expect("test invariant failed");
        upsert(
            &r,
            GeofenceDefinition::new("alex", "Alexandra", ZoneType::NoService, INNER.to_vec(), 1.0),
        );
        let second = r.resolve_in(&snapshot, &point, &utc(9)).expect("test invariant failed");
        assert_eq!(first, second);
        assert!(second.serviceable);

        let live = r.resolve(&point, &utc(9)).expect("test invariant failed");
        assert!(!live.serviceable);
        assert_eq!(live.snapshot_version, snapshot.version() + 1);
    }

    #[test]
    fn test_removal_observed_by_later_queries() {
        let r = resolver();
        upsert(
            &r,
            GeofenceDefinition::new("alex", "Alexandra", ZoneType::NoService, INNER.to_vec(), 1.0),
        );
        let point = GeoPoint::new(-26.105, 28.055);
        assert!(!r.resolve(&point, &utc(9)).expect("test invariant failed").serviceable);
        r.store()
            .remove(&GeofenceId::from("alex"))
            .expect("test invariant failed: remove should succeed");
        assert!(r.resolve(&point, &utc(9)).expect("test invariant failed").serviceable);
    }

    #[test]
    fn test_concurrent_resolves_see_whole_snapshots() {
        let r = resolver();
        upsert(
            &r,
            GeofenceDefinition::new("sandton", "Sandton", ZoneType::Premium, OUTER.to_vec(), 1.5),
        );
        let point = GeoPoint::new(-26.105, 28.055);
        let at = utc(12);
        let (resolver, point, at) = (&r, &point, &at);

        std::thread::scope(|scope| {
            let readers: Vec<_> = (0..4)
                .map(move |_| {
                    scope.spawn(move || {
                        let mut observed = vec![];
                        for _ in 0..500 {
                            let result = resolver.resolve(point, at).expect("test invariant failed");
                            observed.push(result);
                        }
                        observed
                    })
                })
                .collect();
            scope.spawn(move || {
                for i in 0..50 {
                    let zone_type = if i % 2 == 0 {
                        ZoneType::NoService
                    } else {
                        ZoneType::HighRisk
                    };
                    let def = GeofenceDefinition::new("alex", "Alexandra", zone_type, INNER.to_vec(), 2.0);
                    upsert(resolver, def);
                }
            });
            for reader in readers {
                let observed = reader.join().expect("test invariant failed: reader panicked");
                for result in observed {
                    // a snapshot either predates the first write or contains a whole zone
                    match result.snapshot_version {
                        1 => {
                            assert_eq!(result.zone_type, ZoneType::Premium);
                            assert_eq!(result.matched_zones.len(), 1);
                        }
                        v => {
                            assert_eq!(result.matched_zones.len(), 2);
                            let expected = if v % 2 == 0 {
                                ZoneType::NoService
                            } else {
                                ZoneType::HighRisk
                            };
                            assert_eq!(result.zone_type, expected);
                            assert_eq!(result.effective_price_modifier, 2.0);
                        }
                    }
                }
            }
        });
    }
}
