use std::{path::Path, sync::Arc};

use chrono::{DateTime, FixedOffset, Utc};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use servicearea_core::{
    import::zone_import_ops,
    model::GeoPoint,
    resolution::{EligibilityResolver, ResolutionResult},
    store::ZoneStore,
};

use crate::{app::AppError, config::ServiceAreaConfig, http};

/// Service area eligibility engine for booking and dispatch
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ServiceAreaApp {
    #[command(subcommand)]
    pub op: ServiceAreaOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ServiceAreaOperation {
    /// run the eligibility and geofence administration HTTP API
    Serve {
        /// TOML configuration file. settings may also be provided through
        /// SERVICEAREA_* environment variables.
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// socket address to listen on, overrides the configuration file.
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// resolve a single location against a zones file and print the result as JSON
    Check {
        /// GeoJSON FeatureCollection or JSON array of geofences
        #[arg(short, long)]
        zones_file: String,

        #[arg(long, allow_hyphen_values(true))]
        lat: f64,

        #[arg(long, allow_hyphen_values(true))]
        lng: f64,

        /// RFC 3339 timestamp of the query. if not provided, use the current time.
        #[arg(short, long)]
        timestamp: Option<String>,

        /// offset of the service area's wall clock from UTC, in minutes
        #[arg(short, long, default_value_t = 0, allow_hyphen_values(true))]
        utc_offset_minutes: i32,
    },
}

impl ServiceAreaOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            ServiceAreaOperation::Serve {
                configuration_file,
                bind_address,
            } => {
                let mut config = ServiceAreaConfig::load(configuration_file.as_deref().map(Path::new))?;
                if let Some(addr) = bind_address {
                    config.bind_address = addr.clone();
                }
                let resolver = build_resolver(&config)?;
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| AppError::Runtime(e.to_string()))?;
                runtime.block_on(http::serve(resolver, &config.bind_address))
            }
            ServiceAreaOperation::Check {
                zones_file,
                lat,
                lng,
                timestamp,
                utc_offset_minutes,
            } => {
                let config = ServiceAreaConfig {
                    utc_offset_minutes: *utc_offset_minutes,
                    seed_file: Some(zones_file.clone()),
                    ..Default::default()
                };
                let resolver = build_resolver(&config)?;
                let at = match timestamp {
                    Some(t) => parse_timestamp(t)?,
                    None => Utc::now(),
                };
                let result = check(&resolver, *lat, *lng, &at)?;
                let output = serde_json::to_string_pretty(&result)
                    .map_err(|e| AppError::Serialization(e.to_string()))?;
                println!("{output}");
                Ok(())
            }
        }
    }
}

/// builds the zone store and resolver described by a configuration, loading
/// the seed file if one is configured.
pub fn build_resolver(config: &ServiceAreaConfig) -> Result<EligibilityResolver, AppError> {
    let utc_offset: FixedOffset = config.utc_offset()?;
    let store = Arc::new(ZoneStore::new());
    if let Some(seed_file) = &config.seed_file {
        let definitions = zone_import_ops::read_definitions(Path::new(seed_file))?;
        let snapshot = store.replace_all(definitions)?;
        log::info!(
            "loaded {} geofences from '{seed_file}' (zone set version {})",
            snapshot.len(),
            snapshot.version()
        );
    }
    Ok(EligibilityResolver::new(store, utc_offset))
}

fn check(
    resolver: &EligibilityResolver,
    lat: f64,
    lng: f64,
    at: &DateTime<Utc>,
) -> Result<ResolutionResult, AppError> {
    let point = GeoPoint::new(lat, lng);
    let result = resolver.resolve(&point, at)?;
    Ok(result)
}

fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            AppError::InvalidUserInput(format!("timestamp '{timestamp}' is not RFC 3339: {e}"))
        })
}
