use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use servicearea_core::{
    model::{GeoPoint, Geofence, GeofenceId},
    store::StoreError,
};

use crate::http::{
    ApiError, AppState, EligibilityRequest, EligibilityResponse, GeofenceListing,
    GeofenceRequest, HealthResponse,
};

pub async fn check_eligibility(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Result<Json<EligibilityResponse>, ApiError> {
    let Json(request) = payload?;
    let point = GeoPoint::new(request.lat, request.lng);
    let at = request.timestamp.unwrap_or_else(Utc::now);
    let result = state.resolver.resolve(&point, &at)?;
    Ok(Json(EligibilityResponse::from(result)))
}

pub async fn list_geofences(State(state): State<Arc<AppState>>) -> Json<GeofenceListing> {
    let snapshot = state.store().snapshot();
    let geofences = snapshot.iter().map(|g| Geofence::clone(g)).collect();
    Json(GeofenceListing {
        version: snapshot.version(),
        geofences,
    })
}

pub async fn get_geofence(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Geofence>, ApiError> {
    let id = GeofenceId(id);
    match state.store().get(&id) {
        Some(geofence) => Ok(Json(Geofence::clone(&geofence))),
        None => Err(ApiError::Store(StoreError::ZoneNotFound(id))),
    }
}

pub async fn put_geofence(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<GeofenceRequest>, JsonRejection>,
) -> Result<Json<Geofence>, ApiError> {
    let Json(request) = payload?;
    let definition = request.into_definition(GeofenceId(id));
    let stored = state.store().upsert(definition)?;
    Ok(Json(Geofence::clone(&stored)))
}

pub async fn delete_geofence(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store().remove(&GeofenceId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.store().snapshot();
    Json(HealthResponse {
        status: String::from("ok"),
        zones: snapshot.len(),
        version: snapshot.version(),
    })
}
