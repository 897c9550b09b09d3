mod api_error;
mod app_state;
mod messages;
mod router;
mod routes;

pub use api_error::ApiError;
pub use app_state::AppState;
pub use messages::{
    EligibilityRequest, EligibilityResponse, GeofenceListing, GeofenceRequest, HealthResponse,
};
pub use router::{router, serve};
