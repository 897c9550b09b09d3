mod error;
mod service_area_app;

pub use error::AppError;
pub use service_area_app::{build_resolver, ServiceAreaApp, ServiceAreaOperation};
