mod service_area_config;

pub use service_area_config::ServiceAreaConfig;
