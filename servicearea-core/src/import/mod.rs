mod error;
pub mod zone_import_ops;

pub use error::ImportError;
