mod bbox;
mod error;
pub mod geometry_ops;

pub use bbox::BoundingBox;
pub use error::GeometryError;
