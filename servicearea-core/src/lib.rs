pub mod geometry;
pub mod import;
pub mod model;
pub mod resolution;
pub mod store;
