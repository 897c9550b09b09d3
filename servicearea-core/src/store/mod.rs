mod error;
mod zone_set;
mod zone_store;

pub use error::StoreError;
pub use zone_set::ZoneSet;
pub use zone_store::ZoneStore;
