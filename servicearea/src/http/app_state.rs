use servicearea_core::{resolution::EligibilityResolver, store::ZoneStore};

/// shared state handed to every request handler.
pub struct AppState {
    pub resolver: EligibilityResolver,
}

impl AppState {
    pub fn new(resolver: EligibilityResolver) -> AppState {
        AppState { resolver }
    }

    pub fn store(&self) -> &ZoneStore {
        self.resolver.store()
    }
}
