use crate::auth::AdminGuard;
use crate::database::CatalogStore;

/// Shared application state: one store handle and the admin guard, both
/// cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub guard: AdminGuard,
}
