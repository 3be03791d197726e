//! Shared application state for all routes. Built once at startup.

use crate::api::PetsApi;
use crate::store::PetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PetsApi>,
    /// Only used by the readiness probe; pet traffic goes through `api`.
    pub store: Arc<dyn PetStore>,
}
