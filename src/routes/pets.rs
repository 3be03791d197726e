//! Pet routes: the fixed table from (method, path) to handler.

use crate::handlers::pets::{add_pet, delete_pet, find_pet_by_id, find_pets, patch_pet, update_pet};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn pet_routes(state: AppState) -> Router {
    Router::new()
        .route("/pets", get(find_pets).post(add_pet))
        .route(
            "/pets/:id",
            get(find_pet_by_id).put(update_pet).patch(patch_pet).delete(delete_pet),
        )
        .with_state(state)
}
