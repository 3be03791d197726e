//! API contract: the operations the HTTP surface exposes and the OpenAPI document describing them.

use crate::error::{AppError, ErrorBody, ErrorDetail};
use crate::models::{NewPet, Pet, PetFilter, PetPatch, PetStatus};
use async_trait::async_trait;
use utoipa::OpenApi;

/// Operations behind `/pets`. Requests are already validated when they get here.
#[async_trait]
pub trait PetsApi: Send + Sync {
    async fn add_pet(&self, pet: NewPet) -> Result<Pet, AppError>;

    async fn find_pets(&self, filter: PetFilter) -> Result<Vec<Pet>, AppError>;

    async fn find_pet_by_id(&self, id: i64) -> Result<Pet, AppError>;

    /// Full replacement (PUT).
    async fn update_pet(&self, id: i64, pet: NewPet) -> Result<Pet, AppError>;

    /// Partial update (PATCH).
    async fn patch_pet(&self, id: i64, patch: PetPatch) -> Result<Pet, AppError>;

    async fn delete_pet(&self, id: i64) -> Result<(), AppError>;
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Store",
        description = "Create, read, update and delete pets.",
        license(name = "Apache 2.0", url = "https://www.apache.org/licenses/LICENSE-2.0.html")
    ),
    paths(
        crate::handlers::pets::add_pet,
        crate::handlers::pets::find_pets,
        crate::handlers::pets::find_pet_by_id,
        crate::handlers::pets::update_pet,
        crate::handlers::pets::patch_pet,
        crate::handlers::pets::delete_pet,
    ),
    components(schemas(Pet, NewPet, PetPatch, PetStatus, ErrorBody, ErrorDetail)),
    tags((name = "pets", description = "Pet resource"))
)]
pub struct ApiDoc;
