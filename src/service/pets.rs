//! Pet controller: turns contract calls into store calls. No rules of its own beyond that translation.

use crate::api::PetsApi;
use crate::error::AppError;
use crate::models::{NewPet, Pet, PetFilter, PetPatch};
use crate::store::PetStore;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct PetController {
    store: Arc<dyn PetStore>,
}

impl PetController {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        PetController { store }
    }
}

#[async_trait]
impl PetsApi for PetController {
    async fn add_pet(&self, pet: NewPet) -> Result<Pet, AppError> {
        let created = self.store.create(&pet).await?;
        tracing::info!(id = created.id, "pet created");
        Ok(created)
    }

    async fn find_pets(&self, filter: PetFilter) -> Result<Vec<Pet>, AppError> {
        Ok(self.store.list(&filter).await?)
    }

    async fn find_pet_by_id(&self, id: i64) -> Result<Pet, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    async fn update_pet(&self, id: i64, pet: NewPet) -> Result<Pet, AppError> {
        Ok(self.store.update(id, &pet).await?)
    }

    async fn patch_pet(&self, id: i64, patch: PetPatch) -> Result<Pet, AppError> {
        Ok(self.store.patch(id, &patch).await?)
    }

    async fn delete_pet(&self, id: i64) -> Result<(), AppError> {
        self.store.delete(id).await?;
        tracing::info!(id, "pet deleted");
        Ok(())
    }
}
