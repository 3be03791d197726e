//! Test helpers: an in-memory store and a test server over the full router.

use crate::error::StoreError;
use crate::models::{NewPet, Pet, PetFilter, PetPatch};
use crate::service::PetController;
use crate::state::AppState;
use crate::store::PetStore;
use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Store with the same NotFound semantics as the PostgreSQL one, ids starting at 1.
#[derive(Default)]
pub struct MemoryPetStore {
    inner: Mutex<(i64, BTreeMap<i64, Pet>)>,
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn create(&self, pet: &NewPet) -> Result<Pet, StoreError> {
        if pet.name.trim().is_empty() {
            return Err(StoreError::ConstraintViolation { message: "name is required".into(), unique: false });
        }
        let mut guard = self.inner.lock().unwrap();
        guard.0 += 1;
        let stored = pet.clone().into_pet(guard.0);
        guard.1.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> Result<Pet, StoreError> {
        let guard = self.inner.lock().unwrap();
        guard.1.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, filter: &PetFilter) -> Result<Vec<Pet>, StoreError> {
        let guard = self.inner.lock().unwrap();
        Ok(guard
            .1
            .values()
            .filter(|p| filter.matches(p))
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, pet: &NewPet) -> Result<Pet, StoreError> {
        let mut guard = self.inner.lock().unwrap();
        let slot = guard.1.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = pet.clone().into_pet(id);
        Ok(slot.clone())
    }

    async fn patch(&self, id: i64, patch: &PetPatch) -> Result<Pet, StoreError> {
        let mut guard = self.inner.lock().unwrap();
        let slot = guard.1.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply(slot);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut guard = self.inner.lock().unwrap();
        guard.1.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store whose every call fails as if the database were down.
pub struct DownPetStore;

#[async_trait]
impl PetStore for DownPetStore {
    async fn create(&self, _pet: &NewPet) -> Result<Pet, StoreError> {
        Err(down())
    }

    async fn get_by_id(&self, _id: i64) -> Result<Pet, StoreError> {
        Err(down())
    }

    async fn list(&self, _filter: &PetFilter) -> Result<Vec<Pet>, StoreError> {
        Err(down())
    }

    async fn update(&self, _id: i64, _pet: &NewPet) -> Result<Pet, StoreError> {
        Err(down())
    }

    async fn patch(&self, _id: i64, _patch: &PetPatch) -> Result<Pet, StoreError> {
        Err(down())
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

fn down() -> StoreError {
    StoreError::from(sqlx::Error::PoolTimedOut)
}

pub fn state_with(store: Arc<dyn PetStore>) -> AppState {
    AppState {
        api: Arc::new(PetController::new(store.clone())),
        store,
    }
}

pub fn create_test_server(store: Arc<dyn PetStore>) -> TestServer {
    let router = crate::routes::app_router(state_with(store), 64 * 1024);
    TestServer::new(router).unwrap()
}

pub fn create_memory_test_server() -> TestServer {
    create_test_server(Arc::new(MemoryPetStore::default()))
}
