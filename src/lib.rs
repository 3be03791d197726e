//! Pet store service: CRUD over a single `pets` table, with the API contract and its docs served alongside.

pub mod api;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use api::{ApiDoc, PetsApi};
pub use config::Config;
pub use error::{AppError, ConfigError, ServerError, StoreError};
pub use migration::apply_migrations;
pub use routes::app_router;
pub use server::{Application, Phase};
pub use service::PetController;
pub use state::AppState;
pub use store::{PetStore, PgPetStore};
