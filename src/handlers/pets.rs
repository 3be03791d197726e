//! Pet handlers: extract and validate, call the contract, shape the response.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiPath, ApiQuery, ValidJson};
use crate::models::{ListPetsQuery, NewPet, Pet, PetPatch};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    post,
    path = "/pets",
    tag = "pets",
    summary = "Create a pet",
    request_body = NewPet,
    responses(
        (status = 201, description = "Pet created", body = Pet),
        (status = 400, description = "Invalid body or constraint violation", body = ErrorBody),
        (status = 409, description = "Uniqueness violation", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn add_pet(
    State(state): State<AppState>,
    ValidJson(pet): ValidJson<NewPet>,
) -> Result<(StatusCode, Json<Pet>), AppError> {
    let created = state.api.add_pet(pet).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/pets",
    tag = "pets",
    summary = "List pets",
    params(ListPetsQuery),
    responses(
        (status = 200, description = "Matching pets ordered by id", body = [Pet]),
        (status = 400, description = "Invalid query", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn find_pets(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPetsQuery>,
) -> Result<Json<Vec<Pet>>, AppError> {
    let pets = state.api.find_pets(query.into()).await?;
    Ok(Json(pets))
}

#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = "pets",
    summary = "Get a pet by id",
    params(("id" = i64, Path, description = "Pet id")),
    responses(
        (status = 200, description = "The pet", body = Pet),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "No pet with this id", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn find_pet_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Pet>, AppError> {
    tracing::Span::current().record("id", id);
    let pet = state.api.find_pet_by_id(id).await?;
    Ok(Json(pet))
}

#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = "pets",
    summary = "Replace a pet",
    params(("id" = i64, Path, description = "Pet id")),
    request_body = NewPet,
    responses(
        (status = 200, description = "Updated pet", body = Pet),
        (status = 400, description = "Invalid body or constraint violation", body = ErrorBody),
        (status = 404, description = "No pet with this id", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn update_pet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(pet): ValidJson<NewPet>,
) -> Result<Json<Pet>, AppError> {
    tracing::Span::current().record("id", id);
    let updated = state.api.update_pet(id, pet).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    patch,
    path = "/pets/{id}",
    tag = "pets",
    summary = "Update some fields of a pet",
    params(("id" = i64, Path, description = "Pet id")),
    request_body = PetPatch,
    responses(
        (status = 200, description = "Updated pet", body = Pet),
        (status = 400, description = "Invalid body or constraint violation", body = ErrorBody),
        (status = 404, description = "No pet with this id", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn patch_pet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(patch): ValidJson<PetPatch>,
) -> Result<Json<Pet>, AppError> {
    tracing::Span::current().record("id", id);
    let updated = state.api.patch_pet(id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = "pets",
    summary = "Delete a pet",
    params(("id" = i64, Path, description = "Pet id")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "No pet with this id", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
#[tracing::instrument(skip_all, fields(id))]
pub async fn delete_pet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    tracing::Span::current().record("id", id);
    state.api.delete_pet(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
