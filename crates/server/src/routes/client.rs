use crate::{
    dtos::client::{ClientCreate, ClientResponse, ClientUpdate},
    error::{ApiError, ErrorResponse},
    extract::AppJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::repository::ClientRepository;

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "Clients retrieved successfully", body = Vec<ClientResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = ClientRepository::get_all(&state.db).await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

/// Get a client by ID, 404 when unknown
#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = ClientRepository::require(&state.db, id).await?;
    Ok(Json(client.into()))
}

#[utoipa::path(
    post,
    path = "/clients",
    request_body = ClientCreate,
    responses(
        (status = 200, description = "Client created", body = ClientResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    AppJson(client): AppJson<ClientCreate>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = ClientRepository::add(&state.db, client.into()).await?;
    Ok(Json(client.into()))
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = ClientUpdate,
    responses(
        (status = 200, description = "Client updated", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(client): AppJson<ClientUpdate>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = ClientRepository::update(&state.db, id, client.into()).await?;
    Ok(Json(client.into()))
}

/// Delete a client that has no rents on record
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted", body = bool),
        (status = 404, description = "Client not found", body = ErrorResponse),
        (status = 422, description = "Client still referenced by rents", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    ClientRepository::delete(&state.db, id).await?;
    Ok(Json(true))
}
