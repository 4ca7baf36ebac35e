use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service::flight::domain::Flight;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

/// Body for a get/update whose target does not exist.
fn absent(state: &ServerState) -> Response {
    if state.strict_not_found {
        StatusCode::NOT_FOUND.into_response()
    } else {
        (StatusCode::OK, Json(Option::<Flight>::None)).into_response()
    }
}

#[utoipa::path(
    get, path = "/flights", tag = "flights",
    responses(
        (status = 200, description = "All flights", body = [crate::openapi::FlightDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Flight>>, JsonApiError> {
    let all = state.flights.find_all().await.map_err(|e| JsonApiError::internal("List Failed", e))?;
    info!(count = all.len(), "list flights");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/flights/{id}", tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight, or null when absent unless strict_not_found", body = crate::openapi::FlightDoc),
        (status = 404, description = "Not Found (strict_not_found only)"),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Response, JsonApiError> {
    match state.flights.find_by_id(id).await {
        Ok(Some(f)) => Ok(Json(f).into_response()),
        Ok(None) => Ok(absent(&state)),
        Err(e) => Err(JsonApiError::internal("Lookup Failed", e)),
    }
}

#[utoipa::path(
    post, path = "/flights", tag = "flights",
    request_body = crate::openapi::FlightDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::FlightDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<Flight>) -> Result<(StatusCode, Json<Flight>), JsonApiError> {
    let saved = state.flights.add_flight(input).await.map_err(|e| JsonApiError::internal("Create Failed", e))?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/flights/{id}", tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    request_body = crate::openapi::FlightDoc,
    responses(
        (status = 200, description = "Updated flight, or null when absent unless strict_not_found", body = crate::openapi::FlightDoc),
        (status = 404, description = "Not Found (strict_not_found only)"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Json(input): Json<Flight>) -> Result<Response, JsonApiError> {
    match state.flights.update(id, input).await {
        Ok(Some(f)) => Ok(Json(f).into_response()),
        Ok(None) => Ok(absent(&state)),
        Err(e) => Err(JsonApiError::internal("Update Failed", e)),
    }
}

#[utoipa::path(
    delete, path = "/flights/{id}", tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    match state.flights.delete_by_id(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Ok(StatusCode::NOT_FOUND),
        Err(e) => Err(JsonApiError::internal("Delete Failed", e)),
    }
}
