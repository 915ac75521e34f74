use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::error::RideError;
use crate::models::payload::RidePayload;
use crate::models::ride::Ride;
use crate::rides::repository::RideRepository;
use crate::rides::validation::{validate_ride, Pagination};

pub fn router(repository: RideRepository) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rides", post(create_ride).get(list_rides))
        .route("/rides/{id}", get(get_ride))
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

async fn health() -> &'static str {
    "Healthy"
}

async fn create_ride(
    State(repository): State<RideRepository>,
    Json(payload): Json<RidePayload>,
) -> Result<Json<Ride>, RideError> {
    let new_ride = validate_ride(&payload)?;
    let ride = repository.create(&new_ride).await?;
    Ok(Json(ride))
}

/// Pagination kicks in whenever the query string is non-empty; `page` and
/// `per_page` must then both be valid. A bare `/rides` lists everything.
async fn list_rides(
    State(repository): State<RideRepository>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Ride>>, RideError> {
    let pagination = if params.is_empty() {
        None
    } else {
        let window = Pagination::parse(
            params.get("page").map(String::as_str),
            params.get("per_page").map(String::as_str),
        )
        .ok_or(RideError::Query)?;
        Some(window)
    };

    let rides = repository.list(pagination).await?;
    Ok(Json(rides))
}

async fn get_ride(
    State(repository): State<RideRepository>,
    Path(id): Path<String>,
) -> Result<Json<Ride>, RideError> {
    // The id arrives as a raw path segment; one that is not an integer
    // cannot match a row, so it reports the same way as a missing row.
    let Ok(id) = id.parse::<i64>() else {
        return Err(RideError::NotFound);
    };

    let ride = repository.get_by_id(id).await?;
    Ok(Json(ride))
}
