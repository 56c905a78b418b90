use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json,
};

use coffeestock_core::ServiceError;

use crate::dto::CoffeeDto;
use super::{validate, AppState};

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/coffees", post(create_coffee).get(list_coffees))
        .route("/coffees/{name}", get(find_by_name).delete(delete_by_id))
        .route("/coffees/{id}/increment", patch(increment))
}

async fn create_coffee(
    State(svc): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<CoffeeDto>), ServiceError> {
    let dto = validate::create_body(&body)?;
    let created = svc.create(dto)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn find_by_name(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CoffeeDto>, ServiceError> {
    svc.find_by_name(&name).map(Json)
}

async fn list_coffees(
    State(svc): State<AppState>,
) -> Result<Json<Vec<CoffeeDto>>, ServiceError> {
    svc.list_all().map(Json)
}

async fn delete_by_id(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_by_id(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn increment(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<CoffeeDto>, ServiceError> {
    let amount = validate::quantity_body(&body)?;
    svc.increment(id, amount).map(Json)
}
