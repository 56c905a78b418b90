mod coffee;
pub mod validate;

use std::sync::Arc;

use axum::Router;

use crate::service::CoffeeService;

/// Shared application state.
pub type AppState = Arc<CoffeeService>;

/// Build the coffee API router.
pub fn router(state: AppState) -> Router {
    Router::new().merge(coffee::routes()).with_state(state)
}
