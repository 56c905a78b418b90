//! Route registration — collects module routes + system endpoints.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tracing::info;

/// Build the complete router with all routes.
///
/// Module routes already carry their own state and are merged at the
/// root, so the coffee paths stay exactly `/coffees`.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    for (name, router) in module_routes {
        info!("mounting {} routes", name);
        app = app.merge(router);
    }

    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "coffeestockd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
