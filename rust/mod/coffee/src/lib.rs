pub mod api;
pub mod dto;
pub mod mapper;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use coffeestock_core::Module;

use service::CoffeeService;

/// Coffee module — coffee stock inventory management.
pub struct CoffeeModule {
    service: Arc<CoffeeService>,
}

impl CoffeeModule {
    pub fn new(service: CoffeeService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for CoffeeModule {
    fn name(&self) -> &str {
        "coffee"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
