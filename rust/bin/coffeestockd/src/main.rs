//! `coffeestockd` — the coffee stock server binary.
//!
//! Usage:
//!   coffeestockd [--data-dir PATH] [--sqlite PATH] [--listen ADDR]
//!
//! The SQLite path defaults to `{data-dir}/data.sqlite`.

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use coffee::service::CoffeeService;
use coffee::CoffeeModule;
use coffeestock_core::{Module, ServiceConfig};

/// Coffee stock inventory server.
#[derive(Parser, Debug)]
#[command(name = "coffeestockd", about = "Coffee stock inventory server")]
struct Cli {
    /// Directory for persistent data.
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Path to the SQLite database file (overrides {data-dir}/data.sqlite).
    #[arg(long = "sqlite")]
    sqlite: Option<PathBuf>,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig {
        data_dir: cli.data_dir,
        sqlite_path: cli.sqlite,
        listen: cli.listen,
    };

    if let Some(dir) = &config.data_dir {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize the embedded store.
    let sqlite_path = config.resolve_sqlite_path();
    let sql: Arc<dyn coffeestock_sql::SQLStore> = Arc::new(
        coffeestock_sql::SqliteStore::open(&sqlite_path)
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );
    info!("SQL store opened at {}", sqlite_path.display());

    let coffee_module = CoffeeModule::new(CoffeeService::new(sql)?);
    info!("Coffee module initialized");

    let module_routes = vec![(coffee_module.name(), coffee_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("coffeestockd listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
