use actix_web::{web, App, HttpServer};
use simpledms::config::{Config, DatabaseConfig, StorageBackend};
use simpledms::middleware::{cors, RequestId};
use simpledms::modules::{self, Services};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// RUST_LOG wins over LOG_LEVEL; LOG_FORMAT=json switches to structured output
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("simpledms={},actix_web=info", log_level).into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    init_tracing(&config.app.log_level);
    config.validate()?;

    tracing::info!("Starting SimpleDMS");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Storage: {:?}", config.app.storage);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let (services, pool) = match config.app.storage {
        StorageBackend::Mysql => {
            let pool = config.database.create_pool().await?;
            tracing::info!(
                "Database pool initialized ({} connections)",
                config.database.pool_size
            );

            if config.database.run_migrations {
                DatabaseConfig::migrate(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            (Services::mysql(&pool), Some(web::Data::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            (Services::in_memory(), None)
        }
    };

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let allowed_origin = config.server.allowed_origin.clone();
    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(cors(&allowed_origin))
            .wrap(RequestId);
        if let Some(pool) = &pool {
            app = app.app_data(pool.clone());
        }
        app.configure(modules::configure(services.clone()))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
