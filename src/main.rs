use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revboard::config::Config;
use revboard::modules::dashboard::services::DashboardService;
use revboard::modules::settings::repositories::SettingsRepository;
use revboard::modules::store::{MySqlRegionStore, RegionStore};
use revboard::modules::{accounts, dashboard, records, settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revboard=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Revboard revenue dashboard");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let store: Arc<dyn RegionStore> = Arc::new(MySqlRegionStore::new(db_pool.clone()));
    let store_data: web::Data<dyn RegionStore> = web::Data::from(store.clone());
    let dashboard_service = web::Data::new(DashboardService::new(store));
    let settings_repository = web::Data::new(SettingsRepository::new(db_pool));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(store_data.clone())
            .app_data(dashboard_service.clone())
            .app_data(settings_repository.clone())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .configure(accounts::controllers::configure)
                    .configure(records::controllers::configure)
                    .configure(settings::controllers::configure)
                    .configure(dashboard::controllers::configure),
            )
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "revboard"
    }))
}
