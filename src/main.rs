use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use food_scout::config::{LoggingSettings, Settings};
use food_scout::core::FoodSearcher;
use food_scout::routes::{self, AppState};
use food_scout::services::AiClient;
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// LOG_LEVEL / LOG_FORMAT take precedence over the logging config section
fn init_tracing(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load();
    let logging = loaded
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();

    init_tracing(&logging);

    info!("Starting Food Scout service...");

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    if settings.ai.api_token.is_empty() {
        warn!("No inference API token configured; requests to {} will likely be rejected", settings.ai.endpoint);
    }

    let generation = settings.ai.generation();

    let client = AiClient::new(
        settings.ai.endpoint.clone(),
        settings.ai.model.clone(),
        settings.ai.api_token.clone(),
        settings.ai.timeout_secs,
    )
    .map_err(|e| {
        error!("Failed to create inference client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "Inference client initialized (model: {}, timeout: {}s)",
        settings.ai.model, settings.ai.timeout_secs
    );

    let app_state = AppState {
        searcher: Arc::new(FoodSearcher::new(client, generation)),
    };

    info!("Searcher initialized with settings: {:?}", generation);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes::<AiClient>)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
