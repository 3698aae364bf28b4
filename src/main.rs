use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use dormhub_recommender::config::{LoggingSettings, Settings};
use dormhub_recommender::core::Recommender;
use dormhub_recommender::error::handle_json_payload_error;
use dormhub_recommender::routes::{self, AppState};
use dormhub_recommender::services::MySqlListingStore;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting DormHub recommendation service...");

    // Initialize MySQL listing store
    let store = MySqlListingStore::from_settings(&settings.database, &settings.recommendation)
        .await
        .map_err(|e| {
            error!("Failed to connect to MySQL: {}", e);
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
        })?;

    info!("MySQL listing store initialized");

    // Synonym groups are built once and shared read-only by every worker
    let synonyms = Arc::new(settings.location.synonym_table());
    info!("Loaded {} location synonym groups", synonyms.groups().len());

    let recommender = Recommender::new(settings.recommendation.defaults(), synonyms);

    let state = web::Data::new(AppState {
        store: Arc::new(store),
        recommender,
    });

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes::<MySqlListingStore>)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
