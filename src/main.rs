mod db;
mod error;
mod prices;

use std::sync::Arc;

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use prices::{PgPriceStore, PriceResponse, PriceService};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        prices::handlers::get_price,
    ),
    components(
        schemas(PriceResponse)
    ),
    tags(
        (name = "prices", description = "Price resolution endpoints")
    ),
    info(
        title = "Prices API",
        version = "1.0.0",
        description = "Resolves the applicable price for a brand/product pair at a point in time"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub prices: PriceService,
}

/// Creates and configures the application router
/// Maps the price endpoint to its handler and adds CORS middleware
fn create_router(prices: PriceService) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState { prices };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/api/prices", get(prices::handlers::get_price))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Prices API - Starting...");

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let store = PgPriceStore::new(db_pool);
    let service = PriceService::new(Arc::new(store));
    let app = create_router(service);

    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Prices API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
