use std::time::Duration;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use health_tracker_data::repository::HealthRecordRepository;

use crate::api::handlers::records::{self, RecordsState};
use crate::api::handlers::{classification, health};
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router over fresh in-memory storage
pub fn create_app(config: &AppConfig) -> Router {
    let repository = HealthRecordRepository::new();

    // Both services share the same storage
    let records_state = RecordsState::new(records::create_service(repository.clone()), config.default_offset);
    let health_service = health::create_health_service(repository);

    build_router(records_state, health_service)
}

/// Assemble routes, documentation and middleware around the given services
pub fn build_router(records_state: RecordsState, health_service: health::HealthService) -> Router {
    debug!("Creating application router");

    let api_routes: Router<RecordsState> = Router::new()
        .route("/classify/blood-pressure", post(classification::classify_blood_pressure))
        .route("/classify/body-physique", post(classification::classify_body_physique))
        .route("/records", get(records::list_records).post(records::create_record))
        .route(
            "/records/:id",
            get(records::get_record)
                .put(records::update_record)
                .delete(records::delete_record),
        )
        .route("/owners/:owner_id/latest/blood-pressure", get(records::latest_blood_pressure))
        .route("/owners/:owner_id/latest/body-physique", get(records::latest_body_physique))
        .route("/owners/:owner_id/latest/height", get(records::latest_height));

    debug!("API routes configured");

    let public_routes: Router<RecordsState> = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(records_state);

    let app = add_swagger_ui(app);
    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    configure_http_layers(app)
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}

/// Request tracing, CORS and security headers
pub fn configure_http_layers(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    app.layer(security_headers)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
