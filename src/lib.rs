pub mod config;
pub mod db;
pub mod error;
pub mod vat;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vat::{AdDto, VatDto, VatPriceResponse, VatService};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        vat::handlers::get_vat_price_handler,
        vat::handlers::list_vats_handler,
        vat::handlers::get_vat_handler,
    ),
    components(
        schemas(AdDto, VatDto, VatPriceResponse)
    ),
    tags(
        (name = "vat", description = "VAT rates and VAT-adjusted advertisement prices")
    ),
    info(
        title = "Car Trading API",
        version = "1.0.0",
        description = "VAT pricing for car advertisements"
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub vat_service: VatService,
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(vat_service: VatService) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState { vat_service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/vat/:country_code/price", post(vat::get_vat_price_handler))
        .route("/api/vats", get(vat::list_vats_handler))
        .route("/api/vats/:country_code", get(vat::get_vat_handler))
        .layer(cors)
        .with_state(state)
}
