// HTTP handlers for VAT endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use validator::Validate;

use crate::vat::{AdDto, CountryCode, VatDto, VatError, VatPriceResponse};
use crate::AppState;

/// Handler for POST /api/vat/{country_code}/price
/// Calculates the VAT-adjusted price of an advertisement. A `null` body is an invalid ad.
#[utoipa::path(
    post,
    path = "/api/vat/{country_code}/price",
    params(
        ("country_code" = i32, Path, description = "Country identifier")
    ),
    request_body = AdDto,
    responses(
        (status = 200, description = "Price calculated", body = VatPriceResponse),
        (status = 400, description = "Missing or invalid advertisement", body = String, example = json!({"error_code": "INVALID_ADVERTISEMENT"})),
        (status = 422, description = "VAT price out of range", body = String, example = json!({"error_code": "PRICE_OVERFLOW"})),
        (status = 404, description = "No VAT rate for the country", body = String, example = json!({"error_code": "UNKNOWN_VAT"}))
    ),
    tag = "vat"
)]
pub async fn get_vat_price_handler(
    State(state): State<AppState>,
    country_code: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Option<AdDto>>, JsonRejection>,
) -> Result<Json<VatPriceResponse>, VatError> {
    let Path(country_code) = country_code?;
    let Json(ad) = payload?;
    let country_code = CountryCode(country_code);
    tracing::debug!("Calculating VAT price for country {}", country_code);

    if let Some(ref ad) = ad {
        ad.validate()?;
    }

    let price = state
        .vat_service
        .get_vat_price(country_code, ad.as_ref())
        .await?;

    // get_vat_price already rejected a missing ad
    let (has_vat, original_price) = ad
        .map(|ad| (ad.has_vat, ad.ad_price))
        .unwrap_or_default();

    Ok(Json(VatPriceResponse {
        country_code,
        has_vat,
        original_price,
        price,
    }))
}

/// Handler for GET /api/vats
/// Lists all VAT rates
#[utoipa::path(
    get,
    path = "/api/vats",
    responses(
        (status = 200, description = "All VAT rates", body = Vec<VatDto>)
    ),
    tag = "vat"
)]
pub async fn list_vats_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VatDto>>, VatError> {
    let vats = state.vat_service.list_vats().await?;
    tracing::debug!("Retrieved {} VAT rates", vats.len());
    Ok(Json(vats))
}

/// Handler for GET /api/vats/{country_code}
#[utoipa::path(
    get,
    path = "/api/vats/{country_code}",
    params(
        ("country_code" = i32, Path, description = "Country identifier")
    ),
    responses(
        (status = 200, description = "VAT rate found", body = VatDto),
        (status = 404, description = "No VAT rate for the country", body = String, example = json!({"error_code": "UNKNOWN_VAT"}))
    ),
    tag = "vat"
)]
pub async fn get_vat_handler(
    State(state): State<AppState>,
    country_code: Result<Path<i32>, PathRejection>,
) -> Result<Json<VatDto>, VatError> {
    let Path(country_code) = country_code?;
    let vat = state.vat_service.get_vat(CountryCode(country_code)).await?;
    Ok(Json(vat))
}
