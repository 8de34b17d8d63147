use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::error::ApiError;
use crate::prices::models::PriceResponse;
use crate::prices::params::PriceParams;
use crate::AppState;

/// Handler for GET /api/prices
/// Resolves the applicable price for a brand/product pair at a given instant
#[utoipa::path(
    get,
    path = "/api/prices",
    params(PriceParams),
    responses(
        (status = 200, description = "Applicable price found", body = PriceResponse),
        (status = 400, description = "Missing or malformed parameter", body = String, example = json!({"error_code": "VALIDATION_ERROR", "message": "brand_id is required"})),
        (status = 404, description = "No price applies at the given instant", body = String, example = json!({"error_code": "PRICE_NOT_FOUND", "message": "No price found for brand 1 and product 35455 at 2020-06-14 10:00:00"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error_code": "DATABASE_ERROR", "message": "A database error occurred"}))
    ),
    tag = "prices"
)]
pub async fn get_price(
    State(state): State<AppState>,
    Query(params): Query<PriceParams>,
) -> Result<Json<PriceResponse>, ApiError> {
    tracing::debug!("Price request with parameters: {:?}", params);

    let query = params.into_query()?;
    let price = state.prices.get_price(query).await?;

    Ok(Json(price))
}
