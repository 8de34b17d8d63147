use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A pricing rule as stored in the `prices` table
///
/// Each row describes one price (amount + currency) for a brand/product pair,
/// valid over a closed date-time interval. `priority` breaks ties when several
/// rules are active at the same instant: the higher value wins.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Price {
    pub brand_id: i32,
    pub product_id: i32,
    /// Inclusive start of the validity window
    pub start_date: NaiveDateTime,
    /// Inclusive end of the validity window
    pub end_date: NaiveDateTime,
    /// Tariff that produced this rule, echoed back to the caller
    pub price_list: i32,
    pub priority: i32,
    pub amount: Decimal,
    pub currency: String,
}

/// Strongly typed, validated query: which price applies to this brand/product
/// at this instant
///
/// Built by the HTTP layer from raw query-string parameters; the resolver and
/// service may assume it is well-formed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct PriceQuery {
    #[validate(range(min = 1, message = "brand_id must be a positive integer"))]
    pub brand_id: i32,
    #[validate(range(min = 1, message = "product_id must be a positive integer"))]
    pub product_id: i32,
    pub application_date: NaiveDateTime,
}

/// The winning rule, projected for the caller
///
/// `priority` is internal to resolution and deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceResponse {
    #[schema(example = 1)]
    pub brand_id: i32,
    #[schema(example = 35455)]
    pub product_id: i32,
    #[schema(example = 2)]
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[schema(value_type = String, example = "25.45")]
    pub amount: Decimal,
    #[schema(example = "EUR")]
    pub currency: String,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            brand_id: price.brand_id,
            product_id: price.product_id,
            price_list: price.price_list,
            start_date: price.start_date,
            end_date: price.end_date,
            amount: price.amount,
            currency: price.currency,
        }
    }
}
