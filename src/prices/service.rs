use std::sync::Arc;

use crate::error::ApiError;
use crate::prices::models::{PriceQuery, PriceResponse};
use crate::prices::repository::PriceStore;
use crate::prices::resolver;

/// Service for price resolution
///
/// Performs exactly one candidate fetch followed by one resolution per
/// request. Holds no state beyond the injected store, so clones are cheap and
/// concurrent requests are independent.
#[derive(Clone)]
pub struct PriceService {
    store: Arc<dyn PriceStore>,
}

impl PriceService {
    /// Create a new PriceService over the given store
    pub fn new(store: Arc<dyn PriceStore>) -> Self {
        Self { store }
    }

    /// Resolve the applicable price for the query
    ///
    /// # Outcomes
    /// - `Ok(PriceResponse)` — the highest-priority rule whose window contains
    ///   the application date
    /// - `Err(ApiError::NotFound)` — no rule applies; unknown brand, unknown
    ///   product, and no-rule-active-at-this-instant all collapse here
    /// - `Err(ApiError::DatabaseError)` — the fetch itself failed; never
    ///   masked as NotFound
    pub async fn get_price(&self, query: PriceQuery) -> Result<PriceResponse, ApiError> {
        tracing::debug!(
            "Resolving price for brand {} product {} at {}",
            query.brand_id,
            query.product_id,
            query.application_date
        );

        let candidates = self
            .store
            .fetch_candidates(query.brand_id, query.product_id)
            .await?;

        tracing::debug!("Fetched {} candidate rules", candidates.len());

        match resolver::resolve(&query, candidates) {
            Some(price) => {
                tracing::info!(
                    "Resolved price list {} for brand {} product {} at {}",
                    price.price_list,
                    query.brand_id,
                    query.product_id,
                    query.application_date
                );
                Ok(PriceResponse::from(price))
            }
            None => Err(ApiError::NotFound {
                brand_id: query.brand_id,
                product_id: query.product_id,
                application_date: query.application_date,
            }),
        }
    }
}
