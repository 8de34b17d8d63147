use async_trait::async_trait;
use sqlx::PgPool;

use crate::prices::models::Price;

/// Read-only source of candidate pricing rules
///
/// One method, injected into the service at construction. Implementations
/// return every rule for the brand/product pair, un-filtered by date, in a
/// stable order: the resolver breaks exact priority ties by keeping the first
/// candidate, so repeatable candidate order is what makes identical requests
/// return identical winners. A failed fetch must surface as an error, never
/// as an empty list.
#[async_trait]
pub trait PriceStore: Send + Sync {
    async fn fetch_candidates(
        &self,
        brand_id: i32,
        product_id: i32,
    ) -> Result<Vec<Price>, sqlx::Error>;
}

/// Postgres-backed store over the `prices` table
#[derive(Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    /// Create a new PgPriceStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn fetch_candidates(
        &self,
        brand_id: i32,
        product_id: i32,
    ) -> Result<Vec<Price>, sqlx::Error> {
        let prices = sqlx::query_as::<_, Price>(
            r#"
            SELECT brand_id, product_id, start_date, end_date,
                   price_list, priority, amount, currency
            FROM prices
            WHERE brand_id = $1 AND product_id = $2
            ORDER BY id
            "#,
        )
        .bind(brand_id)
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(prices)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Store doubles shared by the service and handler tests

    use super::*;

    /// Store backed by a literal rule list; filters by brand/product the way
    /// the SQL query does and preserves insertion order, mirroring the
    /// `ORDER BY id` of the real store
    pub struct InMemoryPriceStore {
        rules: Vec<Price>,
    }

    impl InMemoryPriceStore {
        pub fn with_rules(rules: Vec<Price>) -> Self {
            Self { rules }
        }
    }

    #[async_trait]
    impl PriceStore for InMemoryPriceStore {
        async fn fetch_candidates(
            &self,
            brand_id: i32,
            product_id: i32,
        ) -> Result<Vec<Price>, sqlx::Error> {
            Ok(self
                .rules
                .iter()
                .filter(|price| price.brand_id == brand_id && price.product_id == product_id)
                .cloned()
                .collect())
        }
    }

    /// Store whose fetch always fails, standing in for a lost connection
    pub struct FailingPriceStore;

    #[async_trait]
    impl PriceStore for FailingPriceStore {
        async fn fetch_candidates(
            &self,
            _brand_id: i32,
            _product_id: i32,
        ) -> Result<Vec<Price>, sqlx::Error> {
            Err(sqlx::Error::PoolClosed)
        }
    }
}
