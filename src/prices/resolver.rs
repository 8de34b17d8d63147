//! Pure price-resolution core
//!
//! Given a query and the candidate rules for its brand/product pair, retain
//! the rules whose inclusive validity window contains the application date and
//! pick the one with the highest priority. No I/O, no state: callers fetch the
//! candidates, this module only decides.

use crate::prices::models::{Price, PriceQuery};

/// Select the single applicable pricing rule, if any
///
/// A rule applies when `start_date <= application_date <= end_date`, inclusive
/// at both bounds. Among applicable rules the highest `priority` wins; on an
/// exact priority tie the first candidate in input order is kept, which makes
/// repeated calls with identical input return the identical rule. Callers must
/// not rely on any secondary tie-break key.
pub fn resolve(query: &PriceQuery, candidates: Vec<Price>) -> Option<Price> {
    candidates
        .into_iter()
        .filter(|price| {
            price.start_date <= query.application_date
                && query.application_date <= price.end_date
        })
        .fold(None, |best, price| match best {
            Some(current) if current.priority >= price.priority => Some(current),
            _ => Some(price),
        })
}
