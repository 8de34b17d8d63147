use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::error::ApiError;
use crate::prices::models::PriceQuery;

/// Raw query-string parameters for GET /api/prices
///
/// All three parameters are required, but they are accepted as optional
/// strings so that missing or malformed values can be turned into a 400 with
/// a message naming the offending parameter instead of axum's generic
/// rejection.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceParams {
    /// Brand identifier, positive integer
    pub brand_id: Option<String>,
    /// Product identifier, positive integer
    pub product_id: Option<String>,
    /// Instant to price at, ISO-8601 local date-time (yyyy-MM-ddTHH:mm[:ss])
    pub application_date: Option<String>,
}

impl PriceParams {
    /// Parse and validate the raw parameters into a typed query
    pub fn into_query(self) -> Result<PriceQuery, ApiError> {
        let brand_id = parse_id("brand_id", self.brand_id.as_deref())?;
        let product_id = parse_id("product_id", self.product_id.as_deref())?;
        let application_date =
            parse_application_date(self.application_date.as_deref())?;

        let query = PriceQuery {
            brand_id,
            product_id,
            application_date,
        };
        query.validate()?;

        Ok(query)
    }
}

fn parse_id(name: &str, raw: Option<&str>) -> Result<i32, ApiError> {
    let raw = required(name, raw)?;
    raw.parse::<i32>().map_err(|_| ApiError::InvalidParameter {
        message: format!("{} must be a valid integer", name),
    })
}

fn parse_application_date(raw: Option<&str>) -> Result<NaiveDateTime, ApiError> {
    let raw = required("application_date", raw)?;

    // Seconds are optional, matching what clients actually send
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ApiError::InvalidParameter {
            message: "application_date must be in ISO format (yyyy-MM-ddTHH:mm:ss)"
                .to_string(),
        })
}

fn required<'a>(name: &str, raw: Option<&'a str>) -> Result<&'a str, ApiError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::InvalidParameter {
            message: format!("{} is required", name),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn params(
        brand_id: Option<&str>,
        product_id: Option<&str>,
        application_date: Option<&str>,
    ) -> PriceParams {
        PriceParams {
            brand_id: brand_id.map(str::to_string),
            product_id: product_id.map(str::to_string),
            application_date: application_date.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_parameters_produce_a_typed_query() {
        let query = params(Some("1"), Some("35455"), Some("2020-06-14T10:00:00"))
            .into_query()
            .expect("expected valid parameters to parse");

        assert_eq!(query.brand_id, 1);
        assert_eq!(query.product_id, 35455);
        assert_eq!(
            query.application_date,
            NaiveDate::from_ymd_opt(2020, 6, 14)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_seconds_component_is_optional() {
        let query = params(Some("1"), Some("35455"), Some("2020-06-14T10:00"))
            .into_query()
            .expect("expected minute-precision date to parse");

        assert_eq!(
            query.application_date,
            NaiveDate::from_ymd_opt(2020, 6, 14)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let query = params(Some(" 1 "), Some(" 35455"), Some("2020-06-14T10:00:00 "))
            .into_query()
            .expect("expected trimmed parameters to parse");

        assert_eq!(query.brand_id, 1);
        assert_eq!(query.product_id, 35455);
    }

    #[test]
    fn test_missing_parameters_are_rejected() {
        for (brand, product, date, expected) in [
            (None, Some("35455"), Some("2020-06-14T10:00:00"), "brand_id is required"),
            (Some("1"), None, Some("2020-06-14T10:00:00"), "product_id is required"),
            (Some("1"), Some("35455"), None, "application_date is required"),
            (Some("  "), Some("35455"), Some("2020-06-14T10:00:00"), "brand_id is required"),
        ] {
            let err = params(brand, product, date)
                .into_query()
                .expect_err("expected missing parameter to be rejected");
            match err {
                ApiError::InvalidParameter { message } => assert_eq!(message, expected),
                other => panic!("expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_integer_identifiers_are_rejected() {
        let err = params(Some("one"), Some("35455"), Some("2020-06-14T10:00:00"))
            .into_query()
            .expect_err("expected non-integer brand_id to be rejected");

        match err {
            ApiError::InvalidParameter { message } => {
                assert_eq!(message, "brand_id must be a valid integer")
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_identifiers_are_rejected() {
        let err = params(Some("0"), Some("35455"), Some("2020-06-14T10:00:00"))
            .into_query()
            .expect_err("expected zero brand_id to be rejected");

        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        for bad in ["2020-06-14", "14/06/2020 10:00", "not-a-date", "2020-06-14T25:00:00"] {
            let err = params(Some("1"), Some("35455"), Some(bad))
                .into_query()
                .expect_err("expected malformed date to be rejected");
            match err {
                ApiError::InvalidParameter { message } => assert_eq!(
                    message,
                    "application_date must be in ISO format (yyyy-MM-ddTHH:mm:ss)"
                ),
                other => panic!("expected InvalidParameter, got {:?}", other),
            }
        }
    }
}
