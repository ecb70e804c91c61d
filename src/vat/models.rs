use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Country identifier used to select the jurisdiction-specific VAT rate
///
/// Serialized as a plain integer and stored as `INTEGER` in the `vats` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CountryCode(pub i32);

impl From<i32> for CountryCode {
    fn from(code: i32) -> Self {
        CountryCode(code)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A VAT rate for one country as stored in the database
///
/// `rate` is a percentage (25 means 25%), `rate_multiplier` the factor applied
/// to a VAT-exclusive price (1.25). Pricing always uses the stored multiplier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, FromRow)]
pub struct Vat {
    pub id: i32,
    pub country_code: CountryCode,
    pub rate: Decimal,
    pub rate_multiplier: Decimal,
}

impl Vat {
    /// Build a Vat whose multiplier is derived as `1 + rate / 100`
    pub fn from_rate(id: i32, country_code: CountryCode, rate: Decimal) -> Self {
        Self {
            id,
            country_code,
            rate,
            rate_multiplier: Decimal::ONE + rate / Decimal::ONE_HUNDRED,
        }
    }
}

/// Price request projection of an advertisement
///
/// Used for POST /api/vat/{country_code}/price. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdDto {
    #[validate(length(min = 1, max = 200, message = "Ad title must be between 1 and 200 characters"))]
    #[schema(example = "Volvo V70 2.4 D5")]
    pub ad_title: Option<String>,
    #[serde(default)]
    #[schema(example = true)]
    pub has_vat: bool,
    #[serde(default)]
    #[validate(range(min = 0, message = "Ad price must not be negative"))]
    #[schema(example = 27500)]
    pub ad_price: i32,
}

/// API representation of a VAT rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VatDto {
    #[schema(value_type = i32, example = 0)]
    pub country_code: CountryCode,
    #[schema(value_type = String, example = "25")]
    pub rate: Decimal,
    #[schema(value_type = String, example = "1.25")]
    pub rate_multiplier: Decimal,
}

impl From<Vat> for VatDto {
    fn from(vat: Vat) -> Self {
        Self {
            country_code: vat.country_code,
            rate: vat.rate,
            rate_multiplier: vat.rate_multiplier,
        }
    }
}

/// Response body for a VAT price calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VatPriceResponse {
    #[schema(value_type = i32, example = 0)]
    pub country_code: CountryCode,
    #[schema(example = true)]
    pub has_vat: bool,
    #[schema(example = 27500)]
    pub original_price: i32,
    #[schema(example = 34375)]
    pub price: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_rate_derives_multiplier() {
        let vat = Vat::from_rate(1, CountryCode(0), dec!(25));
        assert_eq!(vat.rate_multiplier, dec!(1.25));

        let vat = Vat::from_rate(2, CountryCode(46), dec!(12.5));
        assert_eq!(vat.rate_multiplier, dec!(1.125));
    }

    #[test]
    fn test_default_vat_has_zero_multiplier() {
        let vat = Vat::default();
        assert_eq!(vat.rate_multiplier, Decimal::ZERO);
        assert_eq!(vat.country_code, CountryCode(0));
    }

    #[test]
    fn test_country_code_serializes_as_integer() {
        let json = serde_json::to_string(&CountryCode(500)).unwrap();
        assert_eq!(json, "500");

        let code: CountryCode = serde_json::from_str("46").unwrap();
        assert_eq!(code, CountryCode(46));
    }

    #[test]
    fn test_ad_dto_defaults_when_fields_missing() {
        let ad: AdDto = serde_json::from_str(r#"{"has_vat": true}"#).unwrap();
        assert!(ad.has_vat);
        assert_eq!(ad.ad_price, 0);
        assert_eq!(ad.ad_title, None);
    }

    #[test]
    fn test_ad_dto_validation() {
        let ad = AdDto {
            ad_title: Some("Test Ad".to_string()),
            has_vat: true,
            ad_price: 5,
        };
        assert!(ad.validate().is_ok());

        let negative = AdDto {
            ad_price: -1,
            ..ad.clone()
        };
        assert!(negative.validate().is_err());

        let empty_title = AdDto {
            ad_title: Some(String::new()),
            ..ad
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_vat_dto_from_vat() {
        let vat = Vat {
            id: 7,
            country_code: CountryCode(45),
            rate: dec!(25),
            rate_multiplier: dec!(1.25),
        };

        let dto = VatDto::from(vat);
        assert_eq!(dto.country_code, CountryCode(45));
        assert_eq!(dto.rate, dec!(25));
        assert_eq!(dto.rate_multiplier, dec!(1.25));
    }
}
