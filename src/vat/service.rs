use std::sync::Arc;

use crate::vat::{AdDto, CountryCode, VatDto, VatError, VatPriceCalculator, VatRepository};

/// Service layer for VAT pricing
#[derive(Clone)]
pub struct VatService {
    repository: Arc<dyn VatRepository>,
}

impl VatService {
    /// Create a new VatService
    pub fn new(repository: Arc<dyn VatRepository>) -> Self {
        Self { repository }
    }

    /// Calculate the price of an advertisement for a country
    ///
    /// This method:
    /// 1. Rejects a missing advertisement before touching the repository
    /// 2. Returns the price unchanged when the ad is not VAT-inclusive
    /// 3. Looks up the country's VAT record (exactly one repository call)
    /// 4. Returns the price multiplied by the VAT multiplier, truncated toward zero
    pub async fn get_vat_price(
        &self,
        country_code: CountryCode,
        ad: Option<&AdDto>,
    ) -> Result<i32, VatError> {
        let ad = ad.ok_or(VatError::InvalidAd)?;

        if !ad.has_vat {
            tracing::debug!("Ad has no VAT, keeping price {}", ad.ad_price);
            return Ok(ad.ad_price);
        }

        let vat = self
            .repository
            .get_vat_by_country_code(country_code)
            .await?
            .ok_or(VatError::UnknownVat(country_code))?;

        let price = VatPriceCalculator::apply_multiplier(ad.ad_price, vat.rate_multiplier)?;

        tracing::debug!(
            "Applied VAT multiplier {} for country {}: {} -> {}",
            vat.rate_multiplier,
            country_code,
            ad.ad_price,
            price
        );

        Ok(price)
    }

    /// Get the VAT rate for a country
    pub async fn get_vat(&self, country_code: CountryCode) -> Result<VatDto, VatError> {
        self.repository
            .get_vat_by_country_code(country_code)
            .await?
            .map(VatDto::from)
            .ok_or(VatError::UnknownVat(country_code))
    }

    /// List all known VAT rates
    pub async fn list_vats(&self) -> Result<Vec<VatDto>, VatError> {
        let vats = self.repository.list_vats().await?;
        Ok(vats.into_iter().map(VatDto::from).collect())
    }
}
