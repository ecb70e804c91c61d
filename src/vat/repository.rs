use async_trait::async_trait;
use sqlx::PgPool;

use crate::vat::{CountryCode, Vat, VatError};

/// Read access to VAT rates
///
/// The service only depends on this trait so that a database adapter or an
/// in-memory double can be injected.
#[async_trait]
pub trait VatRepository: Send + Sync {
    /// Find the VAT record for a country, `None` if the country has no rate
    async fn get_vat_by_country_code(
        &self,
        country_code: CountryCode,
    ) -> Result<Option<Vat>, VatError>;

    /// All VAT records ordered by country code
    async fn list_vats(&self) -> Result<Vec<Vat>, VatError>;
}

/// PostgreSQL-backed VAT repository
#[derive(Clone)]
pub struct PgVatRepository {
    pool: PgPool,
}

impl PgVatRepository {
    /// Create a new PgVatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VatRepository for PgVatRepository {
    async fn get_vat_by_country_code(
        &self,
        country_code: CountryCode,
    ) -> Result<Option<Vat>, VatError> {
        let vat = sqlx::query_as::<_, Vat>(
            r#"
            SELECT id, country_code, rate, rate_multiplier
            FROM vats
            WHERE country_code = $1
            "#,
        )
        .bind(country_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vat)
    }

    async fn list_vats(&self) -> Result<Vec<Vat>, VatError> {
        let vats = sqlx::query_as::<_, Vat>(
            r#"
            SELECT id, country_code, rate, rate_multiplier
            FROM vats
            ORDER BY country_code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vats)
    }
}
