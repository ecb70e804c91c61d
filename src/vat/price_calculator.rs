use rust_decimal::Decimal;

use crate::vat::VatError;

/// Calculator for VAT-adjusted prices
pub struct VatPriceCalculator;

impl VatPriceCalculator {
    /// Apply a VAT multiplier to a price
    ///
    /// # Arguments
    /// * `price` - VAT-exclusive price
    /// * `multiplier` - Factor from the country's VAT record (e.g. 1.25)
    ///
    /// # Returns
    /// `price * multiplier` truncated toward zero. Fractions are dropped, never rounded up.
    ///
    /// The product is computed on the multiplier's integer mantissa, so it is exact
    /// for every scale `Decimal` can represent.
    pub fn apply_multiplier(price: i32, multiplier: Decimal) -> Result<i32, VatError> {
        let overflow = || VatError::PriceOverflow { price, multiplier };

        // scale <= 28, so 10^scale fits in an i128
        let divisor = 10i128.pow(multiplier.scale());

        // i128 division truncates toward zero
        multiplier
            .mantissa()
            .checked_mul(i128::from(price))
            .map(|scaled| scaled / divisor)
            .and_then(|truncated| i32::try_from(truncated).ok())
            .ok_or_else(overflow)
    }
}
