use rust_decimal::Decimal;

use crate::core::region::Region;

/// Default base exchange rate (USD -> BRL) used when no settings row exists.
pub fn default_base_rate() -> Decimal {
    Decimal::new(56, 1) // 5.6
}

/// Cross-rates into the reporting currency (BRL), derived from the single
/// operator-supplied base rate.
///
/// GBP and EUR rates are fixed multiples of the base rate, approximating the
/// historical spread against USD. Downstream consumers rely on this exact
/// relationship (changing the base rescales all three proportionally), so
/// the multipliers must not be replaced with independently configured rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossRates {
    pub usd_to_brl: Decimal,
    pub gbp_to_brl: Decimal,
    pub eur_to_brl: Decimal,
}

impl CrossRates {
    /// Derive all three rates from the base USD -> BRL rate.
    pub fn from_base(base_rate: Decimal) -> Self {
        Self {
            usd_to_brl: base_rate,
            gbp_to_brl: base_rate * Decimal::new(136, 2), // approx 7.50 / 5.50
            eur_to_brl: base_rate * Decimal::new(118, 2), // approx 6.50 / 5.50
        }
    }

    /// The conversion rate for a region's native currency.
    pub fn for_region(&self, region: Region) -> Decimal {
        match region {
            Region::Usa => self.usd_to_brl,
            Region::Uk => self.gbp_to_brl,
            Region::Ale => self.eur_to_brl,
        }
    }
}
