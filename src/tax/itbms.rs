//! ITBMS (Panamanian value-added tax) rate table and rounding helpers

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Statutory ITBMS rate categories
///
/// Rates are expressed as decimal fractions so they can be stored directly
/// on a line item's `tax_rate` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItbmsCategory {
    /// Exempt goods and services - 0%
    Exempt,
    /// General rate - 7%
    General,
    /// Alcoholic beverages and lodging services - 10%
    SelectedServices,
    /// Tobacco and derived products - 15%
    Tobacco,
}

impl ItbmsCategory {
    /// Rate for this category as an exact decimal fraction
    pub fn rate(&self) -> BigDecimal {
        let percent = match self {
            ItbmsCategory::Exempt => 0,
            ItbmsCategory::General => 7,
            ItbmsCategory::SelectedServices => 10,
            ItbmsCategory::Tobacco => 15,
        };
        BigDecimal::from(percent) / BigDecimal::from(100)
    }

    /// Unrounded tax on a base amount at this category's rate
    pub fn tax_on(&self, base: &BigDecimal) -> BigDecimal {
        base * self.rate()
    }
}

/// Round a monetary amount to cents using half-even (banker's) rounding
///
/// Presentation only: stored totals stay exact and are never replaced by
/// their rounded form.
pub fn round_to_cents(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfEven)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_category_rates() {
        assert_eq!(ItbmsCategory::Exempt.rate(), BigDecimal::from(0));
        assert_eq!(ItbmsCategory::General.rate(), dec("0.07"));
        assert_eq!(ItbmsCategory::SelectedServices.rate(), dec("0.10"));
        assert_eq!(ItbmsCategory::Tobacco.rate(), dec("0.15"));
    }

    #[test]
    fn test_tax_on_base() {
        let base = BigDecimal::from(1000);
        assert_eq!(ItbmsCategory::General.tax_on(&base), BigDecimal::from(70));
        assert_eq!(ItbmsCategory::Exempt.tax_on(&base), BigDecimal::from(0));
    }

    #[test]
    fn test_half_even_rounding() {
        assert_eq!(round_to_cents(&dec("7.005")), dec("7.00"));
        assert_eq!(round_to_cents(&dec("7.015")), dec("7.02"));
        assert_eq!(round_to_cents(&dec("7.0051")), dec("7.01"));
        assert_eq!(round_to_cents(&dec("7.00")), dec("7.00"));
    }

    #[test]
    fn test_rounding_does_not_mutate_exact_value() {
        let exact = dec("12.345");
        let rounded = round_to_cents(&exact);
        assert_eq!(exact, dec("12.345"));
        assert_eq!(rounded, dec("12.34"));
    }
}
