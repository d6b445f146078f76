//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts travel as decimal strings on the wire and are never held as
//! floats, so `19.99 + 0.01` is exactly `20.00`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The cheapest and most expensive variant prices of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    /// Format for display, collapsing single-price products (e.g., "$19.99"
    /// or "$19.99 - $24.99").
    #[must_use]
    pub fn display(&self) -> String {
        if self.min == self.max {
            self.min.display()
        } else {
            format!("{} - {}", self.min.display(), self.max.display())
        }
    }
}

/// ISO 4217 currency codes supported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code for this currency.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        let price = Price::new(Decimal::new(1999, 2), Currency::USD);
        assert_eq!(price.display(), "$19.99");
    }

    #[test]
    fn test_price_display_pads_to_two_places() {
        let price = Price::new(Decimal::new(5, 0), Currency::GBP);
        assert_eq!(price.display(), "\u{a3}5.00");
    }

    #[test]
    fn test_price_zero() {
        let price = Price::zero(Currency::EUR);
        assert_eq!(price.amount, Decimal::ZERO);
        assert_eq!(price.currency, Currency::EUR);
    }

    #[test]
    fn test_price_range_collapses_equal_bounds() {
        let single = PriceRange {
            min: Price::new(Decimal::new(1999, 2), Currency::USD),
            max: Price::new(Decimal::new(1999, 2), Currency::USD),
        };
        assert_eq!(single.display(), "$19.99");

        let spread = PriceRange {
            min: Price::new(Decimal::new(1999, 2), Currency::USD),
            max: Price::new(Decimal::new(2499, 2), Currency::USD),
        };
        assert_eq!(spread.display(), "$19.99 - $24.99");
    }

    #[test]
    fn test_currency_serde_uses_iso_code() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");

        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::EUR);
    }

    #[test]
    fn test_currency_from_str() {
        let parsed: Currency = "gbp".parse().unwrap();
        assert_eq!(parsed, Currency::GBP);
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
