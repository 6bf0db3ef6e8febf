//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Money;

/// Floating-point percentage, such as a VAT rate.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value lies
    /// within `0` and `100` inclusive.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO && val <= Decimal::ONE_HUNDRED)
            .then_some(Self(val))
    }

    /// Applies this [`Percent`] to the provided amount.
    ///
    /// The result is not rounded: rounding is the caller's concern, since
    /// it must happen at the point the amount is recorded.
    #[must_use]
    pub fn of(self, amount: Money) -> Money {
        amount * (self.0 / Decimal::ONE_HUNDRED)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::Money;

    use super::Percent;

    #[test]
    fn applies_to_an_amount() {
        let vat = Percent::new(Decimal::from(20)).unwrap();
        assert_eq!(vat.of(Money::eur(4045)), Money::eur(809));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Percent::new(Decimal::from(-1)).is_none());
        assert!(Percent::new(Decimal::from(101)).is_none());
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
    }
}
