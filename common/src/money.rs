//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::define_kind;

/// Amount of money in some [`Currency`].
///
/// All contract amounts are kept as exact decimals and rounded to cents
/// half-away-from-zero, matching the figures printed on the participation
/// contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize)
)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new euro-denominated [`Money`] amount.
    #[must_use]
    pub fn eur(amount: impl Into<Decimal>) -> Self {
        Self {
            amount: amount.into(),
            currency: Currency::Eur,
        }
    }

    /// Zero euros.
    #[must_use]
    pub fn zero() -> Self {
        Self::eur(Decimal::ZERO)
    }

    /// Returns this [`Money`] rounded to cents, half away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(
                    2,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
            currency: self.currency,
        }
    }

    /// Indicates whether this amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Indicates whether this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Renders this amount the way it appears in a contract field:
    /// two forced decimals and a comma separator (`1245,50`).
    #[must_use]
    pub fn to_contract_string(&self) -> String {
        format!("{:.2}", self.rounded().amount).replace('.', ",")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        write!(f, "{amount}{currency}")
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // The catalog is single-currency, so a mismatch is a logic error.
        debug_assert_eq!(self.currency, rhs.currency, "currency mismatch");
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

impl ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self {
            amount: self.amount * rhs,
            currency: self.currency,
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Euro. Exhibition billing is euro-denominated."]
        Eur = 1,
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(
            Money::eur(decimal("6.505")).rounded(),
            Money::eur(decimal("6.51")),
        );
        assert_eq!(
            Money::eur(decimal("6.504")).rounded(),
            Money::eur(decimal("6.50")),
        );
        assert_eq!(
            Money::eur(decimal("-6.505")).rounded(),
            Money::eur(decimal("-6.51")),
        );
    }

    #[test]
    fn contract_string_forces_two_decimals() {
        assert_eq!(Money::eur(4045).to_contract_string(), "4045,00");
        assert_eq!(
            Money::eur(decimal("19.5")).to_contract_string(),
            "19,50",
        );
        assert_eq!(Money::eur(decimal("6.5")).to_contract_string(), "6,50");
    }

    #[test]
    fn sums_and_scales() {
        let total: Money =
            [Money::eur(165) * Decimal::from(2), Money::eur(40)]
                .into_iter()
                .sum();
        assert_eq!(total, Money::eur(370));
        assert!(total.is_positive());
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}
