//! [`Engagement`] definitions.

use common::{define_kind, SignatureDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engagement record accompanying a submission: how the exhibitor pays and
/// how they signed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Engagement {
    /// Chosen [`PaymentMode`].
    pub payment_mode: PaymentMode,

    /// Whether the exhibition terms were accepted.
    pub terms_accepted: bool,

    /// Date the engagement was signed, if provided.
    pub signed_on: Option<SignatureDate>,

    /// Free-form signature stamp text.
    pub signature_stamp: String,
}

impl Default for Engagement {
    fn default() -> Self {
        Self {
            payment_mode: PaymentMode::Deposit,
            terms_accepted: false,
            signed_on: None,
            signature_stamp: String::new(),
        }
    }
}

define_kind! {
    #[doc = "Payment mode of an [`Engagement`]."]
    enum PaymentMode {
        #[doc = "Deposit now, balance later."]
        Deposit = 1,

        #[doc = "Full balance upfront."]
        Balance = 2,

        #[doc = "Bank transfer."]
        Transfer = 3,
    }
}

impl PaymentMode {
    /// Every [`PaymentMode`], in declaration order.
    pub const ALL: [Self; 3] = [Self::Deposit, Self::Balance, Self::Transfer];

    /// Export value of this mode as declared by the contract template's
    /// payment radio group and checkbox names.
    #[must_use]
    pub fn export_value(self) -> &'static str {
        match self {
            Self::Deposit => "acompte",
            Self::Balance => "solde",
            Self::Transfer => "virement",
        }
    }
}

#[cfg(test)]
mod spec {
    use super::PaymentMode;

    #[test]
    fn export_values_are_distinct() {
        let values: Vec<_> =
            PaymentMode::ALL.iter().map(|m| m.export_value()).collect();
        assert_eq!(values, ["acompte", "solde", "virement"]);
    }
}
