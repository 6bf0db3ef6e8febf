//! Resolution of template field identifiers into typed values.
//!
//! Resolution is two-tiered: an authoritative explicit [`registry`] of known
//! template identifiers is consulted first, then the ordered
//! [`heuristics`] rules run against the canonicalized identifier. An
//! identifier neither tier recognizes stays unresolved, which the filler
//! treats as "leave the field blank".

pub mod heuristics;
pub mod normalize;
pub mod registry;

use common::Money;

use crate::{
    catalog::Catalog,
    domain::{Engagement, Exhibitor, SelectionSnapshot},
    totals::TotalsBreakdown,
};

pub use self::normalize::{contains_all_tokens, normalize};

/// Kind of a template field an explicit mapping targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Free-text field.
    Text,

    /// Binary on/off field.
    Checkbox,
}

/// Typed value produced by field resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// String to write into a text field.
    Text(String),

    /// State to drive a checkbox with.
    Flag(bool),
}

impl FieldValue {
    /// Shortcut building a [`FieldValue::Text`].
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Formats the provided amount the way the contract prints money:
    /// two decimal places, comma separator.
    #[must_use]
    pub fn amount(m: Money) -> Self {
        Self::Text(m.to_contract_string())
    }
}

/// Read-only aggregate every resolver function draws from.
#[derive(Clone, Copy, Debug)]
pub struct MappingContext<'a> {
    /// Identity of the exhibiting company.
    pub exhibitor: &'a Exhibitor,

    /// Options the exhibitor selected.
    pub selection: &'a SelectionSnapshot,

    /// Payment and signature record.
    pub engagement: &'a Engagement,

    /// Priced breakdown of the selection.
    pub totals: &'a TotalsBreakdown,

    /// Price list the breakdown was computed against.
    pub catalog: &'a Catalog,

    /// Forces every optional field to render a representative value, for
    /// template QA only.
    pub preview_all: bool,
}

/// Resolves the provided template field identifier against the explicit
/// registry first, then the ordered heuristic rules.
///
/// Returns [`None`] for identifiers neither tier recognizes.
#[must_use]
pub fn resolve(identifier: &str, ctx: &MappingContext<'_>) -> Option<FieldValue> {
    if let Some(mapping) = registry::lookup(identifier) {
        (mapping.resolve)(ctx)
    } else {
        heuristics::resolve(identifier, ctx)
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        catalog::Catalog,
        domain::{Engagement, Exhibitor, SelectionSnapshot},
        totals::compute_totals,
    };

    use super::{resolve, FieldValue, MappingContext};

    #[test]
    fn explicit_registry_wins_over_heuristics() {
        let exhibitor = Exhibitor {
            company_name: "Acme".into(),
            address: "1 rue des Forges".into(),
            ..Exhibitor::default()
        };
        let selection = SelectionSnapshot::default();
        let engagement = Engagement::default();
        let catalog = Catalog::current();
        let totals = compute_totals(&selection, &catalog);
        let ctx = MappingContext {
            exhibitor: &exhibitor,
            selection: &selection,
            engagement: &engagement,
            totals: &totals,
            catalog: &catalog,
            preview_all: false,
        };

        // "adresse" hits the registry directly.
        assert_eq!(
            resolve("adresse", &ctx),
            Some(FieldValue::text("1 rue des Forges")),
        );
        // An unknown identifier falls through to the heuristics.
        assert_eq!(
            resolve("Adresse du siège", &ctx),
            Some(FieldValue::text("1 rue des Forges")),
        );
        // Decorative fields stay unresolved.
        assert_eq!(resolve("logo_salon_header", &ctx), None);
    }
}
