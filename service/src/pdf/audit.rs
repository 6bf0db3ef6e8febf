//! Template drift auditing for tooling.
//!
//! Lives outside the fill path on purpose: production filling never
//! consults it, tooling injects it explicitly to compare a template's
//! field inventory against the explicit mapping.

#[cfg(feature = "serde")]
use serde::Serialize;

use lopdf::Document;

use crate::fields::registry;

use super::{
    form::{self, FieldFlavor},
    Error,
};

/// Coverage report of a single template field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AuditEntry {
    /// Fully qualified field name.
    pub name: String,

    /// Declared kind of the field.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub flavor: FieldFlavor,

    /// Whether the explicit mapping covers this exact name.
    pub covered: bool,
}

/// Coverage report of a whole template.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AuditReport {
    /// Per-field entries, in template declaration order.
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    /// Total number of form fields found.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of fields covered by the explicit mapping.
    #[must_use]
    pub fn covered(&self) -> usize {
        self.entries.iter().filter(|e| e.covered).count()
    }

    /// Fields only the heuristic tier (or nothing) can serve.
    pub fn uncovered(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| !e.covered)
    }
}

/// Enumerates every form field of the provided template bytes and reports
/// which ones the explicit mapping covers.
pub fn inspect(template: &[u8]) -> Result<AuditReport, Error> {
    let mut doc = Document::load_mem(template)?;
    let form_id = form::acro_form_id(&mut doc)?;
    let entries = form::collect_fields(&doc, form_id)?
        .into_iter()
        .map(|field| AuditEntry {
            covered: registry::covers(&field.name),
            name: field.name,
            flavor: field.flavor,
        })
        .collect();
    Ok(AuditReport { entries })
}

#[cfg(test)]
mod spec {
    use crate::pdf::testing::template;

    use super::inspect;

    #[test]
    fn reports_explicit_coverage_per_field() {
        let report =
            inspect(&template(&["acompte", "solde", "virement"])).unwrap();

        assert_eq!(report.total(), 5);
        // `champ_decoratif` and `mode_reglement` are not in the explicit
        // mapping.
        assert_eq!(report.covered(), 3);
        let uncovered: Vec<_> =
            report.uncovered().map(|e| e.name.as_str()).collect();
        assert_eq!(uncovered, ["champ_decoratif", "mode_reglement"]);
    }
}
