//! Ordered token-matching fallback for unmapped template fields.
//!
//! Rules are evaluated top to bottom against the canonicalized identifier
//! and the first match wins, so the order below is part of the contract:
//! reordering silently changes which value a given template identifier
//! resolves to. The sequence is pinned by a test. Known ambiguity is kept
//! as-is: a broad token such as `tel` shadows the more specific contact
//! rules further down, because the external template this list was written
//! against relies on the current resolution.

use common::SignatureDate;

use crate::domain::BoothKind;

use super::{normalize, registry::Resolve, FieldValue, MappingContext};

/// Single token-set rule of the fallback resolver.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Tokens that must all appear in the canonicalized identifier.
    ///
    /// Already canonical: lowercase ASCII, no diacritics.
    pub tokens: &'static [&'static str],

    /// Tokens that must not appear for this rule to fire.
    pub excluded: &'static [&'static str],

    /// Value-producing function of this rule.
    pub resolve: Resolve,
}

const fn rule(tokens: &'static [&'static str], resolve: Resolve) -> Rule {
    Rule {
        tokens,
        excluded: &[],
        resolve,
    }
}

const fn rule_excluding(
    tokens: &'static [&'static str],
    excluded: &'static [&'static str],
    resolve: Resolve,
) -> Rule {
    Rule {
        tokens,
        excluded,
        resolve,
    }
}

fn text(s: &str) -> Option<FieldValue> {
    Some(FieldValue::text(s))
}

fn company_or_trade(ctx: &MappingContext<'_>) -> Option<FieldValue> {
    let e = ctx.exhibitor;
    if e.company_name.is_empty() {
        text(&e.trade_name)
    } else {
        text(&e.company_name)
    }
}

fn booth_label(ctx: &MappingContext<'_>) -> Option<FieldValue> {
    text(
        ctx.selection
            .space
            .booth
            .map_or("", BoothKind::contract_label),
    )
}

fn booth_surface(ctx: &MappingContext<'_>) -> Option<FieldValue> {
    let surface = ctx.selection.space.surface;
    if surface > 0 {
        text(&surface.to_string())
    } else {
        text("")
    }
}

fn open_corners(ctx: &MappingContext<'_>) -> Option<FieldValue> {
    text(&ctx.selection.space.clamped_open_corners().to_string())
}

fn signature_date(ctx: &MappingContext<'_>) -> Option<FieldValue> {
    let date = ctx.engagement.signed_on.unwrap_or_else(SignatureDate::today);
    text(&date.to_string())
}

/// Fallback rules, in pinned evaluation order.
pub static RULES: &[Rule] = &[
    // Identity.
    rule(&["raison"], company_or_trade),
    rule(&["societe"], company_or_trade),
    rule_excluding(&["entreprise"], &["responsable"], company_or_trade),
    rule(&["enseigne"], |ctx| text(&ctx.exhibitor.trade_name)),
    rule(&["siret"], |ctx| text(&ctx.exhibitor.siret)),
    rule(&["tva"], |ctx| text(&ctx.exhibitor.vat_number)),
    rule_excluding(&["adresse"], &["facturation"], |ctx| {
        text(&ctx.exhibitor.address)
    }),
    rule_excluding(&["code", "postal"], &["facturation"], |ctx| {
        text(&ctx.exhibitor.postal_code)
    }),
    rule_excluding(&["ville"], &["facturation"], |ctx| {
        text(&ctx.exhibitor.city)
    }),
    rule_excluding(&["pays"], &["facturation"], |ctx| {
        text(&ctx.exhibitor.country)
    }),
    rule(&["telephone"], |ctx| text(&ctx.exhibitor.phone)),
    rule(&["tel"], |ctx| text(&ctx.exhibitor.phone)),
    rule(&["site"], |ctx| text(&ctx.exhibitor.website)),
    rule(&["internet"], |ctx| text(&ctx.exhibitor.website)),
    rule(&["web"], |ctx| text(&ctx.exhibitor.website)),
    // Billing and accounting.
    rule(&["facturation", "adresse"], |ctx| {
        text(&ctx.exhibitor.billing.address)
    }),
    rule(&["facturation", "cp"], |ctx| {
        text(&ctx.exhibitor.billing.postal_code)
    }),
    rule(&["facturation", "code", "postal"], |ctx| {
        text(&ctx.exhibitor.billing.postal_code)
    }),
    rule(&["facturation", "ville"], |ctx| {
        text(&ctx.exhibitor.billing.city)
    }),
    rule(&["facturation", "pays"], |ctx| {
        text(&ctx.exhibitor.billing.country)
    }),
    rule(&["compta", "nom"], |ctx| text(&ctx.exhibitor.accounting.name)),
    rule(&["compta", "tel"], |ctx| {
        text(&ctx.exhibitor.accounting.phone)
    }),
    rule(&["compta", "mail"], |ctx| {
        text(&ctx.exhibitor.accounting.email)
    }),
    rule(&["compta", "email"], |ctx| {
        text(&ctx.exhibitor.accounting.email)
    }),
    // Contacts.
    rule(&["responsable", "entreprise", "prenom"], |ctx| {
        text(&ctx.exhibitor.manager.first_name)
    }),
    rule(&["responsable", "entreprise", "nom"], |ctx| {
        text(&ctx.exhibitor.manager.last_name)
    }),
    rule(&["responsable", "entreprise", "mail"], |ctx| {
        text(&ctx.exhibitor.manager.email)
    }),
    rule(&["responsable", "entreprise", "email"], |ctx| {
        text(&ctx.exhibitor.manager.email)
    }),
    rule(&["responsable", "entreprise", "tel"], |ctx| {
        text(&ctx.exhibitor.manager.phone)
    }),
    rule(&["responsable", "operationnel", "prenom"], |ctx| {
        text(&ctx.exhibitor.operations.first_name)
    }),
    rule(&["responsable", "operationnel", "nom"], |ctx| {
        text(&ctx.exhibitor.operations.last_name)
    }),
    rule(&["responsable", "operationnel", "mail"], |ctx| {
        text(&ctx.exhibitor.operations.email)
    }),
    rule(&["responsable", "operationnel", "email"], |ctx| {
        text(&ctx.exhibitor.operations.email)
    }),
    rule(&["responsable", "operationnel", "tel"], |ctx| {
        text(&ctx.exhibitor.operations.phone)
    }),
    // Booth.
    rule(&["type", "stand"], booth_label),
    rule(&["surface"], booth_surface),
    rule(&["m2"], booth_surface),
    rule(&["metre", "carre"], booth_surface),
    rule(&["angle"], open_corners),
    // Engagement.
    rule(&["date", "signature"], signature_date),
    rule(&["cachet", "signature"], |ctx| {
        text(&ctx.engagement.signature_stamp)
    }),
    rule(&["accepte", "reglement"], |ctx| {
        Some(FieldValue::Flag(ctx.engagement.terms_accepted))
    }),
];

/// Resolves the provided identifier against [`RULES`], first match wins.
#[must_use]
pub fn resolve(identifier: &str, ctx: &MappingContext<'_>) -> Option<FieldValue> {
    let canonical = normalize(identifier);
    RULES
        .iter()
        .find(|rule| {
            rule.tokens.iter().all(|t| canonical.contains(t))
                && !rule.excluded.iter().any(|t| canonical.contains(t))
        })
        .and_then(|rule| (rule.resolve)(ctx))
}

#[cfg(test)]
mod spec {
    use crate::{
        catalog::Catalog,
        domain::{
            BoothKind, Engagement, Exhibitor, Person, SelectionSnapshot,
            Space,
        },
        totals::compute_totals,
    };

    use super::{
        super::{FieldValue, MappingContext},
        resolve, RULES,
    };

    fn sample_exhibitor() -> Exhibitor {
        Exhibitor {
            company_name: "Acme SAS".into(),
            phone: "0102030405".into(),
            manager: Person {
                last_name: "Durand".into(),
                first_name: "Claire".into(),
                phone: "0605040302".into(),
                email: "claire@acme.example".into(),
            },
            ..Exhibitor::default()
        }
    }

    #[test]
    fn rule_order_is_pinned() {
        let order: Vec<_> = RULES.iter().map(|r| r.tokens).collect();
        let expected: Vec<&[&str]> = vec![
            &["raison"],
            &["societe"],
            &["entreprise"],
            &["enseigne"],
            &["siret"],
            &["tva"],
            &["adresse"],
            &["code", "postal"],
            &["ville"],
            &["pays"],
            &["telephone"],
            &["tel"],
            &["site"],
            &["internet"],
            &["web"],
            &["facturation", "adresse"],
            &["facturation", "cp"],
            &["facturation", "code", "postal"],
            &["facturation", "ville"],
            &["facturation", "pays"],
            &["compta", "nom"],
            &["compta", "tel"],
            &["compta", "mail"],
            &["compta", "email"],
            &["responsable", "entreprise", "prenom"],
            &["responsable", "entreprise", "nom"],
            &["responsable", "entreprise", "mail"],
            &["responsable", "entreprise", "email"],
            &["responsable", "entreprise", "tel"],
            &["responsable", "operationnel", "prenom"],
            &["responsable", "operationnel", "nom"],
            &["responsable", "operationnel", "mail"],
            &["responsable", "operationnel", "email"],
            &["responsable", "operationnel", "tel"],
            &["type", "stand"],
            &["surface"],
            &["m2"],
            &["metre", "carre"],
            &["angle"],
            &["date", "signature"],
            &["cachet", "signature"],
            &["accepte", "reglement"],
        ];
        assert_eq!(order, expected);
    }

    fn resolve_sample(identifier: &str) -> Option<FieldValue> {
        let exhibitor = sample_exhibitor();
        let selection = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Equipped),
                surface: 12,
                open_corners: 1,
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
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
        resolve(identifier, &ctx)
    }

    #[test]
    fn resolves_identity_fields_by_tokens() {
        assert_eq!(
            resolve_sample("Raison Sociale (2)"),
            Some(FieldValue::text("Acme SAS")),
        );
        assert_eq!(
            resolve_sample("Type de stand"),
            Some(FieldValue::text("STAND ÉQUIPÉ")),
        );
        assert_eq!(
            resolve_sample("surface_retenue"),
            Some(FieldValue::text("12")),
        );
    }

    #[test]
    fn broad_tel_rule_shadows_contact_rules() {
        // Pinned ambiguity: `tel` fires before the manager-specific rule,
        // so a manager phone field resolves to the company phone.
        assert_eq!(
            resolve_sample("responsable_entreprise_tel"),
            Some(FieldValue::text("0102030405")),
        );
        // Fields without the broad tokens still reach the specific rules.
        assert_eq!(
            resolve_sample("responsable_entreprise_prenom"),
            Some(FieldValue::text("Claire")),
        );
    }

    #[test]
    fn unknown_identifiers_stay_unresolved() {
        assert_eq!(resolve_sample("header_decoration"), None);
    }
}
