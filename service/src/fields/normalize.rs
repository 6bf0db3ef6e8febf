//! Canonicalization of template field identifiers.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonicalizes the provided raw field identifier.
///
/// Lower-cases, strips diacritics, collapses every run of non-alphanumeric
/// characters into a single space and trims. The result is a plain token
/// string suitable for substring matching, with no knowledge of field
/// semantics.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut separated = false;
    for c in raw.to_lowercase().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if separated && !out.is_empty() {
                out.push(' ');
            }
            separated = false;
            out.push(c);
        } else {
            separated = true;
        }
    }
    out
}

/// Indicates whether every one of the provided tokens appears, after
/// canonicalization, as a substring of the canonicalized `name`.
#[must_use]
pub fn contains_all_tokens(name: &str, tokens: &[&str]) -> bool {
    let canonical = normalize(name);
    tokens
        .iter()
        .all(|token| canonical.contains(&normalize(token)))
}

#[cfg(test)]
mod spec {
    use super::{contains_all_tokens, normalize};

    #[test]
    fn lowercases_and_strips_diacritics() {
        assert_eq!(normalize("Téléphone"), "telephone");
        assert_eq!(normalize("RÉSERVÉ"), "reserve");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(normalize("resp__ope--nom"), "resp ope nom");
        assert_eq!(normalize("  Code   Postal  "), "code postal");
        assert_eq!(normalize("std.ext/surface (qté)"), "std ext surface qte");
    }

    #[test]
    fn matches_all_tokens_as_substrings() {
        assert!(contains_all_tokens("Responsable_Opérationnel_Nom", &[
            "responsable",
            "operationnel",
            "nom",
        ]));
        assert!(contains_all_tokens("facturation_cp", &["facturation", "cp"]));
        assert!(!contains_all_tokens("adresse", &["adresse", "facturation"]));
    }
}
