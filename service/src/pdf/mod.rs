//! Filling and flattening of AcroForm contract templates.

pub mod appearance;
pub mod audit;
pub mod fill;
pub mod form;
#[cfg(test)]
pub(crate) mod testing;

use derive_more::{Display, Error as StdError, From};

use crate::domain::{CoExhibitor, Exhibitor};

pub use self::{
    audit::{inspect, AuditEntry, AuditReport},
    fill::{fill_co_exhibitor, fill_contract},
    form::{FieldFlavor, FormField},
};

/// Error of filling a contract template.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Template bytes don't parse as a well-formed document.
    #[display("malformed template document: {_0}")]
    #[from]
    Malformed(lopdf::Error),

    /// Writing out the filled document failed.
    #[display("failed to serialize document: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Template carries no interactive form at all.
    #[display("template document has no interactive form")]
    MissingForm,

    /// Payment radio group of the template no longer declares an option
    /// for every supported payment mode.
    #[display(
        "payment selector lacks an option for `{expected}` \
         (template declares {declared:?})"
    )]
    PaymentOptionsMismatch {
        /// Export value no option was found for.
        expected: &'static str,

        /// Option export values the template actually declares.
        #[error(not(source))]
        declared: Vec<String>,
    },
}

/// Replaces characters the template's fonts cannot render.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{a0}' | '\u{202f}' => out.push(' '),
            '€' => out.push_str("EUR"),
            '–' | '—' => out.push('-'),
            '’' => out.push('\''),
            _ => out.push(c),
        }
    }
    out
}

/// Strips characters unsafe in a filename.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Suggested filename of a filled participation contract.
#[must_use]
pub fn contract_filename(exhibitor: &Exhibitor) -> String {
    let base = if exhibitor.company_name.is_empty() {
        "exposant"
    } else {
        &exhibitor.company_name
    };
    format!("contrat-{}.pdf", sanitize_filename(base))
}

/// Suggested filename of a filled co-exhibitor annex.
///
/// `index` is zero-based, the filename counts from 1.
#[must_use]
pub fn co_exhibitor_filename(co: &CoExhibitor, index: usize) -> String {
    let company = if co.company_name.is_empty() {
        format!("co-exposant-{}", index + 1)
    } else {
        co.company_name.clone()
    };
    format!("co-exposant-{}-{}.pdf", index + 1, sanitize_filename(&company))
}
