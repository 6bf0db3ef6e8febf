//! Service contains the business logic of the quotation generator: the
//! pricing catalog, the totals calculator and the contract template filler.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod catalog;
pub mod command;
pub mod domain;
pub mod fields;
pub mod infra;
pub mod pdf;
pub mod totals;

pub use self::{
    catalog::Catalog,
    command::Command,
    totals::{compute_totals, TotalsBreakdown},
};

/// Domain service generating participation contracts.
#[derive(Clone, Debug)]
pub struct Service<T> {
    /// [`Catalog`] of this [`Service`].
    catalog: Catalog,

    /// Template source of this [`Service`].
    templates: T,
}

impl<T> Service<T> {
    /// Creates a new [`Service`] on top of the provided template source.
    pub fn new(templates: T) -> Self {
        Self {
            catalog: Catalog::current(),
            templates,
        }
    }

    /// Returns the [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the template source of this [`Service`].
    #[must_use]
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
