//! Application provides the operational CLI around the [`Service`].

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

pub mod args;
pub mod config;

use serde::Deserialize;
use service::domain::{Engagement, Exhibitor, SelectionSnapshot};
// Used in binary.
use serde_json as _;
use tokio as _;
use tracing_subscriber as _;

pub use self::{
    args::{Args, CliCommand},
    config::Config,
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::FsTemplates>;

/// Registration submission to generate documents from, as captured by the
/// external wizard.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Identity of the exhibiting company.
    pub exhibitor: Exhibitor,

    /// Options the exhibitor selected.
    pub selection: SelectionSnapshot,

    /// Payment and signature record.
    pub engagement: Engagement,
}
