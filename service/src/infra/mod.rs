//! Abstractions over the external resources the [`Service`] needs.
//!
//! [`Service`]: crate::Service

pub mod templates;

pub use self::templates::{TemplateKind, Templates};

#[cfg(feature = "fs")]
pub use self::templates::FsTemplates;
