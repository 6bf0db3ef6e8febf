//! [`Command`]s performed by the [`Service`].
//!
//! [`Service`]: crate::Service

pub mod generate_co_exhibitor_annex;
pub mod generate_contract;

#[doc(inline)]
pub use common::Handler as Command;

pub use self::{
    generate_co_exhibitor_annex::GenerateCoExhibitorAnnex,
    generate_contract::GenerateContract,
};
