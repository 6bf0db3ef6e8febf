//! Domain model of the exhibition registration.

pub mod engagement;
pub mod exhibitor;
pub mod selection;

pub use self::{
    engagement::{Engagement, PaymentMode},
    exhibitor::{AccountingContact, Billing, Exhibitor, Person, Sectors},
    selection::{
        AddOns, BoothKind, CoExhibitor, Furnishing, PowerTier,
        SelectionSnapshot, Signage, Space,
    },
};
