//! [`Exhibitor`] definitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity record of the exhibiting company.
///
/// Field contents are free-form: required-field validation belongs to the
/// (external) submission endpoint, not to the engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Exhibitor {
    /// Registered company name.
    pub company_name: String,

    /// Trade name printed on the booth sign.
    pub trade_name: String,

    /// Street address of the company.
    pub address: String,

    /// Postal code of the company.
    pub postal_code: String,

    /// City of the company.
    pub city: String,

    /// Country of the company.
    pub country: String,

    /// Phone number of the company.
    pub phone: String,

    /// Website of the company.
    pub website: String,

    /// SIRET registration number.
    pub siret: String,

    /// Intra-community VAT number.
    pub vat_number: String,

    /// Whether the company is a member of the organizing association.
    pub association_member: bool,

    /// Whether the company exhibited at the previous edition.
    pub exhibited_last_year: bool,

    /// Activity sectors of the company.
    pub sectors: Sectors,

    /// Billing address, when different from the company address.
    pub billing: Billing,

    /// Accounting contact.
    pub accounting: AccountingContact,

    /// Company manager.
    pub manager: Person,

    /// Operational manager, the on-site contact during the exhibition.
    pub operations: Person,
}

/// Activity sectors of an [`Exhibitor`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Sectors {
    /// Industry.
    pub industry: bool,

    /// Transport and logistics.
    pub transport_logistics: bool,

    /// Construction and housing.
    pub construction: bool,

    /// Environment and energy.
    pub environment_energy: bool,

    /// Business services.
    pub business_services: bool,

    /// Media and new technologies.
    pub media_new_tech: bool,

    /// Tourism and wellness.
    pub tourism_wellness: bool,

    /// Any other sector.
    pub other: bool,

    /// Description of the other sector.
    pub other_label: String,
}

/// Billing address of an [`Exhibitor`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Billing {
    /// Billing street address.
    pub address: String,

    /// Billing postal code.
    pub postal_code: String,

    /// Billing city.
    pub city: String,

    /// Billing country.
    pub country: String,
}

/// Accounting contact of an [`Exhibitor`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct AccountingContact {
    /// Full name of the contact.
    pub name: String,

    /// Direct phone number of the contact.
    pub phone: String,

    /// Email of the contact.
    pub email: String,
}

/// Named contact person of an [`Exhibitor`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Person {
    /// Last name.
    pub last_name: String,

    /// First name.
    pub first_name: String,

    /// Phone number.
    pub phone: String,

    /// Email.
    pub email: String,
}
