//! Customer records supplied by the host application
//!
//! These are read-only inputs to document filling. Every attribute is
//! optional because upstream records are frequently incomplete.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub contact_details: Vec<ContactDetail>,
}

impl Person {
    /// The first address flagged active, if any
    pub fn active_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.active)
    }

    /// Value of the first active contact of the given type
    pub fn active_contact(&self, kind: ContactType) -> Option<&str> {
        self.contact_details
            .iter()
            .find(|c| c.active && c.contact_type == kind)
            .and_then(|c| c.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactType {
    Email,
    Telephone,
    Mobile,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    pub contact_type: ContactType,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// A franchise proposition (the product being offered)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposition {
    #[serde(default)]
    pub proposition_name: Option<String>,
    #[serde(default)]
    pub price_ex_vat: Option<f64>,
    #[serde(default)]
    pub fran_admin_vat: Option<AdminVat>,
    /// Franchise term length in days; upstream sends any JSON number
    #[serde(default)]
    pub fran_term_days: Option<f64>,
    #[serde(default)]
    pub brand: Option<Brand>,
}

impl Proposition {
    /// VAT rate as a fraction (0.2 for 20%)
    pub fn vat_rate(&self) -> Option<f64> {
        self.fran_admin_vat.as_ref().and_then(|v| v.vat)
    }

    pub fn brand_description(&self) -> Option<&str> {
        self.brand
            .as_ref()
            .and_then(|b| b.item_description.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminVat {
    #[serde(default)]
    pub vat: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default)]
    pub item_description: Option<String>,
}
