//! Field identifiers recognised in template items
//!
//! Templates label their slots with free-form strings, and several
//! templates spell the same slot differently. Every spelling maps to one
//! `FieldId`, so aliases always resolve identically.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ProductName,
    FullName,
    FirstName,
    Surname,
    Address,
    Email,
    Line1,
    Line2,
    City,
    Postcode,
    VehicleDescription,
    CurrentFranchise,
    TermOf,
    WeeklyFranchiseFee,
    FranchiseFeeVat,
    WeeklyFranchiseFeeTotal,
}

impl FieldId {
    pub const ALL: [FieldId; 16] = [
        FieldId::ProductName,
        FieldId::FullName,
        FieldId::FirstName,
        FieldId::Surname,
        FieldId::Address,
        FieldId::Email,
        FieldId::Line1,
        FieldId::Line2,
        FieldId::City,
        FieldId::Postcode,
        FieldId::VehicleDescription,
        FieldId::CurrentFranchise,
        FieldId::TermOf,
        FieldId::WeeklyFranchiseFee,
        FieldId::FranchiseFeeVat,
        FieldId::WeeklyFranchiseFeeTotal,
    ];

    /// Parse a template item identifier. Matching is exact (case-sensitive).
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "ProductName" => Some(FieldId::ProductName),
            "FullName" | "SelfName" => Some(FieldId::FullName),
            "FirstName" => Some(FieldId::FirstName),
            "Surname" => Some(FieldId::Surname),
            "Address" => Some(FieldId::Address),
            "Email" => Some(FieldId::Email),
            "Line1" => Some(FieldId::Line1),
            "Line2" => Some(FieldId::Line2),
            "City" => Some(FieldId::City),
            "Postcode" => Some(FieldId::Postcode),
            "VehicleDescription" | "DescriptionOfTuitionVehicle" => {
                Some(FieldId::VehicleDescription)
            }
            "CurrentAABSMFranchise" | "Duration of hire" => Some(FieldId::CurrentFranchise),
            "HireDuration" | "TermOf" => Some(FieldId::TermOf),
            "FirstWeeklyFranchiseFee"
            | "WeeklyFranchiseFee"
            | "FirstWeeklyFranchiseFeeAmount"
            | "tWeeklyFranchiseFeeAmount" => Some(FieldId::WeeklyFranchiseFee),
            "FirstWeeklyFranchiseFeeVAT"
            | "WeeklyFranchiseFeeVAT"
            | "FirstWeeklyFranchiseFeeVat"
            | "tWeeklyFranchiseFeeVat" => Some(FieldId::FranchiseFeeVat),
            "FirstWeeklyFranchiseFeeTotal" | "WeeklyFranchiseFeeTotal" => {
                Some(FieldId::WeeklyFranchiseFeeTotal)
            }
            _ => None,
        }
    }

    /// Every template spelling that selects this field
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            FieldId::ProductName => &["ProductName"],
            FieldId::FullName => &["FullName", "SelfName"],
            FieldId::FirstName => &["FirstName"],
            FieldId::Surname => &["Surname"],
            FieldId::Address => &["Address"],
            FieldId::Email => &["Email"],
            FieldId::Line1 => &["Line1"],
            FieldId::Line2 => &["Line2"],
            FieldId::City => &["City"],
            FieldId::Postcode => &["Postcode"],
            FieldId::VehicleDescription => &["VehicleDescription", "DescriptionOfTuitionVehicle"],
            FieldId::CurrentFranchise => &["CurrentAABSMFranchise", "Duration of hire"],
            FieldId::TermOf => &["HireDuration", "TermOf"],
            FieldId::WeeklyFranchiseFee => &[
                "FirstWeeklyFranchiseFee",
                "WeeklyFranchiseFee",
                "FirstWeeklyFranchiseFeeAmount",
                "tWeeklyFranchiseFeeAmount",
            ],
            FieldId::FranchiseFeeVat => &[
                "FirstWeeklyFranchiseFeeVAT",
                "WeeklyFranchiseFeeVAT",
                "FirstWeeklyFranchiseFeeVat",
                "tWeeklyFranchiseFeeVat",
            ],
            FieldId::WeeklyFranchiseFeeTotal => {
                &["FirstWeeklyFranchiseFeeTotal", "WeeklyFranchiseFeeTotal"]
            }
        }
    }

    /// Number of line slots this field fills
    pub fn line_count(&self) -> usize {
        match self {
            FieldId::Address => 4,
            _ => 1,
        }
    }

    /// Short human-readable description, used by the `fields` listing
    pub fn description(&self) -> &'static str {
        match self {
            FieldId::ProductName => "Proposition name",
            FieldId::FullName => "Person full name",
            FieldId::FirstName => "Person first name",
            FieldId::Surname => "Person surname",
            FieldId::Address => "Active address: line 1, line 2, town, postcode",
            FieldId::Email => "Active email contact",
            FieldId::Line1 => "Active address line 1",
            FieldId::Line2 => "Active address line 2",
            FieldId::City => "Active address town",
            FieldId::Postcode => "Active address postcode",
            FieldId::VehicleDescription => "Vehicle part of the proposition name",
            FieldId::CurrentFranchise => "Trainee franchise clause",
            FieldId::TermOf => "Franchise term in months",
            FieldId::WeeklyFranchiseFee => "Weekly fee excluding VAT",
            FieldId::FranchiseFeeVat => "VAT on the weekly fee",
            FieldId::WeeklyFranchiseFeeTotal => "Weekly fee including VAT",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
