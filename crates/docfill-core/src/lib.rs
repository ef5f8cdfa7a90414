//! Customer data document filling
//!
//! Templates are laid out ahead of time as pages of items, each item a list
//! of positioned text lines. This crate resolves every item's field
//! identifier against a person and a proposition and rewrites the line
//! texts in place:
//! - [`FieldId`]: the recognised identifiers and their aliases
//! - [`CustomerDataStrategy`]: per-field value derivation
//! - [`apply_customer_data`] / [`fill_json_customer_data`]: the fill pass

pub mod apply;
pub mod error;
pub mod field;
pub mod strategy;

pub use apply::{
    apply_customer_data, apply_with_strategy, fill_json_customer_data, fill_value_customer_data,
    FillSummary,
};
pub use error::{ApplyError, FillError};
pub use field::FieldId;
pub use strategy::{
    days_to_months, format_currency, resolve, CustomerDataStrategy, AVERAGE_DAYS_OF_MONTH,
    PLACEHOLDER,
};
