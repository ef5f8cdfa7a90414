//! Write resolved field values into a template's line slots

use crate::error::{ApplyError, FillError};
use crate::strategy::CustomerDataStrategy;
use serde_json::Value;
use shared_types::{Page, Person, Proposition, TemplateDoc};
use tracing::{debug, info};

/// Counters for one fill pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillSummary {
    /// Items whose id resolved to at least one value
    pub items_filled: usize,
    /// Line texts overwritten
    pub lines_written: usize,
    /// Items left untouched because their id is unknown
    pub items_skipped: usize,
}

/// Fill every recognised item in `pages` from the customer records.
///
/// Lines are rewritten by position. Coordinates and the number of lines are
/// never changed: lines beyond the resolved values keep their text, and
/// surplus values are dropped.
pub fn apply_customer_data(
    pages: &mut [Page],
    person: &Person,
    proposition: &Proposition,
) -> FillSummary {
    let strategy = CustomerDataStrategy::new(person, proposition);
    apply_with_strategy(pages, &strategy)
}

pub fn apply_with_strategy(pages: &mut [Page], strategy: &CustomerDataStrategy<'_>) -> FillSummary {
    let mut summary = FillSummary::default();

    for page in pages.iter_mut() {
        for item in page.items.iter_mut() {
            let values = strategy.process(&item.id);
            if values.is_empty() {
                debug!(page = %page.page, id = %item.id, "No resolver for field, leaving it as is");
                summary.items_skipped += 1;
                continue;
            }

            for (line, value) in item.lines.iter_mut().zip(values) {
                line.text = value;
                summary.lines_written += 1;
            }
            summary.items_filled += 1;
        }
    }

    summary
}

/// Fill a template held as JSON text and return the filled JSON.
///
/// Any failure is reported as one [`FillError`] naming the template
/// revision. Work done before the failure is not rolled back.
pub fn fill_json_customer_data(
    template: &TemplateDoc,
    customer_data_json: &str,
    person: &Person,
    proposition: &Proposition,
) -> Result<String, FillError> {
    let run = || -> Result<String, ApplyError> {
        let mut pages: Vec<Page> =
            serde_json::from_str(customer_data_json).map_err(ApplyError::ParseError)?;
        let summary = apply_customer_data(&mut pages, person, proposition);
        log_summary(template, &summary);
        serde_json::to_string(&pages).map_err(ApplyError::SerializationError)
    };
    run().map_err(|source| FillError::for_template(template, source))
}

/// Same as [`fill_json_customer_data`] for an already parsed JSON value
pub fn fill_value_customer_data(
    template: &TemplateDoc,
    customer_data: Value,
    person: &Person,
    proposition: &Proposition,
) -> Result<Value, FillError> {
    let run = || -> Result<Value, ApplyError> {
        let mut pages: Vec<Page> =
            serde_json::from_value(customer_data).map_err(ApplyError::ParseError)?;
        let summary = apply_customer_data(&mut pages, person, proposition);
        log_summary(template, &summary);
        serde_json::to_value(&pages).map_err(ApplyError::SerializationError)
    };
    run().map_err(|source| FillError::for_template(template, source))
}

fn log_summary(template: &TemplateDoc, summary: &FillSummary) {
    info!(
        revision = %template.document_revision_key,
        items_filled = summary.items_filled,
        lines_written = summary.lines_written,
        items_skipped = summary.items_skipped,
        "Filled customer data"
    );
}
