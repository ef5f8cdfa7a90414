//! Command implementations, kept free of argument parsing and file IO

use anyhow::Context;
use docfill_core::{fill_value_customer_data, FieldId};
use memory_validator::{MemoryForm, MemoryValidator, ValidationReport, ValidatorConfig};
use serde::Serialize;
use serde_json::Value;
use shared_types::{Person, Proposition, TemplateDoc};

/// Fill a template and return pretty-printed JSON
pub fn fill(
    template_json: &str,
    person_json: &str,
    proposition_json: &str,
    revision: &str,
) -> anyhow::Result<String> {
    let person: Person =
        serde_json::from_str(person_json).context("Failed to parse person record")?;
    let proposition: Proposition =
        serde_json::from_str(proposition_json).context("Failed to parse proposition record")?;
    let template_value: Value =
        serde_json::from_str(template_json).context("Template is not valid JSON")?;

    let template = TemplateDoc::new(revision);
    let filled = fill_value_customer_data(&template, template_value, &person, &proposition)?;

    serde_json::to_string_pretty(&filled).context("Failed to render filled template")
}

/// Validate a memory form given as JSON
pub fn validate_memory(
    form_json: &str,
    config: ValidatorConfig,
) -> anyhow::Result<ValidationReport> {
    let form: MemoryForm =
        serde_json::from_str(form_json).context("Failed to parse memory form")?;
    Ok(MemoryValidator::with_config(config).validate(&form))
}

/// Render a report the way the form UI expects it (`null` when valid)
pub fn render_report(report: &ValidationReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&report.format()).context("Failed to render validation report")
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldListing {
    pub field: String,
    pub aliases: Vec<&'static str>,
    pub lines: usize,
    pub description: &'static str,
}

pub fn list_fields() -> Vec<FieldListing> {
    FieldId::ALL
        .iter()
        .map(|field| FieldListing {
            field: field.to_string(),
            aliases: field.aliases().to_vec(),
            lines: field.line_count(),
            description: field.description(),
        })
        .collect()
}
