//! Memory form validation
//!
//! A memory is a named set of context variables. Validation never fails:
//! every problem becomes an [`Issue`] attached to a field path, and the
//! caller decides what blocks submission.

pub mod config;
pub mod form;
pub mod messages;
pub mod patterns;
pub mod report;
pub mod rules;

pub use config::ValidatorConfig;
pub use form::{ContextVariable, MemoryForm};
pub use messages::Vocab;
pub use report::{FieldPath, FormattedErrors, Issue, IssueCode, ValidationReport};

use std::collections::HashSet;
use tracing::debug;

/// MemoryValidator entry point
pub struct MemoryValidator {
    name_max_length: usize,
    extra_reserved: HashSet<String>,
    vocab: Vocab,
}

impl MemoryValidator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        let extra_reserved = config
            .channel_variable_names
            .into_iter()
            .chain(config.system_variable_names)
            .collect();
        Self {
            name_max_length: config.name_max_length,
            extra_reserved,
            vocab: config.messages,
        }
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Whether `key` is reserved, built in or configured
    pub fn is_reserved(&self, key: &str) -> bool {
        patterns::is_builtin_reserved(key) || self.extra_reserved.contains(key)
    }

    pub fn validate(&self, form: &MemoryForm) -> ValidationReport {
        let mut issues = Vec::new();
        let fields = &form.field_list;

        issues.extend(rules::name::check_name(
            &form.name,
            self.name_max_length,
            &self.vocab,
        ));
        issues.extend(rules::variables::check_uninitialized_list(fields, &self.vocab));
        issues.extend(rules::variables::check_variables(
            fields,
            |key| self.is_reserved(key),
            &self.vocab,
        ));
        issues.extend(rules::duplicates::check_duplicate_keys(fields, &self.vocab));

        debug!(
            rows = fields.len(),
            issues = issues.len(),
            "Validated memory form"
        );

        ValidationReport { issues }
    }
}

impl Default for MemoryValidator {
    fn default() -> Self {
        Self::new()
    }
}
