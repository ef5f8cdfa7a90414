use super::issue;
use crate::form::ContextVariable;
use crate::messages::Vocab;
use crate::report::{FieldPath, Issue, IssueCode};
use std::collections::HashMap;

/// Every row whose key occurs more than once is flagged. Empty keys are
/// ignored; keys are compared exactly as entered.
pub fn check_duplicate_keys(fields: &[ContextVariable], vocab: &Vocab) -> Vec<Issue> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for field in fields.iter().filter(|f| !f.key.is_empty()) {
        *occurrences.entry(field.key.as_str()).or_default() += 1;
    }

    fields
        .iter()
        .enumerate()
        .filter(|(_, f)| occurrences.get(f.key.as_str()).is_some_and(|n| *n > 1))
        .map(|(index, _)| issue(FieldPath::Key(index), IssueCode::ErrorDuplicateKey, vocab))
        .collect()
}
