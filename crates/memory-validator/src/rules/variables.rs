//! Per-row checks on the context variable list

use super::issue;
use crate::form::ContextVariable;
use crate::messages::Vocab;
use crate::patterns::{is_valid_key_format, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
use crate::report::{FieldPath, Issue, IssueCode};

/// A list whose every row is exactly `""` / `""` has never been filled in.
/// Every row gets flagged on both columns.
pub fn check_uninitialized_list(fields: &[ContextVariable], vocab: &Vocab) -> Vec<Issue> {
    let all_empty = fields
        .iter()
        .all(|f| f.key.is_empty() && f.value.is_empty());
    if !all_empty {
        return Vec::new();
    }

    fields
        .iter()
        .enumerate()
        .flat_map(|(index, _)| {
            [
                issue(FieldPath::Key(index), IssueCode::ErrorEmptyContextVariable, vocab),
                issue(
                    FieldPath::Value(index),
                    IssueCode::ErrorEmptyContextVariableValue,
                    vocab,
                ),
            ]
        })
        .collect()
}

/// Emptiness, format, size and reserved-name checks for each row that is
/// not blank on both sides (after trimming)
pub fn check_variables(
    fields: &[ContextVariable],
    is_reserved: impl Fn(&str) -> bool,
    vocab: &Vocab,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let key = field.key.trim();
        let value = field.value.trim();
        if key.is_empty() && value.is_empty() {
            continue;
        }

        let key_path = FieldPath::Key(index);
        let value_path = FieldPath::Value(index);

        if key.is_empty() {
            issues.push(issue(key_path, IssueCode::ErrorEmptyContextVariable, vocab));
        }
        if value.is_empty() {
            issues.push(issue(
                value_path,
                IssueCode::ErrorEmptyContextVariableValue,
                vocab,
            ));
        }
        if key.chars().count() > MAX_KEY_LENGTH {
            issues.push(issue(
                key_path,
                IssueCode::ErrorNotValidContextVariableName,
                vocab,
            ));
        }
        if !is_valid_key_format(key) {
            issues.push(issue(
                key_path,
                IssueCode::ErrorNotValidContextVariableName,
                vocab,
            ));
        }
        if is_reserved(key) {
            issues.push(issue(
                key_path,
                IssueCode::ErrorContextVariableNameNotLegal,
                vocab,
            ));
        }
        if value.chars().count() > MAX_VALUE_LENGTH {
            issues.push(issue(value_path, IssueCode::ErrorNotValidValue, vocab));
        }
    }

    issues
}
