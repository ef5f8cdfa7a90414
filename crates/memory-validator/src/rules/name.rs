use super::issue;
use crate::messages::Vocab;
use crate::report::{FieldPath, Issue, IssueCode};

/// The memory name is required and bounded, measured after trimming
pub fn check_name(name: &str, max_length: usize, vocab: &Vocab) -> Vec<Issue> {
    let mut issues = Vec::new();
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    if length < 1 {
        issues.push(issue(FieldPath::Name, IssueCode::ErrorEmptyName, vocab));
    }
    if length > max_length {
        issues.push(issue(FieldPath::Name, IssueCode::ErrorNameMaxLength, vocab));
    }

    issues
}
