//! Validation issues and the report that collects them

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Kind of problem found. Serialized names double as message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueCode {
    ErrorEmptyName,
    ErrorNameMaxLength,
    ErrorEmptyContextVariable,
    ErrorEmptyContextVariableValue,
    ErrorNotValidContextVariableName,
    ErrorContextVariableNameNotLegal,
    ErrorNotValidValue,
    ErrorDuplicateKey,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::ErrorEmptyName => "errorEmptyName",
            IssueCode::ErrorNameMaxLength => "errorNameMaxLength",
            IssueCode::ErrorEmptyContextVariable => "errorEmptyContextVariable",
            IssueCode::ErrorEmptyContextVariableValue => "errorEmptyContextVariableValue",
            IssueCode::ErrorNotValidContextVariableName => "errorNotValidContextVariableName",
            IssueCode::ErrorContextVariableNameNotLegal => "errorContextVariableNameNotLegal",
            IssueCode::ErrorNotValidValue => "errorNotValidValue",
            IssueCode::ErrorDuplicateKey => "errorDuplicateKey",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of an issue within the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "field", content = "index", rename_all = "camelCase")]
pub enum FieldPath {
    Name,
    Key(usize),
    Value(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Key(i) => write!(f, "fieldList[{}].key", i),
            FieldPath::Value(i) => write!(f, "fieldList[{}].value", i),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: FieldPath,
    pub code: IssueCode,
    pub message: String,
}

/// All issues found for one form, in the order the rules emitted them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_for(&self, path: FieldPath) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.path == path).collect()
    }

    pub fn codes_for(&self, path: FieldPath) -> Vec<IssueCode> {
        self.issues
            .iter()
            .filter(|i| i.path == path)
            .map(|i| i.code)
            .collect()
    }

    pub fn has(&self, path: FieldPath, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.path == path && i.code == code)
    }

    pub fn count(&self, code: IssueCode) -> usize {
        self.issues.iter().filter(|i| i.code == code).count()
    }

    /// Nested per-field error lists as the form UI consumes them.
    /// `None` when the form is valid.
    pub fn format(&self) -> Option<FormattedErrors> {
        if self.is_valid() {
            return None;
        }

        let mut formatted = FormattedErrors::default();
        for issue in &self.issues {
            let message = issue.message.clone();
            match issue.path {
                FieldPath::Name => formatted.name.errors.push(message),
                FieldPath::Key(i) => formatted
                    .field_list
                    .entry(i)
                    .or_default()
                    .key
                    .get_or_insert_with(ErrorList::default)
                    .errors
                    .push(message),
                FieldPath::Value(i) => formatted
                    .field_list
                    .entry(i)
                    .or_default()
                    .value
                    .get_or_insert_with(ErrorList::default)
                    .errors
                    .push(message),
            }
        }
        Some(formatted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorList {
    #[serde(rename = "_errors")]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ErrorList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ErrorList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedErrors {
    pub name: ErrorList,
    #[serde(rename = "fieldList")]
    pub field_list: BTreeMap<usize, RowErrors>,
}
