//! Localized messages attached to validation issues

use crate::report::IssueCode;
use serde::{Deserialize, Serialize};

/// One message per issue kind. Keys match the serialized [`IssueCode`]
/// names so a host translation table can be deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vocab {
    pub error_empty_name: String,
    pub error_name_max_length: String,
    pub error_empty_context_variable: String,
    pub error_empty_context_variable_value: String,
    pub error_not_valid_context_variable_name: String,
    pub error_context_variable_name_not_legal: String,
    pub error_not_valid_value: String,
    pub error_duplicate_key: String,
}

impl Default for Vocab {
    fn default() -> Self {
        Self {
            error_empty_name: "Name is required".to_string(),
            error_name_max_length: "Name is too long".to_string(),
            error_empty_context_variable: "Variable name is required".to_string(),
            error_empty_context_variable_value: "Variable value is required".to_string(),
            error_not_valid_context_variable_name:
                "Variable name must start with a letter and contain only letters, digits and underscores (max 128)"
                    .to_string(),
            error_context_variable_name_not_legal: "This variable name is reserved".to_string(),
            error_not_valid_value: "Variable value must be at most 1000 characters".to_string(),
            error_duplicate_key: "Variable names must be unique".to_string(),
        }
    }
}

impl Vocab {
    pub fn message(&self, code: IssueCode) -> &str {
        match code {
            IssueCode::ErrorEmptyName => &self.error_empty_name,
            IssueCode::ErrorNameMaxLength => &self.error_name_max_length,
            IssueCode::ErrorEmptyContextVariable => &self.error_empty_context_variable,
            IssueCode::ErrorEmptyContextVariableValue => &self.error_empty_context_variable_value,
            IssueCode::ErrorNotValidContextVariableName => {
                &self.error_not_valid_context_variable_name
            }
            IssueCode::ErrorContextVariableNameNotLegal => {
                &self.error_context_variable_name_not_legal
            }
            IssueCode::ErrorNotValidValue => &self.error_not_valid_value,
            IssueCode::ErrorDuplicateKey => &self.error_duplicate_key,
        }
    }
}
