use serde::{Deserialize, Serialize};

/// A named, reusable set of context variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub field_list: Vec<ContextVariable>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextVariable {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl ContextVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl MemoryForm {
    pub fn new(name: impl Into<String>, field_list: Vec<ContextVariable>) -> Self {
        Self {
            name: name.into(),
            field_list,
        }
    }
}
