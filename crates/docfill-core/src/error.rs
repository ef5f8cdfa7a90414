use shared_types::TemplateDoc;
use thiserror::Error;

/// Failures inside a single fill pass
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("Failed to parse customer data JSON: {0}")]
    ParseError(serde_json::Error),

    #[error("Failed to serialize filled customer data: {0}")]
    SerializationError(serde_json::Error),
}

/// The only error surfaced by the filling path
#[derive(Error, Debug)]
pub enum FillError {
    #[error("Error filling json customer data for document revision {revision}: {source}")]
    Document {
        revision: String,
        #[source]
        source: ApplyError,
    },
}

impl FillError {
    pub fn for_template(template: &TemplateDoc, source: ApplyError) -> Self {
        FillError::Document {
            revision: template.document_revision_key.clone(),
            source,
        }
    }

    pub fn revision(&self) -> &str {
        match self {
            FillError::Document { revision, .. } => revision,
        }
    }
}
