use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("payload block not found: no script carries data-hypernova-key=\"{marker}\"")]
    PayloadNotFound { marker: String },

    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("field parse error: {field}: {reason}")]
    FieldParse { field: &'static str, reason: String },

    #[error("property type not found: no \"{label}\" entry in space_interface")]
    PropertyTypeNotFound { label: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

impl ExtractionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    pub(crate) fn field_parse(field: &'static str, reason: impl Into<String>) -> Self {
        Self::FieldParse {
            field,
            reason: reason.into(),
        }
    }
}
