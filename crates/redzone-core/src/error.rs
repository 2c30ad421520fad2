use crate::template::error::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedzoneError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Data errors
    #[error("DATA_INVALID: {0}")]
    DataInvalid(String),

    // Template errors
    #[error("TEMPLATE_SYNTAX_ERROR: {0}")]
    TemplateSyntax(TemplateError),

    #[error("TEMPLATE_RENDER_ERROR: {0}")]
    TemplateRender(TemplateError),

    #[error("TEMPLATE_LOAD_ERROR: {0}")]
    TemplateLoad(TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<TemplateError> for RedzoneError {
    fn from(err: TemplateError) -> Self {
        if err.is_syntax_error() {
            RedzoneError::TemplateSyntax(err)
        } else if err.is_render_error() {
            RedzoneError::TemplateRender(err)
        } else {
            RedzoneError::TemplateLoad(err)
        }
    }
}

impl From<serde_json::Error> for RedzoneError {
    fn from(err: serde_json::Error) -> Self {
        RedzoneError::DataInvalid(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for RedzoneError {
    fn from(err: toml::de::Error) -> Self {
        RedzoneError::DataInvalid(format!("TOML error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, RedzoneError>;
