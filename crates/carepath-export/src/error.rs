use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("evaluation could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("archive build failed: {0}")]
    Archive(#[from] std::io::Error),

    #[error("could not write bundle to {path}: {source}")]
    WriteBundle {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
