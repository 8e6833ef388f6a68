//! Error types for mdsection-core

use thiserror::Error;

use crate::config::ConfigError;
use crate::toc::TocError;
use crate::transforms::SectionizeError;

#[derive(Error, Debug)]
pub enum MdsectionError {
    #[error(transparent)]
    Sectionize(#[from] SectionizeError),

    #[error(transparent)]
    Toc(#[from] TocError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transform error: {0}")]
    Transform(String),
}

impl MdsectionError {
    /// Create a transform error from any message.
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MdsectionError>;
