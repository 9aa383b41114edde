//! Error types for the submission pipeline.
//!
//! Every variant is fatal: the pipeline stops at the first error and the
//! binary exits with a nonzero status after logging it.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type VqaResult<T> = Result<T, VqaError>;

#[derive(Error, Debug)]
pub enum VqaError {
    #[error("failed to load model bundle {path}: {message}")]
    ModelLoad { path: PathBuf, message: String },

    #[error("failed to parse question manifest {path}: {message}")]
    DatasetParse { path: PathBuf, message: String },

    #[error("failed to decode image {path}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: String,
        actual: String,
    },

    #[error("model inference failed: {0}")]
    Inference(String),

    #[error("failed to write answers to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl VqaError {
    pub fn model_load(path: impl AsRef<Path>, message: impl ToString) -> Self {
        VqaError::ModelLoad {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn dataset_parse(path: impl AsRef<Path>, message: impl ToString) -> Self {
        VqaError::DatasetParse {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn image_decode(path: impl AsRef<Path>, message: impl ToString) -> Self {
        VqaError::ImageDecode {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn shape_mismatch(
        context: &'static str,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        VqaError::ShapeMismatch {
            context,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    pub fn output_write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        VqaError::OutputWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
