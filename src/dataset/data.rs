use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One entry of the `questions` array in a VQA questions file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_id: u64,
    pub image_id: u64,
    pub question: String,
}

/// Top level of a VQA questions file. Other fields (`info`, `license`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionManifest {
    pub data_type: String,
    pub data_subtype: String,
    pub questions: Vec<QuestionRecord>,
}

/// Index-aligned inputs for the encoder, sorted by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessedDataset {
    pub image_paths: Vec<PathBuf>,
    pub questions: Vec<String>,
    pub question_ids: Vec<u64>,
}

impl PreprocessedDataset {
    pub fn len(&self) -> usize {
        self.question_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question_ids.is_empty()
    }
}
