use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shellexpand::tilde;

pub use crate::model_loading::config::ClassNamesPolicy;
pub use crate::vqa_inference::config::InferenceConfig;

use crate::error::{VqaError, VqaResult};

pub const MODEL_FILE: &str = "model.h5";
pub const DATASET_DIR: &str = "simpsons_test_phase1";
pub const QUESTIONS_FILE: &str = "OpenEnded_abstract_v002_test2015_questions.json";
pub const ANSWER_FILE: &str = "answer.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Directory that contains `simpsons_test_phase1/`.
    pub input_dir: PathBuf,
    /// Directory that receives `answer.txt`.
    pub output_dir: PathBuf,
    pub model_path: PathBuf,
    pub class_names: ClassNamesPolicy,
    pub inference: InferenceConfig,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            model_path: PathBuf::from(MODEL_FILE),
            class_names: ClassNamesPolicy::default(),
            inference: InferenceConfig::default(),
        }
    }
}

impl SubmissionConfig {
    /// Reads a JSON config; a leading `~` in the path is expanded.
    pub fn from_json_file(path: &str) -> VqaResult<Self> {
        let path = PathBuf::from(tilde(path).into_owned());
        let file = File::open(&path).map_err(|err| {
            VqaError::InvalidConfig(format!("cannot open {}: {}", path.display(), err))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|err| {
            VqaError::InvalidConfig(format!("cannot parse {}: {}", path.display(), err))
        })
    }

    pub fn dataset_dir(&self) -> PathBuf {
        self.input_dir.join(DATASET_DIR)
    }

    pub fn answer_path(&self) -> PathBuf {
        self.output_dir.join(ANSWER_FILE)
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}
