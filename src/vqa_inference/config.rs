use serde::{Deserialize, Serialize};

pub const DEFAULT_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub batch_size: usize,
    /// Threads used to encode samples; `None` lets rayon decide.
    pub num_workers: Option<usize>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            num_workers: None,
        }
    }
}
