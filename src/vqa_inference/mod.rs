pub mod config;
pub mod data;
pub mod inference;

pub use config::{InferenceConfig, DEFAULT_BATCH_SIZE};
pub use data::{PaddedBatch, Prediction, PAD_ID};
pub use inference::{argmax_rows, BatchPredictor};
