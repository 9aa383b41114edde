pub mod answer_writer;
pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod model_loading;
pub mod pipeline;
#[cfg(feature = "keras")]
pub mod resources;
pub mod sample_encoding;
pub mod utils;
pub mod vocabulary;
pub mod vqa_inference;

pub use answer_writer::write_answers;
pub use error::{VqaError, VqaResult};
pub use model_loading::Classifier;
#[cfg(feature = "keras")]
pub use pipeline::run_submission;
pub use pipeline::{run_with_bundle, SubmissionSummary};
pub use vocabulary::Vocabulary;
