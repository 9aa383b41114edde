pub mod classifier;
pub mod config;
pub mod data;
#[cfg(feature = "keras")]
pub mod load;

pub use classifier::Classifier;
pub use config::{ClassNamesPolicy, FALLBACK_ANSWER_LABELS};
pub use data::{AnswerLabels, ModelBundle};
