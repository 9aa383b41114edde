pub use crate::dataset::data::{PreprocessedDataset, QuestionManifest, QuestionRecord};
pub use crate::model_loading::data::{AnswerLabels, ModelBundle};
pub use crate::sample_encoding::data::EncodedSample;
pub use crate::vqa_inference::data::{PaddedBatch, Prediction};
