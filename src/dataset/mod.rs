pub mod data;
pub mod preprocess;

pub use data::{PreprocessedDataset, QuestionManifest, QuestionRecord};
pub use preprocess::{clean_question, image_file_name, load_dataset, preprocess_questions};
