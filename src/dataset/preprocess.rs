use std::path::Path;

use tracing::info;

use super::data::{PreprocessedDataset, QuestionManifest};
use crate::config::QUESTIONS_FILE;
use crate::error::VqaResult;
use crate::utils::read_question_manifest;

/// Lower-cases the question and pads punctuation with spaces, without trimming.
///
/// `?` keeps its own token while `.`, `,` and `!` all become `.`; the trained
/// vocabulary depends on this exact mapping.
pub fn normalize_punctuation(question: &str) -> String {
    question
        .to_lowercase()
        .replace('?', " ? ")
        .replace('.', " . ")
        .replace(',', " . ")
        .replace('!', " . ")
}

pub fn clean_question(question: &str) -> String {
    normalize_punctuation(question).trim().to_string()
}

/// `<data_type>_<data_subtype>_<12-digit image id>.png`
pub fn image_file_name(data_type: &str, data_subtype: &str, image_id: u64) -> String {
    format!("{}_{}_{:012}.png", data_type, data_subtype, image_id)
}

pub fn preprocess_questions(
    mut manifest: QuestionManifest,
    image_dir: impl AsRef<Path>,
) -> PreprocessedDataset {
    let image_dir = image_dir.as_ref();
    manifest.questions.sort_by_key(|q| q.question_id);

    let mut dataset = PreprocessedDataset::default();
    for q in manifest.questions {
        dataset.questions.push(clean_question(&q.question));
        dataset.image_paths.push(image_dir.join(image_file_name(
            &manifest.data_type,
            &manifest.data_subtype,
            q.image_id,
        )));
        dataset.question_ids.push(q.question_id);
    }
    dataset
}

/// Reads the questions file inside `dataset_dir`; images live next to it.
pub fn load_dataset(dataset_dir: impl AsRef<Path>) -> VqaResult<PreprocessedDataset> {
    let dataset_dir = dataset_dir.as_ref();
    let manifest = read_question_manifest(dataset_dir.join(QUESTIONS_FILE))?;
    info!(
        "Read {} questions ({} / {})",
        manifest.questions.len(),
        manifest.data_type,
        manifest.data_subtype
    );
    Ok(preprocess_questions(manifest, dataset_dir))
}
