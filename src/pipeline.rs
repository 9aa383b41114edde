//! The end-to-end submission run: model → vocabulary → dataset → predictions → `answer.txt`.

use tracing::info;

use crate::answer_writer::write_answers;
use crate::config::SubmissionConfig;
use crate::dataset::load_dataset;
use crate::error::VqaResult;
use crate::model_loading::{Classifier, ModelBundle};
use crate::sample_encoding::SampleEncoder;
use crate::vqa_inference::BatchPredictor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub num_questions: usize,
    pub num_batches: usize,
}

/// Loads `model.h5` with the Keras backend and runs the submission.
#[cfg(feature = "keras")]
pub fn run_submission(config: &SubmissionConfig) -> VqaResult<SubmissionSummary> {
    let bundle = crate::model_loading::load::load_model_bundle(config.model_path())?;
    run_with_bundle(&bundle, config)
}

pub fn run_with_bundle<C: Classifier>(
    bundle: &ModelBundle<C>,
    config: &SubmissionConfig,
) -> VqaResult<SubmissionSummary> {
    info!("Using input_dir: {}", config.input_dir.display());
    info!("Using output_dir: {}", config.output_dir.display());

    let answers = bundle.answer_labels(&config.class_names)?;
    let image_size = bundle.classifier.image_size();
    info!("Size of input images: {:?}", image_size);

    let vocabulary = bundle.vocabulary()?;
    info!("The size of the vocabulary = {}", vocabulary.vocabulary_size());
    info!("Top 20 tokens in the vocabulary: {:?}", vocabulary.top_tokens(20));

    let dataset = load_dataset(config.dataset_dir())?;
    let encoder = SampleEncoder::new(&vocabulary, image_size);
    let predictor = BatchPredictor::new(&bundle.classifier, &config.inference)?;
    let predictions = predictor.predict_dataset(&dataset, &encoder, &answers)?;

    write_answers(config.answer_path(), &predictions)?;

    Ok(SubmissionSummary {
        num_questions: predictions.len(),
        num_batches: predictions.len().div_ceil(config.inference.batch_size),
    })
}
