use ndarray::ArrayView2;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use super::config::InferenceConfig;
use super::data::{PaddedBatch, Prediction};
use crate::dataset::PreprocessedDataset;
use crate::error::{VqaError, VqaResult};
use crate::model_loading::{AnswerLabels, Classifier};
use crate::sample_encoding::{EncodedSample, SampleEncoder};

/// Runs the classifier over a dataset in fixed-size batches.
pub struct BatchPredictor<'a, C> {
    classifier: &'a C,
    batch_size: usize,
    pool: ThreadPool,
}

impl<'a, C: Classifier> BatchPredictor<'a, C> {
    pub fn new(classifier: &'a C, config: &InferenceConfig) -> VqaResult<Self> {
        if config.batch_size == 0 {
            return Err(VqaError::InvalidConfig(String::from(
                "batch size must be at least 1",
            )));
        }
        let mut builder = ThreadPoolBuilder::new();
        if let Some(num_workers) = config.num_workers {
            builder = builder.num_threads(num_workers.max(1));
        }
        let pool = builder
            .build()
            .map_err(|err| VqaError::InvalidConfig(format!("failed to build encoder pool: {}", err)))?;

        Ok(BatchPredictor {
            classifier,
            batch_size: config.batch_size,
            pool,
        })
    }

    /// Predicts an answer for every question, keeping dataset order.
    pub fn predict_dataset(
        &self,
        dataset: &PreprocessedDataset,
        encoder: &SampleEncoder<'_>,
        answers: &AnswerLabels,
    ) -> VqaResult<Vec<Prediction>> {
        let num_batches = dataset.len().div_ceil(self.batch_size);
        let mut predictions = Vec::with_capacity(dataset.len());

        for (batch_index, start) in (0..dataset.len()).step_by(self.batch_size).enumerate() {
            let end = start.saturating_add(self.batch_size).min(dataset.len());
            let samples = self.encode_range(dataset, encoder, start, end)?;
            let batch = PaddedBatch::from_samples(&samples, encoder.image_size())?;
            debug!(
                "batch {}: {} samples, questions padded to {} tokens",
                batch_index,
                batch.len(),
                batch.tokens.ncols()
            );

            let proba = self.classifier.predict(batch)?;
            if proba.dim() != (end - start, answers.len()) {
                return Err(VqaError::shape_mismatch(
                    "classifier output",
                    (end - start, answers.len()),
                    proba.dim(),
                ));
            }

            for (offset, class_index) in argmax_rows(proba.view()).into_iter().enumerate() {
                let answer = answers.get(class_index).ok_or_else(|| {
                    VqaError::shape_mismatch("answer index", answers.len(), class_index)
                })?;
                predictions.push(Prediction {
                    question_id: dataset.question_ids[start + offset],
                    answer: answer.to_string(),
                });
            }
            info!(
                "Predicted batch {}/{} ({} questions)",
                batch_index + 1,
                num_batches,
                predictions.len()
            );
        }
        Ok(predictions)
    }

    fn encode_range(
        &self,
        dataset: &PreprocessedDataset,
        encoder: &SampleEncoder<'_>,
        start: usize,
        end: usize,
    ) -> VqaResult<Vec<EncodedSample>> {
        let image_paths = &dataset.image_paths[start..end];
        let questions = &dataset.questions[start..end];
        self.pool.install(|| {
            image_paths
                .par_iter()
                .zip(questions.par_iter())
                .map(|(path, question)| encoder.encode(path, question))
                .collect()
        })
    }
}

/// Index of the largest value in each row; ties go to the lowest index and NaN never wins.
pub fn argmax_rows(proba: ArrayView2<f32>) -> Vec<usize> {
    proba
        .rows()
        .into_iter()
        .map(|row| {
            let mut best: Option<(usize, f32)> = None;
            for (i, &p) in row.iter().enumerate() {
                match best {
                    _ if p.is_nan() => {}
                    Some((_, top)) if p <= top => {}
                    _ => best = Some((i, p)),
                }
            }
            best.map_or(0, |(i, _)| i)
        })
        .collect()
}
