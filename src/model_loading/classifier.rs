use ndarray::Array2;

use crate::error::VqaResult;
use crate::vqa_inference::data::PaddedBatch;

/// A trained image + question classifier.
pub trait Classifier {
    /// Spatial size `(height, width)` the image input expects.
    fn image_size(&self) -> (usize, usize);

    /// Width of the output distribution, if the model declares it.
    fn num_classes(&self) -> Option<usize>;

    /// Returns one probability row per sample in the batch.
    fn predict(&self, batch: PaddedBatch) -> VqaResult<Array2<f32>>;
}
