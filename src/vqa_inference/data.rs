use ndarray::{Array2, Array4};

use crate::error::{VqaError, VqaResult};
use crate::sample_encoding::EncodedSample;

/// Token id used to right-pad questions within a batch.
pub const PAD_ID: i64 = 0;

/// Stacked inputs for one model call.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedBatch {
    /// `(batch, height, width, 3)`
    pub images: Array4<f32>,
    /// `(batch, longest question)`
    pub tokens: Array2<i64>,
}

impl PaddedBatch {
    pub fn from_samples(samples: &[EncodedSample], image_size: (usize, usize)) -> VqaResult<Self> {
        let (height, width) = image_size;
        let max_len = samples.iter().map(|s| s.tokens.len()).max().unwrap_or(0);

        let mut images = Array4::<f32>::zeros((samples.len(), height, width, 3));
        let mut tokens = Array2::<i64>::from_elem((samples.len(), max_len), PAD_ID);
        for (i, sample) in samples.iter().enumerate() {
            if sample.image.dim() != (height, width, 3) {
                return Err(VqaError::shape_mismatch(
                    "encoded image",
                    (height, width, 3),
                    sample.image.dim(),
                ));
            }
            images
                .index_axis_mut(ndarray::Axis(0), i)
                .assign(&sample.image);
            for (j, &id) in sample.tokens.iter().enumerate() {
                tokens[(i, j)] = id;
            }
        }
        Ok(PaddedBatch { images, tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub question_id: u64,
    pub answer: String,
}
