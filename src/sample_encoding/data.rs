use ndarray::Array3;

/// Model inputs for a single question.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSample {
    /// `(height, width, 3)`, values in `[0, 1]`
    pub image: Array3<f32>,
    pub tokens: Vec<i64>,
}
