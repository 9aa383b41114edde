use std::path::Path;

use ndarray::{Array3, ArrayView3};

use super::data::EncodedSample;
use crate::error::VqaResult;
use crate::utils::read_image;
use crate::vocabulary::Vocabulary;

/// Turns (image path, cleaned question) pairs into model inputs.
///
/// Holds no mutable state, so one encoder is shared by all rayon workers.
#[derive(Debug, Clone, Copy)]
pub struct SampleEncoder<'a> {
    vocabulary: &'a Vocabulary,
    image_size: (usize, usize),
}

impl<'a> SampleEncoder<'a> {
    pub fn new(vocabulary: &'a Vocabulary, image_size: (usize, usize)) -> Self {
        SampleEncoder {
            vocabulary,
            image_size,
        }
    }

    pub fn image_size(&self) -> (usize, usize) {
        self.image_size
    }

    pub fn encode(&self, image_path: impl AsRef<Path>, question: &str) -> VqaResult<EncodedSample> {
        let pixels = read_image(image_path)?;
        let image = resize_bilinear(to_unit_range(pixels.view()).view(), self.image_size);
        let tokens = self.vocabulary.encode(split_tokens(question));
        Ok(EncodedSample { image, tokens })
    }
}

/// Splits on single spaces. Consecutive spaces yield empty tokens, which map to `[UNK]`.
pub fn split_tokens(question: &str) -> impl Iterator<Item = &str> {
    question.split(' ')
}

/// Scales by the reciprocal of 255, as `tf.image.convert_image_dtype` does.
pub fn to_unit_range(pixels: ArrayView3<u8>) -> Array3<f32> {
    let scale = 1.0f32 / 255.0;
    pixels.mapv(|p| p as f32 * scale)
}

/// Bilinear resize with half-pixel centers and no antialiasing, matching
/// `tf.image.resize(..., method="bilinear")`.
pub fn resize_bilinear(image: ArrayView3<f32>, (out_h, out_w): (usize, usize)) -> Array3<f32> {
    let (in_h, in_w, channels) = image.dim();
    if (in_h, in_w) == (out_h, out_w) {
        return image.to_owned();
    }
    let ys = interpolation_weights(in_h, out_h);
    let xs = interpolation_weights(in_w, out_w);

    let mut out = Array3::<f32>::zeros((out_h, out_w, channels));
    for (y, &(y0, y1, dy)) in ys.iter().enumerate() {
        for (x, &(x0, x1, dx)) in xs.iter().enumerate() {
            for c in 0..channels {
                let top_left = image[(y0, x0, c)];
                let top_right = image[(y0, x1, c)];
                let bottom_left = image[(y1, x0, c)];
                let bottom_right = image[(y1, x1, c)];
                let top = top_left + (top_right - top_left) * dx;
                let bottom = bottom_left + (bottom_right - bottom_left) * dx;
                out[(y, x, c)] = top + (bottom - top) * dy;
            }
        }
    }
    out
}

// (lower index, upper index, fraction toward upper) for each output position
fn interpolation_weights(in_size: usize, out_size: usize) -> Vec<(usize, usize, f32)> {
    let scale = in_size as f32 / out_size as f32;
    let last = in_size.saturating_sub(1) as f32;
    (0..out_size)
        .map(|i| {
            let src = (i as f32 + 0.5) * scale - 0.5;
            let floor = src.floor();
            let lower = floor.clamp(0.0, last) as usize;
            let upper = src.ceil().clamp(0.0, last) as usize;
            (lower, upper, src - floor)
        })
        .collect()
}
