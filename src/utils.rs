use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::Array3;

use crate::dataset::data::QuestionManifest;
use crate::error::{VqaError, VqaResult};

/// Decodes a PNG or JPEG file into an `(height, width, 3)` RGB array.
pub fn read_image(path: impl AsRef<Path>) -> VqaResult<Array3<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| VqaError::image_decode(path, err))?;
    let image = image::load_from_memory(&bytes)
        .map_err(|err| VqaError::image_decode(path, err))?
        .to_rgb8();
    let (width, height) = image.dimensions();
    Array3::from_shape_vec((height as usize, width as usize, 3), image.into_raw())
        .map_err(|err| VqaError::image_decode(path, err))
}

pub fn read_question_manifest(path: impl AsRef<Path>) -> VqaResult<QuestionManifest> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| VqaError::dataset_parse(path, err))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|err| VqaError::dataset_parse(path, err))
}
