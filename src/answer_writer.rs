use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{VqaError, VqaResult};
use crate::vqa_inference::Prediction;

/// Writes `question_id,answer` lines, replacing any existing file.
///
/// Answers are written verbatim; labels are assumed to hold no comma or newline.
pub fn write_answers(path: impl AsRef<Path>, predictions: &[Prediction]) -> VqaResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| VqaError::output_write(path, err))?;
    }

    let file = File::create(path).map_err(|err| VqaError::output_write(path, err))?;
    let mut writer = BufWriter::new(file);
    for prediction in predictions {
        writeln!(writer, "{},{}", prediction.question_id, prediction.answer)
            .map_err(|err| VqaError::output_write(path, err))?;
    }
    writer.flush().map_err(|err| VqaError::output_write(path, err))?;

    info!("Wrote {} answers to {}", predictions.len(), path.display());
    Ok(())
}
