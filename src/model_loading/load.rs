use std::path::Path;

use tracing::info;

use super::data::ModelBundle;
use crate::error::{VqaError, VqaResult};
use crate::resources::KerasClassifier;

/// Opens the serialized bundle at `model_path`.
pub fn load_model_bundle(model_path: impl AsRef<Path>) -> VqaResult<ModelBundle<KerasClassifier>> {
    let model_path = model_path.as_ref();
    if !model_path.is_file() {
        return Err(VqaError::model_load(model_path, "file does not exist"));
    }
    info!("Loading model bundle from {}", model_path.display());
    let bundle = KerasClassifier::load(model_path)?;
    info!(
        "Loaded model with {} + {} vocabulary entries, class names {}",
        bundle.vocab1.len(),
        bundle.vocab2.len(),
        if bundle.class_names.is_some() { "present" } else { "absent" }
    );
    Ok(bundle)
}
