//! Keras model bundles hosted in an embedded Python interpreter.

use std::path::Path;

use ndarray::Array2;
use numpy::{IntoPyArray, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyModule;
use tracing::{debug, info};

use crate::error::{VqaError, VqaResult};
use crate::model_loading::{Classifier, ModelBundle};
use crate::vqa_inference::data::PaddedBatch;

static KERAS_BUNDLE_SHIM: &str = include_str!("../python/keras_bundle.py");

pub struct KerasClassifier {
    bundle: PyObject,
    image_size: (usize, usize),
    num_classes: usize,
}

impl KerasClassifier {
    /// Loads `model.h5` together with its `vocab1`/`vocab2`/`class_names` attributes.
    pub fn load(model_path: impl AsRef<Path>) -> VqaResult<ModelBundle<Self>> {
        let model_path = model_path.as_ref();
        let path_str = model_path
            .to_str()
            .ok_or_else(|| VqaError::model_load(model_path, "path is not valid UTF-8"))?;

        Python::with_gil(|py| -> PyResult<ModelBundle<Self>> {
            let module = PyModule::from_code_bound(
                py,
                KERAS_BUNDLE_SHIM,
                "keras_bundle.py",
                "keras_bundle",
            )?;
            let versions: String = module.call_method0("runtime_versions")?.extract()?;
            info!("Using {}", versions);

            let bundle = module.getattr("KerasBundle")?.call1((path_str,))?;
            let vocab1: Vec<String> = bundle.getattr("vocab1")?.extract()?;
            let vocab2: Vec<String> = bundle.getattr("vocab2")?.extract()?;
            let class_names: Option<Vec<String>> = bundle.getattr("class_names")?.extract()?;
            let image_size: (usize, usize) = bundle.getattr("image_size")?.extract()?;
            let num_classes: usize = bundle.getattr("num_classes")?.extract()?;

            let summary: String = bundle.call_method0("summary")?.extract()?;
            debug!("model summary:\n{}", summary);

            Ok(ModelBundle {
                path: model_path.to_path_buf(),
                classifier: KerasClassifier {
                    bundle: bundle.unbind(),
                    image_size,
                    num_classes,
                },
                vocab1,
                vocab2,
                class_names,
            })
        })
        .map_err(|err| VqaError::model_load(model_path, err))
    }
}

impl Classifier for KerasClassifier {
    fn image_size(&self) -> (usize, usize) {
        self.image_size
    }

    fn num_classes(&self) -> Option<usize> {
        Some(self.num_classes)
    }

    fn predict(&self, batch: PaddedBatch) -> VqaResult<Array2<f32>> {
        Python::with_gil(|py| -> PyResult<Array2<f32>> {
            let images = batch.images.into_pyarray_bound(py);
            let tokens = batch.tokens.into_pyarray_bound(py);
            let result = self
                .bundle
                .bind(py)
                .call_method1("predict", (images, tokens))?;
            let proba: PyReadonlyArray2<f32> = result.extract()?;
            debug!("predicted probabilities with shape {:?}", proba.shape());
            Ok(proba.as_array().to_owned())
        })
        .map_err(|err| VqaError::Inference(err.to_string()))
    }
}
