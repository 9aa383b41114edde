use std::path::PathBuf;

use tracing::warn;

use super::classifier::Classifier;
use super::config::ClassNamesPolicy;
use crate::error::{VqaError, VqaResult};
use crate::vocabulary::Vocabulary;

/// A loaded classifier plus the metadata stored next to its weights.
pub struct ModelBundle<C> {
    pub path: PathBuf,
    pub classifier: C,
    pub vocab1: Vec<String>,
    pub vocab2: Vec<String>,
    pub class_names: Option<Vec<String>>,
}

impl<C: Classifier> ModelBundle<C> {
    /// Combined `vocab1` + `vocab2` lookup; an invalid vocabulary fails the load.
    pub fn vocabulary(&self) -> VqaResult<Vocabulary> {
        Vocabulary::from_parts(&self.vocab1, &self.vocab2)
            .map_err(|err| VqaError::model_load(&self.path, err))
    }

    /// Picks the answer labels according to `policy` and checks them against
    /// the classifier's output width when it is known.
    pub fn answer_labels(&self, policy: &ClassNamesPolicy) -> VqaResult<AnswerLabels> {
        let labels = match (&self.class_names, policy) {
            (Some(names), _) => names.clone(),
            (None, ClassNamesPolicy::Provided) => {
                return Err(VqaError::model_load(
                    &self.path,
                    "no class_names attribute and fallback labels are disabled",
                ))
            }
            (None, ClassNamesPolicy::Fallback(fallback)) => {
                warn!(
                    "model bundle has no class_names attribute, using {} fallback answer labels",
                    fallback.len()
                );
                fallback.clone()
            }
        };

        if let Some(num_classes) = self.classifier.num_classes() {
            if labels.len() != num_classes {
                return Err(VqaError::shape_mismatch(
                    "answer labels vs classifier outputs",
                    num_classes,
                    labels.len(),
                ));
            }
        }
        Ok(AnswerLabels::new(labels))
    }
}

/// Answer strings indexed by classifier output position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLabels {
    labels: Vec<String>,
}

impl AnswerLabels {
    pub fn new(labels: Vec<String>) -> Self {
        AnswerLabels { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, class_index: usize) -> Option<&str> {
        self.labels.get(class_index).map(String::as_str)
    }
}
