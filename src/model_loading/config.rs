use serde::{Deserialize, Serialize};

/// Answer labels used when the model bundle carries no `class_names`.
/// Order matches the class indices the challenge models were trained with.
pub const FALLBACK_ANSWER_LABELS: [&str; 50] = [
    // numbers
    "yes", "no", "0", "1", "2", "3", "4", "5",
    // colors
    "black", "white", "red", "yellow", "brown", "blue", "gray", "green", "orange",
    "right", "left", "woman", "man", "day", "night", "open", "closed", "top", "down", "fire",
    "water",
    // objects
    "glasses", "glass", "tree", "tv", "table", "couch", "book", "car", "ball",
    // expressions
    "happy", "sad", "laughing",
    // actions
    "eating", "drinking", "playing", "walking", "reading", "cooking", "sitting", "standing",
    "sleeping",
];

/// Where the answer labels come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassNamesPolicy {
    /// The bundle must carry `class_names`.
    Provided,
    /// Use the bundle's `class_names` if present, otherwise this list.
    Fallback(Vec<String>),
}

impl Default for ClassNamesPolicy {
    fn default() -> Self {
        ClassNamesPolicy::Fallback(
            FALLBACK_ANSWER_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_uses_builtin_labels() {
        match ClassNamesPolicy::default() {
            ClassNamesPolicy::Fallback(labels) => {
                assert_eq!(labels.len(), FALLBACK_ANSWER_LABELS.len());
                assert_eq!(labels[0], "yes");
                assert_eq!(labels.last().map(String::as_str), Some("sleeping"));
            }
            ClassNamesPolicy::Provided => panic!("default must fall back"),
        }
    }
}
