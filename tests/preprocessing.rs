mod common;

use std::fs;

use float_cmp::approx_eq;
use ndarray::Axis;

use vqa_submission::config::{DATASET_DIR, QUESTIONS_FILE};
use vqa_submission::dataset::load_dataset;
use vqa_submission::sample_encoding::SampleEncoder;
use vqa_submission::utils::read_image;
use vqa_submission::{VqaError, Vocabulary};

use common::{write_dataset, write_png};

#[test]
fn test_load_dataset_sorted_and_aligned() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_dir = write_dataset(
        dir.path(),
        &[
            (30, 3, "How many trees are there?"),
            (10, 1, "Is the man HAPPY!"),
            (20, 42, "Is it red, or blue."),
        ],
    );

    let dataset = load_dataset(&dataset_dir).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.question_ids, vec![10, 20, 30]);
    assert_eq!(
        dataset.questions,
        vec!["is the man happy .", "is it red .  or blue .", "how many trees are there ?"]
    );
    assert_eq!(
        dataset.image_paths[1],
        dataset_dir.join("abstract_v002_test2015_000000000042.png")
    );
    for path in &dataset.image_paths {
        assert!(path.exists(), "{}", path.display());
    }
}

#[test]
fn test_malformed_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_dir = dir.path().join(DATASET_DIR);
    fs::create_dir_all(&dataset_dir).unwrap();
    fs::write(dataset_dir.join(QUESTIONS_FILE), "{\"questions\": [").unwrap();

    let err = load_dataset(&dataset_dir).unwrap_err();
    assert!(matches!(err, VqaError::DatasetParse { .. }), "{}", err);
}

#[test]
fn test_manifest_missing_data_type() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_dir = dir.path().join(DATASET_DIR);
    fs::create_dir_all(&dataset_dir).unwrap();
    fs::write(
        dataset_dir.join(QUESTIONS_FILE),
        r#"{"data_subtype": "test2015", "questions": []}"#,
    )
    .unwrap();

    let err = load_dataset(&dataset_dir).unwrap_err();
    assert!(err.to_string().contains("data_type"), "{}", err);
}

#[test]
fn test_read_image_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.png");
    write_png(&path, 5, 3, [10, 20, 30]);

    let pixels = read_image(&path).unwrap();
    assert_eq!(pixels.dim(), (3, 5, 3));
    assert_eq!(pixels[(2, 4, 0)], 10);
    assert_eq!(pixels[(2, 4, 2)], 30);
}

#[test]
fn test_encode_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.png");
    write_png(&path, 8, 8, [255, 0, 51]);
    let vocabulary = Vocabulary::new(["is", "it", "red", "?"]).unwrap();
    let encoder = SampleEncoder::new(&vocabulary, (4, 2));

    let sample = encoder.encode(&path, "is it blue ?").unwrap();

    assert_eq!(sample.tokens, vec![1, 2, 0, 4]);
    assert_eq!(sample.image.dim(), (4, 2, 3));
    // a flat color survives resizing unchanged
    for px in sample.image.lanes(Axis(2)) {
        assert!(approx_eq!(f32, px[0], 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, px[1], 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, px[2], 0.2, epsilon = 1e-6));
    }
}
