use pdt_model::{ModelError, Recommender};

#[test]
fn load_recommender_from_json_file() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("pdt_recommendation_model.json");
    std::fs::write(
        &path,
        r#"{
            "model_name": "pdt-v1",
            "weights": [0.8, 5.0, 6.5, 2.0, 9.0, 1.1, 0.05, 0.2],
            "intercept": 14.0
        }"#,
    )
    .expect("write");

    let recommender = Recommender::load(&path).expect("load");
    assert_eq!(recommender.model_name(), "pdt-v1");
    assert_eq!(recommender.column_order().len(), 8);
}

#[test]
fn missing_artifact_halts_before_prediction() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let err = Recommender::load(tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
}

#[test]
fn artifact_with_wrong_weight_count_is_rejected() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(
        &path,
        r#"{"model_name":"pdt-truncated","weights":[1.0,2.0,3.0],"intercept":0.0}"#,
    )
    .expect("write");

    let err = Recommender::load(&path).unwrap_err();
    assert!(matches!(
        err,
        ModelError::ShapeMismatch { expected: 3, actual: 8 }
    ));
}
