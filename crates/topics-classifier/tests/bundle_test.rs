use std::fs;
use std::sync::Arc;

use test_fixtures::{bundle_dir, ScriptedEngine, SAMPLE_PREFIX_REGEX};
use topics_classifier::ModelBundle;
use topics_core::errors::{ConfigError, TopicsError};
use topics_core::models::{Topic, TopicId};

fn fixture_pipeline() -> topics_classifier::ClassificationPipeline {
    let bundle = ModelBundle::load(bundle_dir()).unwrap();
    bundle.into_pipeline(Arc::new(ScriptedEngine::from_fixture()))
}

#[test]
fn fixture_bundle_loads() {
    let bundle = ModelBundle::load(bundle_dir()).unwrap();

    assert_eq!(bundle.taxonomy().len(), 5);
    assert_eq!(bundle.taxonomy().unknown(), Topic::new(99, "Unknown"));
    assert_eq!(bundle.overrides().len(), 5);
    assert_eq!(bundle.config().filter.max_categories, 3);
    assert_eq!(bundle.config().filter.min_none_weight, 0.5);
    assert_eq!(bundle.dir(), bundle_dir().as_path());
    assert_eq!(bundle.normalizer().meaningless_prefix(), SAMPLE_PREFIX_REGEX);
    assert!(bundle.model_path().ends_with("model.onnx"));
    assert!(bundle.labels_path().ends_with("labels.txt"));
    assert!(bundle.vocab_path().ends_with("vocab.txt"));
}

#[test]
fn fixture_pipeline_classifies_end_to_end() {
    let pipeline = fixture_pipeline();

    assert!(
        pipeline.classify("https://www.football.com").is_err(),
        "football com is not scripted"
    );
    assert_eq!(
        pipeline.classify("football").unwrap(),
        vec![Topic::new(1, "Sports"), Topic::new(2, "Finance")]
    );
    assert_eq!(
        pipeline.classify("m.banking").unwrap(),
        vec![Topic::new(2, "Finance")]
    );
    assert_eq!(
        pipeline.classify("travel-news").unwrap(),
        vec![Topic::new(4, "Travel"), Topic::new(3, "News")]
    );
    assert_eq!(
        pipeline.classify("noise").unwrap(),
        vec![Topic::new(99, "Unknown")]
    );
}

#[test]
fn fixture_overrides_apply() {
    let pipeline = fixture_pipeline();

    assert_eq!(
        pipeline.classify("www.bbc").unwrap(),
        vec![Topic::new(3, "News")]
    );
    assert_eq!(
        pipeline.classify("financial-times").unwrap(),
        vec![Topic::new(2, "Finance"), Topic::new(3, "News")]
    );
    assert_eq!(
        pipeline.classify("mystery").unwrap(),
        vec![Topic::new(99, "Unknown")]
    );
    let err = pipeline.classify("ghost").unwrap_err();
    assert!(matches!(err, TopicsError::UnknownTopicReference { id } if id == TopicId(404)));
}

#[test]
fn all_topics_lists_taxonomy_in_source_order() {
    let names: Vec<_> = fixture_pipeline()
        .all_topics()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Sports", "Finance", "News", "Travel"]);
}

#[test]
fn toml_config_is_used_when_no_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
taxonomy_id_column = "id"
taxonomy_name_column = "name"
unknown_topic_id = 0
unknown_topic_name = "None"
override_list_filename = "overrides.tsv"
override_list_input_column = "domain"
override_list_topics_column = "ids"
meaningless_prefix_regex = "^www\\."
max_categories = 2
min_none_weight = "3F000000"
min_category_weight = "3DCCCCCD"
min_normalized_weight_within_top_n = "3E4CCCCD"
"#,
    )
    .unwrap();
    fs::write(dir.path().join("taxonomy.tsv"), "id\tname\n10\tArts\n").unwrap();
    fs::write(dir.path().join("overrides.tsv"), "domain\tids\nmuseum\t10\n").unwrap();

    let bundle = ModelBundle::load(dir.path()).unwrap();
    assert_eq!(bundle.taxonomy().unknown(), Topic::new(0, "None"));

    let pipeline = bundle.into_pipeline(Arc::new(ScriptedEngine::new()));
    assert_eq!(
        pipeline.classify("www.museum").unwrap(),
        vec![Topic::new(10, "Arts")]
    );
}

#[test]
fn missing_config_is_read_failed() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed { .. }));
}

#[test]
fn missing_taxonomy_file_is_read_failed() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(bundle_dir().join("config.json"), dir.path().join("config.json")).unwrap();
    let err = ModelBundle::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ReadFailed { ref path, .. } if path.ends_with("taxonomy.tsv")
    ));
}

#[test]
fn invalid_prefix_regex_blocks_startup() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["taxonomy.tsv", "override_list.tsv"] {
        fs::copy(bundle_dir().join(name), dir.path().join(name)).unwrap();
    }
    let config = fs::read_to_string(bundle_dir().join("config.json"))
        .unwrap()
        .replace(r#""^(www[0-9]*"#, r#""^((www[0-9]*"#);
    fs::write(dir.path().join("config.json"), config).unwrap();

    let err = ModelBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRegex { .. }));
}
