use topics_core::config::*;
use topics_core::errors::ConfigError;
use topics_core::models::TopicId;

const BUNDLE_JSON: &str = r#"{
    "taxonomy_id_column": "ID",
    "taxonomy_name_column": "Topic",
    "unknown_topic_id": -2,
    "unknown_topic_name": "Unknown",
    "override_list_input_column": "input",
    "override_list_topics_column": "topics",
    "meaningless_prefix_regex": "^(www[0-9]*|web|m)\\.",
    "max_categories": 5,
    "min_none_weight": "3F000000",
    "min_category_weight": "3DCCCCCD",
    "min_normalized_weight_within_top_n": "3E4CCCCD"
}"#;

#[test]
fn json_bundle_config_decodes_hex_thresholds() {
    let config = BundleConfig::from_json(BUNDLE_JSON).unwrap();

    assert_eq!(config.filter.max_categories, 5);
    assert_eq!(config.filter.min_none_weight, 0.5);
    assert_eq!(config.filter.min_category_weight, 0.1f32);
    assert_eq!(config.filter.min_normalized_weight_within_top_n, 0.2f32);
    assert_eq!(config.taxonomy.unknown_topic_id, TopicId(-2));
    assert_eq!(config.taxonomy.unknown_topic_name, "Unknown");
    assert_eq!(config.overrides.override_list_input_column, "input");
}

#[test]
fn optional_fields_take_defaults() {
    let config = BundleConfig::from_json(BUNDLE_JSON).unwrap();

    assert_eq!(config.taxonomy.taxonomy_filename, "taxonomy.tsv");
    assert_eq!(config.overrides.override_list_filename, "override_list.tsv");
    assert_eq!(config.model.model_filename, "model.onnx");
    assert_eq!(config.model.labels_filename, "labels.txt");
    assert_eq!(config.model.vocab_filename, "vocab.txt");
    assert_eq!(config.model.max_sequence_length, 128);
    assert_eq!(config.model.output_activation, OutputActivation::None);
    assert!(config.model.use_token_type_ids);
}

#[test]
fn toml_bundle_config_accepts_plain_numbers() {
    let toml = r#"
taxonomy_id_column = "ID"
taxonomy_name_column = "Topic"
unknown_topic_id = 99
unknown_topic_name = "Unknown"
override_list_input_column = "input"
override_list_topics_column = "topics"
meaningless_prefix_regex = "^www\\."
max_categories = 3
min_none_weight = 0.5
min_category_weight = "3DCCCCCD"
min_normalized_weight_within_top_n = 0.25
output_activation = "softmax"
"#;
    let config = BundleConfig::from_toml(toml).unwrap();
    assert_eq!(config.filter.max_categories, 3);
    assert_eq!(config.filter.min_none_weight, 0.5);
    assert_eq!(config.filter.min_normalized_weight_within_top_n, 0.25);
    assert_eq!(config.model.output_activation, OutputActivation::Softmax);
}

#[test]
fn missing_required_field_is_parse_error() {
    let json = BUNDLE_JSON.replace("\"max_categories\": 5,", "");
    let err = BundleConfig::from_json(&json).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("max_categories"));
}

#[test]
fn malformed_hex_threshold_is_rejected() {
    let json = BUNDLE_JSON.replace("\"3F000000\"", "\"3F00\"");
    let err = BundleConfig::from_json(&json).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn threshold_above_one_is_rejected() {
    // 0x40000000 == 2.0
    let json = BUNDLE_JSON.replace("\"3F000000\"", "\"40000000\"");
    let err = BundleConfig::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ThresholdOutOfRange { ref field, .. } if field == "min_none_weight"
    ));
}

#[test]
fn empty_column_name_is_missing_field() {
    let json = BUNDLE_JSON.replace("\"ID\"", "\"\"");
    let err = BundleConfig::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingField { ref field } if field == "taxonomy_id_column"
    ));
}

#[test]
fn json_roundtrip_writes_thresholds_as_hex() {
    let config = BundleConfig::from_json(BUNDLE_JSON).unwrap();
    let json = config.to_json().unwrap();
    assert!(json.contains("\"min_none_weight\": \"3F000000\""));

    let roundtripped = BundleConfig::from_json(&json).unwrap();
    assert_eq!(roundtripped, config);
}
