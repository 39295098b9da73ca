use proptest::prelude::*;
use topics_core::errors::ConfigError;
use topics_core::models::*;

#[test]
fn topic_serializes_as_id_and_name() {
    let topic = Topic::new(1, "Sports");
    let json = serde_json::to_string(&topic).unwrap();
    assert_eq!(json, r#"{"id":1,"name":"Sports"}"#);
}

#[test]
fn category_label_deserializes_from_string_or_number() {
    let numeric: RawCategory = serde_json::from_str(r#"{"label": 12, "score": 0.5}"#).unwrap();
    let textual: RawCategory = serde_json::from_str(r#"{"label": "12", "score": 0.5}"#).unwrap();
    assert_eq!(numeric.label, CategoryLabel::Id(12));
    assert_eq!(textual.label, CategoryLabel::Name("12".into()));
}

#[test]
fn label_to_topic_id() {
    assert_eq!(TopicId::try_from(&CategoryLabel::Id(7)).unwrap(), TopicId(7));
    assert_eq!(
        TopicId::try_from(&CategoryLabel::Name(" -2 ".into())).unwrap(),
        TopicId(-2)
    );
}

#[test]
fn non_numeric_label_is_config_error() {
    let err = TopicId::try_from(&CategoryLabel::Name("sports".into())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidCategoryLabel { ref label } if label == "sports"));
}

#[test]
fn out_of_range_numeric_label_is_config_error() {
    let err = TopicId::try_from(&CategoryLabel::Id(i64::MAX)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidCategoryLabel { .. }));
}

proptest! {
    #[test]
    fn textual_and_numeric_labels_agree(id in any::<i32>()) {
        let from_num = TopicId::try_from(&CategoryLabel::Id(i64::from(id))).unwrap();
        let from_str = TopicId::try_from(&CategoryLabel::Name(id.to_string())).unwrap();
        prop_assert_eq!(from_num, from_str);
    }
}
