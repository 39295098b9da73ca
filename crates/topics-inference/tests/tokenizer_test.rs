use proptest::prelude::*;
use test_fixtures::fixture_path;
use topics_core::errors::InferenceError;
use topics_inference::{LabelMap, WordPieceTokenizer};
use topics_core::models::CategoryLabel;

// Fixture vocab ids: [PAD]=0 [UNK]=1 [CLS]=2 [SEP]=3 foot=4 ##ball=5 news=6
// bank=7 ing=8 ##ing=9 banking=10 travel=11
fn tokenizer(max_len: usize) -> WordPieceTokenizer {
    WordPieceTokenizer::load(&fixture_path("bundle/vocab.txt"), max_len).unwrap()
}

#[test]
fn frames_with_cls_and_sep() {
    assert_eq!(tokenizer(32).encode(""), vec![2, 3]);
}

#[test]
fn splits_into_continuation_pieces() {
    assert_eq!(tokenizer(32).encode("football news"), vec![2, 4, 5, 6, 3]);
}

#[test]
fn prefers_longest_match() {
    assert_eq!(tokenizer(32).encode("banking"), vec![2, 10, 3]);
}

#[test]
fn unsegmentable_word_is_unk() {
    assert_eq!(tokenizer(32).encode("bankxyz travel!"), vec![2, 1, 11, 1, 3]);
}

#[test]
fn input_is_lowercased() {
    assert_eq!(tokenizer(32).encode("TRAVEL"), vec![2, 11, 3]);
}

#[test]
fn truncates_to_max_len() {
    let ids = tokenizer(4).encode("football news travel");
    assert_eq!(ids, vec![2, 4, 5, 3]);
}

#[test]
fn vocab_without_special_tokens_is_rejected() {
    let err = WordPieceTokenizer::from_vocab_lines(["[PAD]", "hello"], 16).unwrap_err();
    assert!(matches!(err, InferenceError::TokenizerLoadFailed { .. }));
}

#[test]
fn missing_vocab_file_is_tokenizer_error() {
    let err = WordPieceTokenizer::load(std::path::Path::new("/nonexistent/vocab.txt"), 16)
        .unwrap_err();
    assert!(matches!(
        err,
        InferenceError::TokenizerLoadFailed { ref path, .. } if path.contains("vocab.txt")
    ));
}

#[test]
fn labels_file_maps_indices_to_ids() {
    let labels = LabelMap::load(&fixture_path("bundle/labels.txt")).unwrap();
    assert_eq!(labels.len(), 5);
    assert_eq!(labels.get(0), Some(&CategoryLabel::Id(1)));
    assert_eq!(labels.get(4), Some(&CategoryLabel::Id(99)));
    assert_eq!(labels.get(5), None);
}

#[test]
fn textual_labels_are_kept_as_names() {
    let labels = LabelMap::from_lines(["12", "", "sports"]);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.get(1), Some(&CategoryLabel::Name("sports".into())));
}

proptest! {
    #[test]
    fn encoding_respects_length_and_framing(text in "\\PC{0,80}", max_len in 2usize..16) {
        let ids = tokenizer(max_len).encode(&text);
        prop_assert!(ids.len() <= max_len);
        prop_assert_eq!(ids.first(), Some(&2));
        prop_assert_eq!(ids.last(), Some(&3));
    }
}
