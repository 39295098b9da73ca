use proptest::prelude::*;
use test_fixtures::SAMPLE_PREFIX_REGEX;
use topics_classifier::{extract_domain, InputNormalizer};
use topics_core::errors::ConfigError;

fn normalizer() -> InputNormalizer {
    InputNormalizer::new(SAMPLE_PREFIX_REGEX).unwrap()
}

#[test]
fn strips_prefix_and_replaces_separators() {
    let n = normalizer();
    assert_eq!(n.normalize("www.Example-Site.co_uk"), "example site co uk");
    assert_eq!(n.normalize("m.news+today.com"), "news today com");
    assert_eq!(n.normalize("example"), "example");
}

#[test]
fn urls_are_reduced_to_host_first() {
    let n = normalizer();
    assert_eq!(
        n.normalize("https://www.sub.example.com:8443/path?q=1"),
        "sub example com"
    );
    assert_eq!(n.normalize("example.com/a/b"), "example com");
}

#[test]
fn only_first_prefix_match_is_removed() {
    let n = InputNormalizer::new(r"www\.").unwrap();
    assert_eq!(n.normalize("www.www.example.com"), "www example com");
}

#[test]
fn prefix_is_only_stripped_at_start() {
    assert_eq!(normalizer().normalize("shop.m.example"), "shop m example");
}

#[test]
fn degenerate_inputs_normalize_without_error() {
    let n = normalizer();
    assert_eq!(n.normalize(""), "");
    assert_eq!(n.normalize("/"), "");
    assert_eq!(n.normalize("https://"), "");
    assert_eq!(n.normalize("..."), "   ");
}

#[test]
fn extract_domain_example() {
    assert_eq!(
        extract_domain("https://sub.example.com:8443/path?q=1"),
        "sub.example.com"
    );
}

#[test]
fn invalid_prefix_regex_is_config_error() {
    let err = InputNormalizer::new("(www").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRegex { ref pattern, .. } if pattern == "(www"));
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in "[A-Za-z0-9./:_+-]{0,40}") {
        let n = normalizer();
        let once = n.normalize(&raw);
        let twice = n.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_output_has_no_separators_or_uppercase(
        raw in "[A-Za-z\u{c0}-\u{ff}0-9 ./:_+-]{0,60}"
    ) {
        let out = normalizer().normalize(&raw);
        prop_assert!(!out.chars().any(|c| "-_.+".contains(c)));
        prop_assert_eq!(out.to_lowercase(), out.clone());
    }
}
