use postsmith_core::{
    GenerationRequest, ModelChoice, Platform, PostRecord, Tone, MAX_POST_COUNT,
};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn builder_applies_defaults() {
    let request = GenerationRequest::builder()
        .topic("coffee")
        .build()
        .unwrap();

    assert_eq!(request.topic(), "coffee");
    assert_eq!(*request.platform(), Platform::Instagram);
    assert_eq!(*request.tone(), Tone::Friendly);
    assert_eq!(*request.count(), 3);
    assert_eq!(*request.model_choice(), ModelChoice::Gpt35Turbo);
    assert!(*request.strict_mode());
    assert_eq!(*request.temperature(), 0.8);
}

#[test]
fn builder_rejects_blank_topic() {
    assert!(GenerationRequest::builder().topic("   ").build().is_err());
}

#[test]
fn builder_requires_topic() {
    assert!(GenerationRequest::builder().count(2).build().is_err());
}

#[test]
fn builder_rejects_out_of_range_count() {
    assert!(GenerationRequest::builder().topic("a").count(0).build().is_err());
    assert!(
        GenerationRequest::builder()
            .topic("a")
            .count(MAX_POST_COUNT + 1)
            .build()
            .is_err()
    );
    assert!(
        GenerationRequest::builder()
            .topic("a")
            .count(MAX_POST_COUNT)
            .build()
            .is_ok()
    );
}

#[test]
fn builder_rejects_out_of_range_temperature() {
    assert!(
        GenerationRequest::builder()
            .topic("a")
            .temperature(1.5)
            .build()
            .is_err()
    );
    assert!(
        GenerationRequest::builder()
            .topic("a")
            .temperature(0.0)
            .build()
            .is_ok()
    );
}

#[test]
fn platform_parsing_accepts_display_names_and_aliases() {
    for platform in Platform::iter() {
        assert_eq!(Platform::from_str(&platform.to_string()).unwrap(), platform);
    }
    assert_eq!(Platform::from_str("twitter").unwrap(), Platform::TwitterX);
    assert_eq!(Platform::from_str("linkedin").unwrap(), Platform::LinkedIn);
    assert!(Platform::from_str("myspace").is_err());
}

#[test]
fn tone_parsing_is_case_insensitive() {
    assert_eq!(Tone::from_str("witty").unwrap(), Tone::Witty);
    assert_eq!(Tone::from_str("INFORMATIVE").unwrap(), Tone::Informative);
}

#[test]
fn model_choices_match_service_identifiers() {
    let ids: Vec<String> = ModelChoice::iter().map(|m| m.to_string()).collect();
    assert_eq!(ids, ["gpt-3.5-turbo", "gpt-4o-mini", "gpt-4", "offline"]);
    assert_eq!(ModelChoice::Gpt4.model_id(), Some("gpt-4"));
}

#[test]
fn post_record_serializes_with_all_fields() {
    let post = PostRecord::new("idea", "caption", ["#one"]);
    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"idea": "idea", "caption": "caption", "hashtags": ["#one"]})
    );
}
