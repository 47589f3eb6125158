use anpa_core::{Article, BodyFormat, Category, ContentKind, Subscriber};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

#[test]
fn full_record_deserializes_from_pipeline_json() {
    let json = r#"{
        "type": "text",
        "anpa_category": [{"qcode": "a", "name": "Australian General News"}, {"qcode": "i"}],
        "service_level": "A",
        "priority": 2,
        "word_count": 350,
        "headline": "Storm hits coast",
        "slugline": "storm",
        "flags": {"marked_for_legal": true},
        "anpa_take_key": "take 2",
        "embargo": "2016-04-21T06:00:00Z",
        "ednote": "Corrects spelling",
        "byline": "By Jane Citizen",
        "dateline": {"text": "SYDNEY, April 20 AAP -"},
        "body_html": "<p>Rain fell.</p>",
        "body_footer": "<p>Footer</p>",
        "more_coming": true,
        "source": "AAP",
        "sign_off": "jc/mw",
        "sequence": 4,
        "format": "preserved",
        "_updated": "2016-04-20T10:30:00Z",
        "place": [{"qcode": "NSW"}],
        "subject": [{"qcode": "15008000", "name": "cricket"}]
    }"#;

    let article: Article = serde_json::from_str(json).unwrap();

    assert_eq!(article.kind, ContentKind::Text);
    assert_eq!(
        article.categories,
        vec![
            Category {
                qcode: "a".to_string(),
                name: Some("Australian General News".to_string()),
            },
            Category::new("i"),
        ]
    );
    assert_eq!(article.priority, 2);
    assert_eq!(article.word_count, 350);
    assert!(article.flags.marked_for_legal);
    assert_eq!(article.take_key.as_deref(), Some("take 2"));
    assert_eq!(
        article.embargo,
        Some(Utc.with_ymd_and_hms(2016, 4, 21, 6, 0, 0).unwrap())
    );
    assert_eq!(article.dateline_text(), Some("SYDNEY, April 20 AAP -"));
    assert_eq!(article.format, BodyFormat::Preserved);
    assert!(article.is_preserved());
    assert_eq!(article.within_story_sequence(), Some(4));
    assert_eq!(article.places[0].qcode, "NSW");
    assert_eq!(article.subjects[0].qcode, "15008000");
}

#[test]
fn minimal_record_takes_defaults() {
    let json = r#"{"type": "preformatted", "_updated": "2016-04-20T10:30:00Z"}"#;
    let article: Article = serde_json::from_str(json).unwrap();

    assert_eq!(article.kind, ContentKind::Preformatted);
    assert_eq!(article.service_level, "a");
    assert_eq!(article.priority, 3);
    assert_eq!(article.word_count, 0);
    assert_eq!(article.format, BodyFormat::Html);
    assert!(article.categories.is_empty());
    assert!(article.byline.is_none());
    assert!(!article.more_coming);
}

#[test]
fn unknown_content_kind_is_not_textual() {
    let json = r#"{"type": "liveblog", "_updated": "2016-04-20T10:30:00Z"}"#;
    let article: Article = serde_json::from_str(json).unwrap();

    assert_eq!(article.kind, ContentKind::Other);
    assert!(!article.kind.is_textual());
    assert!(ContentKind::Text.is_textual());
    assert!(!ContentKind::Picture.is_textual());
}

#[test]
fn zero_sequence_and_empty_annotations_count_as_unset() {
    let json = r#"{
        "type": "text",
        "_updated": "2016-04-20T10:30:00Z",
        "sequence": 0,
        "ednote": "",
        "dateline": {"text": ""},
        "body_footer": ""
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();

    assert_eq!(article.within_story_sequence(), None);
    assert_eq!(article.ednote_text(), None);
    assert_eq!(article.dateline_text(), None);
    assert_eq!(article.footer_html(), None);
}

#[test]
fn subscriber_display_includes_name_when_known() {
    assert_eq!(Subscriber::new("sub-1").to_string(), "sub-1");
    assert_eq!(
        Subscriber::new("sub-1").with_name("Wire Desk").to_string(),
        "sub-1 (Wire Desk)"
    );
}
