use anpa_core::{Article, ContentKind, FittedHeadline};
use anpa_engine::{
    annotation_bytes, fixed_width, header_bytes, headline_bytes, opening_line, selector_block,
    trailer_bytes, EncodeError, HeaderFields, OverflowPolicy,
};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use pretty_assertions::assert_eq;

fn article() -> Article {
    let mut article = Article::new(
        ContentKind::Text,
        Utc.with_ymd_and_hms(2016, 4, 20, 10, 30, 0).unwrap(),
    );
    article.slugline = "storm".to_string();
    article.source = "AAP".to_string();
    article
}

fn sent_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2016, 4, 20)
        .unwrap()
        .and_hms_opt(20, 31, 5)
        .unwrap()
}

fn header_fields(preserved: bool) -> HeaderFields<'static> {
    HeaderFields {
        service_level: "A",
        sequence: 42,
        priority: 'u',
        category: "a",
        preserved,
        keyword: "bc-storm",
        filed: Utc.with_ymd_and_hms(2016, 4, 20, 10, 30, 0).unwrap(),
        word_count: 350,
    }
}

#[test]
fn fixed_width_pads_to_four_digits() {
    assert_eq!(fixed_width(7, "sequence", OverflowPolicy::Reject).unwrap(), "0007");
    assert_eq!(fixed_width(9999, "sequence", OverflowPolicy::Reject).unwrap(), "9999");
    assert_eq!(fixed_width(0, "word_count", OverflowPolicy::Reject).unwrap(), "0000");
}

#[test]
fn fixed_width_overflow_follows_policy() {
    assert_eq!(
        fixed_width(10_000, "word_count", OverflowPolicy::Reject),
        Err(EncodeError::Overflow {
            field: "word_count",
            value: 10_000,
            width: 4,
        })
    );
    assert_eq!(fixed_width(12_345, "sequence", OverflowPolicy::Wrap).unwrap(), "2345");
}

#[test]
fn header_row_has_fields_in_wire_order() {
    let header = header_bytes(&header_fields(false), OverflowPolicy::Reject).unwrap();
    assert_eq!(
        header,
        b"\x16\x16\x01a0042\nu a\x13\x11 bc-storm   04-20 0350\r\n".to_vec()
    );
}

#[test]
fn preserved_format_uses_dc2_identifier() {
    let header = header_bytes(&header_fields(true), OverflowPolicy::Reject).unwrap();
    let marker = header.iter().position(|b| *b == 0x13).unwrap();
    assert_eq!(header[marker + 1], 0x12);
}

#[test]
fn non_ascii_category_fails_header() {
    let mut fields = header_fields(false);
    fields.category = "ä";
    assert_eq!(
        header_bytes(&fields, OverflowPolicy::Reject),
        Err(EncodeError::NonAscii { field: "category" })
    );
}

#[test]
fn selector_block_is_only_emitted_with_codes() {
    assert!(selector_block(&[]).unwrap().is_empty());
    let codes = vec!["AAA".to_string(), "BBB".to_string()];
    assert_eq!(selector_block(&codes).unwrap(), b"\x05AAA BBB\r\n".to_vec());
}

#[test]
fn headline_policy_depends_on_truncation() {
    assert_eq!(
        headline_bytes(&FittedHeadline::Fits("Caf\u{e9} opens".to_string())),
        b"Caf opens\r\n".to_vec()
    );
    assert_eq!(
        headline_bytes(&FittedHeadline::Truncated("Caf\u{e9} opens=2".to_string())),
        b"Caf? opens=2\r\n".to_vec()
    );
}

#[test]
fn opening_line_carries_take_key_when_present() {
    let mut article = article();
    assert_eq!(opening_line(&article), b"storm\r\n".to_vec());

    article.take_key = Some("take 2".to_string());
    assert_eq!(opening_line(&article), b"storm take 2\r\n".to_vec());

    article.take_key = Some("\u{2014}".to_string());
    assert_eq!(opening_line(&article), b"storm\r\n".to_vec());
}

#[test]
fn opening_line_uses_legal_slugline() {
    let mut article = article();
    article.flags.marked_for_legal = true;
    assert_eq!(opening_line(&article), b"Legal: storm\r\n".to_vec());
}

#[test]
fn annotations_appear_in_order_and_only_when_set() {
    let mut article = article();
    assert!(annotation_bytes(&article).is_empty());

    article.embargo = Some(Utc.with_ymd_and_hms(2016, 4, 21, 6, 0, 0).unwrap());
    article.ednote = Some("Corrects caf\u{e9} name".to_string());
    article.byline = Some("By Jos\u{e9} Citizen".to_string());
    assert_eq!(
        String::from_utf8(annotation_bytes(&article)).unwrap(),
        "Embargo Content. Timestamp: 2016-04-21T06:00:00+00:00\r\n\
         Corrects caf? name\r\n\
         By Jos Citizen\r\n"
    );
}

#[test]
fn embargo_keeps_fractional_seconds_as_microseconds() {
    let mut article = article();
    article.embargo = Utc
        .with_ymd_and_hms(2016, 4, 21, 6, 0, 0)
        .unwrap()
        .with_nanosecond(250_000_000);
    assert_eq!(
        annotation_bytes(&article),
        b"Embargo Content. Timestamp: 2016-04-21T06:00:00.250000+00:00\r\n".to_vec()
    );
}

#[test]
fn empty_byline_still_emits_a_line() {
    let mut article = article();
    article.byline = Some(String::new());
    article.ednote = Some(String::new());
    assert_eq!(annotation_bytes(&article), b"\r\n".to_vec());
}

#[test]
fn trailer_uses_source_and_sign_off() {
    let mut article = article();
    article.sign_off = Some("jc/mw".to_string());
    let trailer = trailer_bytes(&article, sent_at()).unwrap();
    let mut expected = b"AAP jc/mw\r\n\x0320-04-16 20-31-05\x04".to_vec();
    expected.extend(b"\r\n".repeat(8));
    assert_eq!(trailer, expected);
}

#[test]
fn trailer_uses_more_token_when_more_coming() {
    let mut article = article();
    article.more_coming = true;
    let trailer = trailer_bytes(&article, sent_at()).unwrap();
    assert!(trailer.starts_with(b"MORE\r\n\x03"));
}

#[test]
fn trailer_without_sign_off_is_source_only() {
    let trailer = trailer_bytes(&article(), sent_at()).unwrap();
    assert!(trailer.starts_with(b"AAP\r\n\x03"));
}
