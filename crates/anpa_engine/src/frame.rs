//! Byte builders for each section of an ANPA message.
//!
//! Every builder returns its own bytes; the formatter concatenates them in
//! wire order: selector block, header, STX, headline, opening line,
//! annotations, body, trailer.

use anpa_core::{legal_slugline, Article, FittedHeadline};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::ascii::{encode_ascii, encode_strict, AsciiPolicy};
use crate::{EncodeError, OverflowPolicy};

pub const ENQ: u8 = 0x05;
pub const SYN: u8 = 0x16;
pub const SOH: u8 = 0x01;
pub const LF: u8 = 0x0A;
pub const DC1: u8 = 0x11;
pub const DC2: u8 = 0x12;
pub const DC3: u8 = 0x13;
pub const STX: u8 = 0x02;
pub const ETX: u8 = 0x03;
pub const EOT: u8 = 0x04;
pub const CRLF: &[u8] = b"\r\n";
const SPACE: u8 = b' ';

/// Trailer token for a story with further takes to follow.
pub const MORE_COMING: &str = "MORE";

const EMBARGO_LABEL: &str = "Embargo Content. Timestamp: ";
const NUMERIC_WIDTH: usize = 4;
const NUMERIC_LIMIT: u64 = 10_000;
const END_PADDING: usize = 8;

/// Render `value` zero-padded to four digits.
pub fn fixed_width(
    value: u64,
    field: &'static str,
    overflow: OverflowPolicy,
) -> Result<String, EncodeError> {
    let value = match overflow {
        OverflowPolicy::Reject if value >= NUMERIC_LIMIT => {
            return Err(EncodeError::Overflow {
                field,
                value,
                width: NUMERIC_WIDTH,
            })
        }
        OverflowPolicy::Reject => value,
        OverflowPolicy::Wrap => value % NUMERIC_LIMIT,
    };
    Ok(format!("{value:0width$}", width = NUMERIC_WIDTH))
}

/// `ENQ`, the space-joined codes, CRLF. Empty when there are no codes.
pub fn selector_block(codes: &[String]) -> Result<Vec<u8>, EncodeError> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = vec![ENQ];
    out.extend(encode_strict(&codes.join(" "), "selector_codes")?);
    out.extend_from_slice(CRLF);
    Ok(out)
}

/// Values that make up the message header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    pub service_level: &'a str,
    pub sequence: u32,
    pub priority: char,
    pub category: &'a str,
    pub preserved: bool,
    pub keyword: &'a str,
    pub filed: DateTime<Utc>,
    pub word_count: u32,
}

pub fn header_bytes(
    fields: &HeaderFields<'_>,
    overflow: OverflowPolicy,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = vec![SYN, SYN, SOH];
    out.extend(encode_strict(
        &fields.service_level.to_lowercase(),
        "service_level",
    )?);
    out.extend(fixed_width(fields.sequence.into(), "sequence", overflow)?.into_bytes());
    out.push(LF);
    out.extend(encode_strict(&fields.priority.to_string(), "priority")?);
    out.push(SPACE);
    out.extend(encode_strict(fields.category, "category")?);
    out.push(DC3);
    out.push(if fields.preserved { DC2 } else { DC1 });
    out.push(SPACE);
    out.extend(encode_ascii(fields.keyword, AsciiPolicy::Ignore));
    out.push(SPACE);
    // version and reference fields are always blank
    out.push(SPACE);
    out.push(SPACE);
    out.extend(fields.filed.format("%m-%d").to_string().into_bytes());
    out.push(SPACE);
    out.extend(fixed_width(fields.word_count.into(), "word_count", overflow)?.into_bytes());
    out.extend_from_slice(CRLF);
    Ok(out)
}

pub fn headline_bytes(headline: &FittedHeadline) -> Vec<u8> {
    let mut out = match headline {
        FittedHeadline::Fits(text) => encode_ascii(text, AsciiPolicy::Ignore),
        FittedHeadline::Truncated(text) => encode_ascii(text, AsciiPolicy::Replace),
    };
    out.extend_from_slice(CRLF);
    out
}

/// Legal slugline and take key, the first line under the headline.
pub fn opening_line(article: &Article) -> Vec<u8> {
    let mut out = encode_ascii(&legal_slugline(article, true), AsciiPolicy::Ignore);
    let take_key = encode_ascii(
        article.take_key.as_deref().unwrap_or_default(),
        AsciiPolicy::Ignore,
    );
    if !take_key.is_empty() {
        out.push(SPACE);
        out.extend(take_key);
    }
    out.extend_from_slice(CRLF);
    out
}

/// ISO-8601 with microseconds only when the instant has a fractional part.
fn embargo_timestamp(embargo: &DateTime<Utc>) -> String {
    let precision = if embargo.timestamp_subsec_nanos() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    embargo.to_rfc3339_opts(precision, false)
}

/// Embargo, editorial note and byline lines, each only when present.
pub fn annotation_bytes(article: &Article) -> Vec<u8> {
    let mut out = Vec::new();
    if let Some(embargo) = article.embargo {
        let line = format!("{EMBARGO_LABEL}{}\r\n", embargo_timestamp(&embargo));
        out.extend(encode_ascii(&line, AsciiPolicy::Replace));
    }
    if let Some(ednote) = article.ednote_text() {
        out.extend(encode_ascii(&format!("{ednote}\r\n"), AsciiPolicy::Replace));
    }
    if let Some(byline) = &article.byline {
        out.extend(encode_ascii(byline, AsciiPolicy::Ignore));
        out.extend_from_slice(CRLF);
    }
    out
}

/// Source or `MORE`, sign-off, ETX, transmission time, EOT and end padding.
pub fn trailer_bytes(article: &Article, sent: NaiveDateTime) -> Result<Vec<u8>, EncodeError> {
    let mut out = if article.more_coming {
        MORE_COMING.as_bytes().to_vec()
    } else {
        encode_strict(&article.source, "source")?
    };
    if let Some(sign_off) = article.sign_off.as_deref().filter(|s| !s.is_empty()) {
        out.push(SPACE);
        out.extend(encode_strict(sign_off, "sign_off")?);
    }
    out.extend_from_slice(CRLF);
    out.push(ETX);
    out.extend(sent.format("%d-%m-%y %H-%M-%S").to_string().into_bytes());
    out.push(EOT);
    for _ in 0..END_PADDING {
        out.extend_from_slice(CRLF);
    }
    Ok(out)
}
