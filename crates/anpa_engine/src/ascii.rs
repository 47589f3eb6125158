use crate::EncodeError;

const NBSP: char = '\u{A0}';
const PLACEHOLDER: char = '?';

/// What to do with a character that has no ASCII encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsciiPolicy {
    /// Drop it.
    Ignore,
    /// Substitute one `?` for it.
    Replace,
}

/// Reduce `text` to ASCII. Non-breaking spaces always become plain spaces.
pub fn to_ascii(text: &str, policy: AsciiPolicy) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let ch = if ch == NBSP { ' ' } else { ch };
        if ch.is_ascii() {
            out.push(ch);
        } else if policy == AsciiPolicy::Replace {
            out.push(PLACEHOLDER);
        }
    }
    out
}

pub fn encode_ascii(text: &str, policy: AsciiPolicy) -> Vec<u8> {
    to_ascii(text, policy).into_bytes()
}

/// Encode a field that must already be ASCII; anything else is an error.
pub fn encode_strict(text: &str, field: &'static str) -> Result<Vec<u8>, EncodeError> {
    let normalized = text.replace(NBSP, " ");
    if normalized.is_ascii() {
        Ok(normalized.into_bytes())
    } else {
        Err(EncodeError::NonAscii { field })
    }
}
