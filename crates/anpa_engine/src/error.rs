use anpa_core::{ContentKind, InvalidPriority, Subscriber};
use thiserror::Error;

/// Text or numbers that cannot be laid out in the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("field `{field}` contains characters outside ASCII")]
    NonAscii { field: &'static str },
    #[error("field `{field}` value {value} does not fit {width} digits")]
    Overflow {
        field: &'static str,
        value: u64,
        width: usize,
    },
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),
}

/// Failure reported by a collaborator the formatter calls out to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    #[error("sequence provider failed: {0}")]
    Sequence(String),
    #[error("locator lookup failed: {0}")]
    Locator(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error(transparent)]
    InvalidPriority(#[from] InvalidPriority),
    #[error("content kind {0:?} cannot be formatted as ANPA")]
    CapabilityMismatch(ContentKind),
    #[error("encoding failed: {0}")]
    EncodingFailure(#[from] EncodeError),
    #[error("dependency failed: {0}")]
    DependencyFailure(#[from] DependencyError),
}

/// The single error surfaced by [`crate::AnpaFormatter::format`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ANPA formatting failed for subscriber {subscriber}: {kind}")]
pub struct FormatterError {
    pub subscriber: Subscriber,
    #[source]
    pub kind: FormatErrorKind,
}
