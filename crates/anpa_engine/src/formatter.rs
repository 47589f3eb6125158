use std::sync::Arc;

use anpa_core::{
    compose_headline, fit_headline, header_keyword, priority_code, Article, Category, Subscriber,
};
use bytes::{BufMut, Bytes, BytesMut};
use wire_logging::{wire_debug, wire_warn};

use crate::ascii::{to_ascii, AsciiPolicy};
use crate::clock::{Clock, SystemClock};
use crate::convert::WireTextConverter;
use crate::frame::{self, HeaderFields, CRLF, STX};
use crate::locator::Locator;
use crate::markup::{MarkupWalker, ScraperWalker};
use crate::sequence::SequenceProvider;
use crate::{FormatErrorKind, FormatterError, FormatterSettings};

/// Format type name publishing channels use to select this formatter.
pub const ANPA_FORMAT_TYPE: &str = "AAP ANPA";

/// One complete wire message and the story number it was sent under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    pub sequence: u32,
    pub payload: Bytes,
}

/// Encodes articles into ANPA messages, one message per article category.
pub struct AnpaFormatter {
    sequences: Arc<dyn SequenceProvider>,
    locator: Arc<dyn Locator>,
    converter: WireTextConverter,
    clock: Arc<dyn Clock>,
    settings: FormatterSettings,
}

/// Category-independent parts of a message, computed once per call.
struct Prepared {
    priority: char,
    keyword: String,
    body: Vec<u8>,
}

impl AnpaFormatter {
    pub fn new(sequences: Arc<dyn SequenceProvider>, locator: Arc<dyn Locator>) -> Self {
        Self {
            sequences,
            locator,
            converter: WireTextConverter::default(),
            clock: Arc::new(SystemClock),
            settings: FormatterSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: FormatterSettings) -> Self {
        let walker = if settings.strict_markup {
            ScraperWalker::strict()
        } else {
            ScraperWalker::new()
        };
        self.converter = WireTextConverter::new(Arc::new(walker));
        self.settings = settings;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the markup backend used for body text.
    pub fn with_walker(mut self, walker: Arc<dyn MarkupWalker>) -> Self {
        self.converter = WireTextConverter::new(walker);
        self
    }

    pub fn settings(&self) -> &FormatterSettings {
        &self.settings
    }

    pub fn can_format(&self, format_type: &str, article: &Article) -> bool {
        format_type == self.settings.format_type && article.kind.is_textual()
    }

    /// Encode `article` once per category for `subscriber`.
    ///
    /// Either every category yields a message or the whole call fails; no
    /// partial list is returned.
    pub async fn format(
        &self,
        article: &Article,
        subscriber: &Subscriber,
        selector_codes: Option<&[String]>,
    ) -> Result<Vec<EncodedMessage>, FormatterError> {
        self.format_all(article, subscriber, selector_codes.unwrap_or_default())
            .await
            .map_err(|kind| {
                wire_warn!("ANPA formatting failed for subscriber {}: {}", subscriber, kind);
                FormatterError {
                    subscriber: subscriber.clone(),
                    kind,
                }
            })
    }

    async fn format_all(
        &self,
        article: &Article,
        subscriber: &Subscriber,
        selector_codes: &[String],
    ) -> Result<Vec<EncodedMessage>, FormatErrorKind> {
        if !article.kind.is_textual() {
            return Err(FormatErrorKind::CapabilityMismatch(article.kind));
        }
        let prepared = Prepared {
            priority: priority_code(article.priority)?,
            keyword: to_ascii(&header_keyword(article), AsciiPolicy::Ignore),
            body: self.converter.body_to_wire(article)?,
        };

        let mut messages = Vec::with_capacity(article.categories.len());
        for category in &article.categories {
            let message = self
                .format_category(article, subscriber, category, &prepared, selector_codes)
                .await?;
            messages.push(message);
        }
        Ok(messages)
    }

    async fn format_category(
        &self,
        article: &Article,
        subscriber: &Subscriber,
        category: &Category,
        prepared: &Prepared,
        selector_codes: &[String],
    ) -> Result<EncodedMessage, FormatErrorKind> {
        let sequence = self.sequences.next_sequence(subscriber).await?;

        let header = frame::header_bytes(
            &HeaderFields {
                service_level: &article.service_level,
                sequence,
                priority: prepared.priority,
                category: &category.qcode,
                preserved: article.is_preserved(),
                keyword: &prepared.keyword,
                filed: article.updated,
                word_count: article.word_count,
            },
            self.settings.overflow,
        )?;

        let mut buffer = BytesMut::new();
        buffer.put_slice(&frame::selector_block(selector_codes)?);
        buffer.put_slice(&header);
        buffer.put_u8(STX);
        buffer.put_slice(&self.headline_line(article, &category.qcode).await?);
        buffer.put_slice(&frame::opening_line(article));
        buffer.put_slice(&frame::annotation_bytes(article));
        buffer.put_slice(&prepared.body);
        buffer.put_slice(CRLF);
        buffer.put_slice(&frame::trailer_bytes(article, self.clock.now())?);

        wire_debug!(
            "encoded category {} for subscriber {} as story {:04} ({} bytes)",
            category.qcode,
            subscriber,
            sequence,
            buffer.len()
        );
        Ok(EncodedMessage {
            sequence,
            payload: buffer.freeze(),
        })
    }

    async fn headline_line(
        &self,
        article: &Article,
        category: &str,
    ) -> Result<Vec<u8>, FormatErrorKind> {
        let locator = self
            .locator
            .locate(article, &category.to_uppercase())
            .await?;
        let candidate = compose_headline(locator.as_deref(), &article.headline);
        let fitted = fit_headline(&candidate, article.within_story_sequence());
        Ok(frame::headline_bytes(&fitted))
    }
}
