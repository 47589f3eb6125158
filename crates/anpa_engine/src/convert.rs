use std::sync::Arc;

use anpa_core::Article;

use crate::ascii::{encode_ascii, to_ascii, AsciiPolicy};
use crate::markup::{MarkupWalker, Paragraph, ScraperWalker};
use crate::EncodeError;

const PARAGRAPH_INDENT: &str = "   ";
const LINE_END: &str = "\r\n";

/// Turns rich-text article content into wire body text.
#[derive(Clone)]
pub struct WireTextConverter {
    walker: Arc<dyn MarkupWalker>,
}

impl Default for WireTextConverter {
    fn default() -> Self {
        Self::new(Arc::new(ScraperWalker::new()))
    }
}

impl WireTextConverter {
    pub fn new(walker: Arc<dyn MarkupWalker>) -> Self {
        Self { walker }
    }

    /// Each paragraph opens with CRLF and a three-space indent; every line ends in CRLF.
    pub fn fragment_to_wire(&self, html: &str) -> Result<Vec<u8>, EncodeError> {
        let paragraphs = self.walker.paragraphs(html)?;
        Ok(paragraphs_to_wire(&paragraphs))
    }

    /// Body text for the article, footer included, in the layout its format asks for.
    pub fn body_to_wire(&self, article: &Article) -> Result<Vec<u8>, EncodeError> {
        if article.is_preserved() {
            return self.preserved_body(article);
        }

        let mut paragraphs = self.walker.paragraphs(&article.body)?;
        if let (Some(dateline), Some(first)) = (article.dateline_text(), paragraphs.first_mut()) {
            first.prepend_text(format!("{} ", to_ascii(dateline, AsciiPolicy::Ignore)));
        }
        let mut wire = paragraphs_to_wire(&paragraphs);
        if let Some(footer) = article.footer_html() {
            wire.extend(self.fragment_to_wire(footer)?);
        }
        Ok(wire)
    }

    fn preserved_body(&self, article: &Article) -> Result<Vec<u8>, EncodeError> {
        let mut text = self.walker.visible_text(&article.body)?;
        if let Some(footer) = article.footer_html() {
            text.push_str(LINE_END);
            text.push_str(&self.walker.visible_text(footer)?);
        }
        Ok(encode_ascii(&text, AsciiPolicy::Replace))
    }
}

fn paragraphs_to_wire(paragraphs: &[Paragraph]) -> Vec<u8> {
    let mut text = String::new();
    for paragraph in paragraphs {
        text.push_str(LINE_END);
        text.push_str(PARAGRAPH_INDENT);
        for line in paragraph.lines() {
            text.push_str(&line);
            text.push_str(LINE_END);
        }
    }
    encode_ascii(&text, AsciiPolicy::Replace)
}
