use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

use crate::EncodeError;

/// One text node of a paragraph, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text that sits directly inside the paragraph.
    Text(String),
    /// Text found under an inline element such as `<b>` or `<a>`.
    Inline(String),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text(text) | Fragment::Inline(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub fragments: Vec<Fragment>,
}

impl Paragraph {
    /// Adds text at the start of the paragraph. Leading paragraph text absorbs
    /// it; a paragraph that opens with an inline element gets a new fragment.
    pub fn prepend_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.fragments.first_mut() {
            Some(Fragment::Text(first)) => first.insert_str(0, &text),
            _ => self.fragments.insert(0, Fragment::Text(text)),
        }
    }

    /// Physical lines of the paragraph: every text node starts a new line and
    /// newlines inside text break it further. Line-break elements carry no
    /// text and so add no line of their own.
    pub fn lines(&self) -> Vec<String> {
        let joined = self
            .fragments
            .iter()
            .map(Fragment::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        joined.split('\n').map(str::to_string).collect()
    }
}

/// Walks rich-text markup and hands back plain text structure.
///
/// Any parser can back this: paragraphs, text and inline elements are the
/// only node kinds the wire layout cares about.
pub trait MarkupWalker: Send + Sync {
    /// Paragraph blocks in document order. Text outside paragraphs is not returned.
    fn paragraphs(&self, markup: &str) -> Result<Vec<Paragraph>, EncodeError>;

    /// All visible text with line breaks as CRLF, layout otherwise untouched.
    fn visible_text(&self, markup: &str) -> Result<String, EncodeError>;
}

/// [`MarkupWalker`] over the `scraper` HTML tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperWalker {
    strict: bool,
}

impl ScraperWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject markup the parser reports errors for instead of repairing it.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    fn parse(&self, markup: &str) -> Result<Html, EncodeError> {
        let fragment = Html::parse_fragment(markup);
        if self.strict {
            if let Some(err) = fragment.errors.first() {
                return Err(EncodeError::MalformedMarkup(err.to_string()));
            }
        }
        Ok(fragment)
    }
}

impl MarkupWalker for ScraperWalker {
    fn paragraphs(&self, markup: &str) -> Result<Vec<Paragraph>, EncodeError> {
        let fragment = self.parse(markup)?;
        let mut collector = ParagraphCollector::default();
        for child in fragment.root_element().children() {
            collector.visit_node(child);
        }
        Ok(collector.paragraphs)
    }

    fn visible_text(&self, markup: &str) -> Result<String, EncodeError> {
        let fragment = self.parse(markup)?;
        let mut text = String::new();
        for child in fragment.root_element().children() {
            collect_text(child, &mut text);
        }
        Ok(text.replace("\r\n", "\n").replace('\n', "\r\n"))
    }
}

#[derive(Default)]
struct ParagraphCollector {
    paragraphs: Vec<Paragraph>,
    current: Option<Paragraph>,
    inline_depth: usize,
}

impl ParagraphCollector {
    fn visit_node(&mut self, node: NodeRef<'_, Node>) {
        match node.value() {
            Node::Text(text) => {
                if let Some(current) = self.current.as_mut() {
                    let text = (**text).to_string();
                    current.fragments.push(if self.inline_depth == 0 {
                        Fragment::Text(text)
                    } else {
                        Fragment::Inline(text)
                    });
                }
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.visit_element(element);
                }
            }
            _ => {
                for child in node.children() {
                    self.visit_node(child);
                }
            }
        }
    }

    fn visit_element(&mut self, element: ElementRef<'_>) {
        let tag = element.value().name().to_ascii_lowercase();
        match tag.as_str() {
            "p" if self.current.is_none() => {
                self.current = Some(Paragraph::default());
                self.visit_children(element);
                if let Some(paragraph) = self.current.take() {
                    self.paragraphs.push(paragraph);
                }
            }
            "script" | "style" | "template" => {}
            _ if self.current.is_some() => {
                self.inline_depth += 1;
                self.visit_children(element);
                self.inline_depth -= 1;
            }
            _ => self.visit_children(element),
        }
    }

    fn visit_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            self.visit_node(child);
        }
    }
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => match element.name().to_ascii_lowercase().as_str() {
            "br" => out.push('\n'),
            "script" | "style" | "template" => {}
            _ => {
                for child in node.children() {
                    collect_text(child, out);
                }
            }
        },
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}
