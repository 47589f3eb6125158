use crate::Article;

/// Width of the keyword field in the message header.
pub const KEYWORD_MAX: usize = 24;

const LEGAL_PREFIX: &str = "Legal: ";

/// Slugline as it must appear on the wire: prefixed with `Legal: ` when the
/// article is flagged for legal review. With `truncate`, a legal slugline is
/// cut to the keyword width.
pub fn legal_slugline(article: &Article, truncate: bool) -> String {
    if !article.flags.marked_for_legal {
        return article.slugline.clone();
    }
    let legal = format!("{LEGAL_PREFIX}{}", article.slugline);
    if truncate {
        take_chars(&legal, KEYWORD_MAX)
    } else {
        legal
    }
}

/// Keyword for the header row: `bc-<slug>`, lowercased, hyphenated, at most
/// [`KEYWORD_MAX`] characters.
pub fn header_keyword(article: &Article) -> String {
    let keyword = format!("bc-{}", legal_slugline(article, true))
        .to_lowercase()
        .replace(' ', "-");
    take_chars(&keyword, KEYWORD_MAX)
}

fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
