/// Upper bound on the headline line, sequence suffix included.
pub const HEADLINE_MAX: usize = 64;

/// Headline text after applying the length limit.
///
/// The variant decides the ASCII policy downstream: text that fits is written
/// with unencodable characters dropped, truncated text keeps one placeholder
/// per character so the truncation boundary survives encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FittedHeadline {
    Fits(String),
    Truncated(String),
}

impl FittedHeadline {
    pub fn as_str(&self) -> &str {
        match self {
            FittedHeadline::Fits(text) | FittedHeadline::Truncated(text) => text,
        }
    }
}

pub fn compose_headline(locator: Option<&str>, headline: &str) -> String {
    match locator {
        Some(prefix) => format!("{prefix}:{headline}"),
        None => headline.to_string(),
    }
}

/// Bound `candidate` to [`HEADLINE_MAX`] characters. When a within-story
/// sequence is known it replaces the tail as `=<sequence>`.
pub fn fit_headline(candidate: &str, sequence: Option<u32>) -> FittedHeadline {
    if candidate.chars().count() <= HEADLINE_MAX {
        return FittedHeadline::Fits(candidate.to_string());
    }
    match sequence {
        Some(sequence) => {
            let suffix = format!("={sequence}");
            let keep = HEADLINE_MAX.saturating_sub(suffix.len());
            let mut shortened: String = candidate.chars().take(keep).collect();
            shortened.push_str(&suffix);
            FittedHeadline::Truncated(shortened)
        }
        None => FittedHeadline::Truncated(candidate.chars().take(HEADLINE_MAX).collect()),
    }
}
