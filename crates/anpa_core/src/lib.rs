//! ANPA core: the article record model and the pure field rules of the wire layout.
mod article;
mod headline;
mod keyword;
mod priority;
mod subscriber;

pub use article::{Article, BodyFormat, Category, ContentKind, Dateline, Flags, TermRef};
pub use headline::{compose_headline, fit_headline, FittedHeadline, HEADLINE_MAX};
pub use keyword::{header_keyword, legal_slugline, KEYWORD_MAX};
pub use priority::{priority_code, InvalidPriority};
pub use subscriber::Subscriber;
