//! ANPA engine: turns article records into ANPA wire messages.
mod ascii;
mod clock;
mod convert;
mod error;
mod formatter;
mod frame;
mod locator;
mod markup;
mod sequence;
mod settings;

pub use ascii::{encode_ascii, encode_strict, to_ascii, AsciiPolicy};
pub use clock::{Clock, FixedClock, SystemClock};
pub use convert::WireTextConverter;
pub use error::{DependencyError, EncodeError, FormatErrorKind, FormatterError};
pub use formatter::{AnpaFormatter, EncodedMessage, ANPA_FORMAT_TYPE};
pub use frame::{
    annotation_bytes, fixed_width, header_bytes, headline_bytes, opening_line, selector_block,
    trailer_bytes, HeaderFields, CRLF, DC1, DC2, DC3, ENQ, EOT, ETX, LF, MORE_COMING, SOH, STX,
    SYN,
};
pub use locator::{Locator, NoLocator, VocabularyLocator};
pub use markup::{Fragment, MarkupWalker, Paragraph, ScraperWalker};
pub use sequence::{InMemorySequenceProvider, SequenceProvider, SequenceSettings};
pub use settings::{FormatterSettings, OverflowPolicy, SettingsError};
