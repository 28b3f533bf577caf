//! # vnaddress - Vietnamese address decomposer
//!
//! Splits free-form Vietnamese postal addresses into street, ward (phường),
//! district (quận), city and country.
//!
//! ## Features
//!
//! - Comma-separated addresses: each segment is matched against the lexicons,
//!   from the last segment backwards
//! - Unseparated addresses ("45 Đinh Tiên Hoàng phường Bến Nghé quận 1"): the
//!   first occurrence of each lexicon is located and the text is sliced
//!   between those positions
//! - District and ward markers glued to their names ("Q.1", "P12")
//! - Pluggable lexicons (CSV) and classification rules
//! - CSV batch input and output
//!
//! This is a heuristic: there is no gazetteer behind it and no fuzzy matching.
//!
//! ## Quick start
//!
//! ```rust
//! use vnaddress::AddressParser;
//!
//! let parser = AddressParser::new();
//!
//! // comma-separated
//! let r = parser.parse("12 Nguyễn Trãi, P.7, Q.5, TP.HCM");
//! assert_eq!(r.street, "12 Nguyễn Trãi");
//! assert_eq!(r.ward, "P.7");
//! assert_eq!(r.district, "Q.5");
//! assert_eq!(r.city, "TP.HCM");
//!
//! // no separators
//! let r = parser.parse("45 Đinh Tiên Hoàng phường Bến Nghé quận 1");
//! assert_eq!(r.street, "45 Đinh Tiên Hoàng");
//! assert_eq!(r.ward, "phường Bến Nghé");
//! assert_eq!(r.district, "quận 1");
//! ```

mod error;
pub mod io;
mod lexicon;
mod parser;
mod record;
pub mod rules;
mod segmented;
mod splitter;
mod trie;
mod unsegmented;

pub use error::{Error, Result};
pub use lexicon::{normalize, Category, Lexicon, Lexicons};
pub use parser::{AddressParser, ParserOptions, STREET_JOINER};
pub use record::{AddressRecord, HEADERS};
pub use rules::{MatchMode, Rule};
pub use splitter::{Splitter, COMMA, DASH, SLASH};
pub use unsegmented::Markers;

/// Decomposes an address with the global parser
///
/// ```rust
/// let r = vnaddress::parse("7 Pasteur, Phường 6, Quận 3, Việt Nam");
/// assert_eq!(r.ward, "Phường 6");
/// assert_eq!(r.country, "Việt Nam");
/// ```
pub fn parse(address: &str) -> AddressRecord {
    AddressParser::global().parse(address)
}
