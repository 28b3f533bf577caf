//! Address parser: splitting, classification and record assembly

use crate::lexicon::Lexicons;
use crate::record::AddressRecord;
use crate::rules::{default_rules, Rule};
use crate::splitter::{Splitter, COMMA};
use crate::{segmented, unsegmented};
use log::debug;
use once_cell::sync::Lazy;

/// Global parser instance
static GLOBAL_PARSER: Lazy<AddressParser> = Lazy::new(AddressParser::new);

/// Default joiner for street segments
pub const STREET_JOINER: &str = " - ";

/// Parser settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Separators tried in order to detect a segmented address
    pub separators: Vec<String>,
    /// Joiner between unmatched segments in the street field
    pub street_joiner: String,
    /// Lowercase the input while scanning unseparated addresses
    pub fold_case: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            separators: vec![COMMA.to_string()],
            street_joiner: STREET_JOINER.to_string(),
            fold_case: false,
        }
    }
}

/// Vietnamese address parser
///
/// Lexicons are read-only once the parser is built, so one instance can be
/// shared freely.
pub struct AddressParser {
    lexicons: Lexicons,
    rules: Vec<Rule>,
    splitter: Splitter,
    options: ParserOptions,
}

impl AddressParser {
    /// Parser with the built-in Vietnamese lexicon
    pub fn new() -> Self {
        Self::with_lexicons(Lexicons::vietnam())
    }

    /// Parser with custom lexicons and default options
    pub fn with_lexicons(lexicons: Lexicons) -> Self {
        Self::with_options(lexicons, ParserOptions::default())
    }

    /// Parser with custom lexicons and options
    pub fn with_options(lexicons: Lexicons, options: ParserOptions) -> Self {
        Self {
            lexicons,
            rules: default_rules(),
            splitter: Splitter::new(options.separators.iter().cloned()),
            options,
        }
    }

    /// Replaces the segment classification rules
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Shared global instance
    pub fn global() -> &'static AddressParser {
        &GLOBAL_PARSER
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Active rules, highest priority first
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Decomposes one address
    ///
    /// Never fails: unrecognized text ends up in `street`.
    ///
    /// # Example
    /// ```rust
    /// use vnaddress::AddressParser;
    ///
    /// let parser = AddressParser::new();
    /// let r = parser.parse("45 Lê Lợi, Phường Bến Nghé, Quận 1, TP.HCM, Việt Nam");
    /// assert_eq!(r.street, "45 Lê Lợi");
    /// assert_eq!(r.district, "Quận 1");
    /// assert_eq!(r.country, "Việt Nam");
    /// ```
    pub fn parse(&self, address: &str) -> AddressRecord {
        if address.is_empty() {
            return AddressRecord::empty();
        }

        let mut record = match self.splitter.split(address) {
            Some(segments) => {
                debug!("{} segments in {:?}", segments.len(), address);
                segmented::classify(
                    &segments,
                    &self.rules,
                    &self.lexicons,
                    &self.options.street_joiner,
                )
            }
            None => unsegmented::classify(address, &self.lexicons, self.options.fold_case),
        };

        record.full_address = address.to_string();
        record
    }

    /// Decomposes a slice of addresses
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<AddressRecord> {
        addresses.iter().map(|a| self.parse(a)).collect()
    }

    /// Decomposes every address of an iterator
    pub fn parse_all<I, S>(&self, addresses: I) -> Vec<AddressRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses
            .into_iter()
            .map(|a| self.parse(a.as_ref()))
            .collect()
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}
