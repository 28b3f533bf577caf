//! Ordered classification rules for segmented addresses

use crate::lexicon::{Category, Lexicons};
use crate::record::AddressRecord;

/// Administrative field a segment can be assigned to
pub type Field = Category;

/// How a segment is compared against a lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole normalized segment must be a key
    Exact,
    /// Some key must prefix the normalized segment ("Quận 1", "P.12")
    Prefix,
}

/// One step of the classification chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
    pub match_mode: MatchMode,
}

impl Rule {
    pub const fn new(field: Field, match_mode: MatchMode) -> Self {
        Self { field, match_mode }
    }

    /// Tests a segment against the lexicon of this rule's field
    pub fn matches(&self, lexicons: &Lexicons, segment: &str) -> bool {
        let lexicon = lexicons.get(self.field);
        match self.match_mode {
            MatchMode::Exact => lexicon.contains(segment),
            MatchMode::Prefix => lexicon.matches_prefix(segment),
        }
    }

    /// Writes `value` into the record field this rule targets
    pub(crate) fn assign(&self, record: &mut AddressRecord, value: &str) {
        let slot = match self.field {
            Category::Country => &mut record.country,
            Category::City => &mut record.city,
            Category::District => &mut record.district,
            Category::Ward => &mut record.ward,
        };
        *slot = value.to_string();
    }
}

/// Country, city, district, ward: exact names first, then prefix markers
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(Category::Country, MatchMode::Exact),
        Rule::new(Category::City, MatchMode::Exact),
        Rule::new(Category::District, MatchMode::Prefix),
        Rule::new(Category::Ward, MatchMode::Prefix),
    ]
}

/// First rule matching `segment`, in list order
pub fn first_match<'r>(rules: &'r [Rule], lexicons: &Lexicons, segment: &str) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.matches(lexicons, segment))
}
