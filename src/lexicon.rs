//! Administrative-unit lexicons and the embedded Vietnamese data

use crate::error::{Error, Result};
use crate::trie::Trie;
use log::info;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Embedded lexicon data (compiled in)
const LEXICON_DATA: &str = include_str!("../data/lexicon.csv");

/// Administrative-unit category of a lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Country,
    City,
    District,
    Ward,
}

impl Category {
    /// All categories, most general first
    pub const ALL: [Category; 4] = [
        Category::Country,
        Category::City,
        Category::District,
        Category::Ward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Country => "country",
            Category::City => "city",
            Category::District => "district",
            Category::Ward => "ward",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "country" => Ok(Category::Country),
            "city" => Ok(Category::City),
            "district" => Ok(Category::District),
            "ward" => Ok(Category::Ward),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Normalizes text for lexicon lookups: NFC composition, then lowercase.
///
/// Diacritics are kept, so "quận" and "quan" stay distinct.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Recognized tokens of one category
#[derive(Debug)]
pub struct Lexicon {
    category: Category,
    /// Normalized keys in sorted order
    keys: BTreeSet<String>,
    /// All keys, for exact and prefix tests
    trie: Trie<()>,
    /// Keys longer than one character, for substring scans
    scan_trie: Trie<()>,
}

impl Lexicon {
    /// Creates an empty lexicon
    pub fn new(category: Category) -> Self {
        Self {
            category,
            keys: BTreeSet::new(),
            trie: Trie::new(),
            scan_trie: Trie::new(),
        }
    }

    /// Builds a lexicon from the given keys
    pub fn from_keys<I, S>(category: Category, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new(category);
        for key in keys {
            lexicon.insert(key.as_ref());
        }
        lexicon
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Adds a key; returns false if it was empty or already present
    pub fn insert(&mut self, key: &str) -> bool {
        let key = normalize(key.trim());
        if key.is_empty() || self.keys.contains(&key) {
            return false;
        }
        self.trie.insert(&key, ());
        // single characters like "q" or "p" only make sense as segment prefixes
        if key.chars().count() > 1 {
            self.scan_trie.insert(&key, ());
        }
        self.keys.insert(key);
        true
    }

    /// Exact membership of the normalized text
    pub fn contains(&self, text: &str) -> bool {
        self.trie.contains(&normalize(text))
    }

    /// Whether any key is a prefix of the normalized text (longest match)
    pub fn matches_prefix(&self, text: &str) -> bool {
        self.longest_prefix(text).is_some()
    }

    /// Longest key that prefixes the normalized text
    pub fn longest_prefix(&self, text: &str) -> Option<String> {
        let normalized = normalize(text);
        self.trie
            .find_longest_prefix(&normalized)
            .map(|(matched, _, _)| matched.to_string())
    }

    /// Byte range of the leftmost key occurring in `text`
    ///
    /// Only keys longer than one character take part. At the same start the
    /// longest key wins. `text` is searched as-is; with `fold_case` each of
    /// its characters is lowercased before comparison.
    pub fn find_leftmost(&self, text: &str, fold_case: bool) -> Option<Range<usize>> {
        self.scan_trie
            .find_leftmost(text, fold_case)
            .map(|(start, end, _)| start..end)
    }

    /// Keys in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The four lexicons consulted by the classifiers
#[derive(Debug)]
pub struct Lexicons {
    country: Lexicon,
    city: Lexicon,
    district: Lexicon,
    ward: Lexicon,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::vietnam()
    }
}

impl Lexicons {
    /// Four empty lexicons
    pub fn empty() -> Self {
        Self {
            country: Lexicon::new(Category::Country),
            city: Lexicon::new(Category::City),
            district: Lexicon::new(Category::District),
            ward: Lexicon::new(Category::Ward),
        }
    }

    /// Built-in Vietnamese lexicon (country, Ho Chi Minh City, district and
    /// ward markers)
    pub fn vietnam() -> Self {
        let mut lexicons = Self::empty();

        for line in LEXICON_DATA.lines().skip(1) {
            // skip header
            if let Some((category, key)) = line.split_once(',') {
                if let Ok(category) = category.parse::<Category>() {
                    lexicons.insert(category, key);
                }
            }
        }

        lexicons
    }

    /// Loads a lexicon from CSV rows of `category,key` (with a header row)
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut lexicons = Self::empty();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let (category, key) = match (record.get(0), record.get(1)) {
                (Some(c), Some(k)) => (c, k),
                _ => {
                    return Err(Error::InvalidLexicon {
                        line,
                        reason: "expected two fields: category,key".to_string(),
                    })
                }
            };
            let category = category
                .parse::<Category>()
                .map_err(|reason| Error::InvalidLexicon { line, reason })?;
            if key.is_empty() {
                return Err(Error::InvalidLexicon {
                    line,
                    reason: "empty key".to_string(),
                });
            }
            lexicons.insert(category, key);
        }

        Ok(lexicons)
    }

    /// Loads a lexicon file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let lexicons = Self::from_csv_reader(file)?;
        let counts: Vec<String> = Category::ALL
            .iter()
            .map(|&c| format!("{} {}", lexicons.get(c).len(), c))
            .collect();
        info!("Loaded lexicon {}: {} keys", path.display(), counts.join(", "));
        Ok(lexicons)
    }

    /// Adds a key to the lexicon of `category`
    pub fn insert(&mut self, category: Category, key: &str) -> bool {
        self.get_mut(category).insert(key)
    }

    pub fn get(&self, category: Category) -> &Lexicon {
        match category {
            Category::Country => &self.country,
            Category::City => &self.city,
            Category::District => &self.district,
            Category::Ward => &self.ward,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Lexicon {
        match category {
            Category::Country => &mut self.country,
            Category::City => &mut self.city,
            Category::District => &mut self.district,
            Category::Ward => &mut self.ward,
        }
    }
}
