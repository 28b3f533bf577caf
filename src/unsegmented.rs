//! Classifier for addresses written without separators
//!
//! "45 Đinh Tiên Hoàng phường Bến Nghé quận 1": the first occurrence of each
//! lexicon is located in the text, and the ward and district are sliced
//! out between the positions found.

use crate::lexicon::{Category, Lexicons};
use crate::record::AddressRecord;
use log::debug;
use std::borrow::Cow;
use std::ops::Range;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Positions of the first lexicon hit per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    pub country: Option<Range<usize>>,
    pub city: Option<Range<usize>>,
    pub district: Option<Range<usize>>,
    pub ward: Option<Range<usize>>,
}

impl Markers {
    /// Scans `address` once per lexicon (leftmost hit, longest at a tie)
    pub fn locate(address: &str, lexicons: &Lexicons, fold_case: bool) -> Self {
        let find = |category| lexicons.get(category).find_leftmost(address, fold_case);
        Self {
            country: find(Category::Country),
            city: find(Category::City),
            district: find(Category::District),
            ward: find(Category::Ward),
        }
    }
}

/// Decomposes an unseparated address
///
/// `country` and `city` are the matched text itself. The district runs from
/// its marker to the city (or the end when there is no city); the ward runs
/// from its marker to the district (or the end when there is no district).
/// Street is whatever precedes the ward marker, else the district marker,
/// else the whole address. Out-of-order markers give mis-sliced but stable
/// results. `full_address` is left empty for the caller to fill.
///
/// Lexicon keys are NFC, so decomposed input is composed before scanning; the
/// fields are then slices of the composed text.
pub fn classify(address: &str, lexicons: &Lexicons, fold_case: bool) -> AddressRecord {
    let composed: Cow<'_, str> = if is_nfc(address) {
        Cow::Borrowed(address)
    } else {
        Cow::Owned(address.nfc().collect())
    };
    let address: &str = &composed;

    let markers = Markers::locate(address, lexicons, fold_case);
    debug!("markers in {:?}: {:?}", address, markers);

    let mut record = AddressRecord::default();

    if let Some(range) = &markers.country {
        record.country = address[range.clone()].to_string();
    }
    if let Some(range) = &markers.city {
        record.city = address[range.clone()].to_string();
    }

    if let Some(district) = &markers.district {
        let start = district.start;
        match &markers.city {
            Some(city) if city.start > start => {
                record.district = slice(address, start, city.start);
            }
            None => record.district = address[start..].to_string(),
            Some(_) => {}
        }
        record.street = slice(address, 0, start);
    }

    if let Some(ward) = &markers.ward {
        let start = ward.start;
        match &markers.district {
            Some(district) if district.start > start => {
                record.ward = slice(address, start, district.start);
            }
            None => record.ward = address[start..].to_string(),
            Some(_) => {}
        }
        record.street = slice(address, 0, start);
    }

    if record.street.is_empty() {
        record.street = address.to_string();
    }

    record
}

/// `address[start..end]` without the whitespace before the next marker
fn slice(address: &str, start: usize, end: usize) -> String {
    address[start..end].trim_end().to_string()
}
