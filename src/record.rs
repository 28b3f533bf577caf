//! Decomposed address record

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column labels of an exported record, in row order
pub const HEADERS: [&str; 6] = [
    "Address Origin",
    "Street",
    "Ward",
    "District",
    "City",
    "Country",
];

/// One decomposed address
///
/// Administrative fields are empty when nothing was recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AddressRecord {
    /// Input text, verbatim
    pub full_address: String,
    /// Text not attributed to any administrative unit
    pub street: String,
    /// Ward (phường)
    pub ward: String,
    /// District (quận)
    pub district: String,
    /// City
    pub city: String,
    /// Country
    pub country: String,
}

impl AddressRecord {
    /// Record with every field empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_ward(&self) -> bool {
        !self.ward.is_empty()
    }

    pub fn has_district(&self) -> bool {
        !self.district.is_empty()
    }

    pub fn has_city(&self) -> bool {
        !self.city.is_empty()
    }

    pub fn has_country(&self) -> bool {
        !self.country.is_empty()
    }

    /// Whether any administrative field was recognized
    pub fn is_structured(&self) -> bool {
        self.has_ward() || self.has_district() || self.has_city() || self.has_country()
    }

    /// Fields in [`HEADERS`] order
    pub fn to_row(&self) -> [&str; 6] {
        [
            self.full_address.as_str(),
            self.street.as_str(),
            self.ward.as_str(),
            self.district.as_str(),
            self.city.as_str(),
            self.country.as_str(),
        ]
    }
}
