//! Separator detection for segmented addresses

/// Default separator: "45 Lê Lợi, Bến Nghé, Quận 1"
pub const COMMA: &str = ",";
/// Known separator, not enabled by default: "45 Lê Lợi - Bến Nghé - Quận 1"
pub const DASH: &str = "-";
/// Known separator, not enabled by default: "45 Lê Lợi / Bến Nghé / Quận 1"
pub const SLASH: &str = "/";

/// Splits an address on the first separator that yields several segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    separators: Vec<String>,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new([COMMA])
    }
}

impl Splitter {
    /// Creates a splitter trying `separators` in order
    pub fn new<I, S>(separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            separators: separators
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Splits `address` into trimmed, non-empty segments
    ///
    /// Returns `None` when no separator produces at least two segments, in
    /// which case the address has to be treated as one unbroken run of text.
    pub fn split<'a>(&self, address: &'a str) -> Option<Vec<&'a str>> {
        self.separators.iter().find_map(|sep| {
            let segments: Vec<&str> = address
                .split(sep.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            (segments.len() > 1).then_some(segments)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma() {
        let splitter = Splitter::default();
        let segments = splitter
            .split("45 Lê Lợi,  Bến Nghé , Quận 1,Hồ Chí Minh")
            .unwrap();
        assert_eq!(segments, vec!["45 Lê Lợi", "Bến Nghé", "Quận 1", "Hồ Chí Minh"]);
    }

    #[test]
    fn test_no_separator() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("45 Đinh Tiên Hoàng phường Bến Nghé quận 1"), None);
    }

    #[test]
    fn test_single_segment_after_trim() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("45 Lê Lợi,"), None);
        assert_eq!(splitter.split(" , , "), None);
        assert_eq!(splitter.split(""), None);
    }

    #[test]
    fn test_empty_segments_dropped() {
        let splitter = Splitter::default();
        let segments = splitter.split("45 Lê Lợi,, Quận 1").unwrap();
        assert_eq!(segments, vec!["45 Lê Lợi", "Quận 1"]);
    }

    #[test]
    fn test_dash_disabled_by_default() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("45 Lê Lợi - Quận 1"), None);
    }

    #[test]
    fn test_first_productive_separator_wins() {
        let splitter = Splitter::new([COMMA, DASH, SLASH]);
        // no comma, so the dash is used and the slash stays inside a segment
        let segments = splitter.split("12/4 Lê Lợi - Quận 1").unwrap();
        assert_eq!(segments, vec!["12/4 Lê Lợi", "Quận 1"]);

        let segments = splitter.split("12/4 Lê Lợi, Quận 1 - HCM").unwrap();
        assert_eq!(segments, vec!["12/4 Lê Lợi", "Quận 1 - HCM"]);
    }

    #[test]
    fn test_empty_separator_ignored() {
        let splitter = Splitter::new(["", COMMA]);
        assert_eq!(splitter.separators(), &[COMMA.to_string()]);
    }
}
