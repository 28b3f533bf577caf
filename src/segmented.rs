//! Classifier for comma-separated addresses
//!
//! Segments are scanned from the last one backwards, since addresses are
//! written from the most specific unit to the most general
//! ("Street, Ward, District, City, Country").

use crate::lexicon::Lexicons;
use crate::record::AddressRecord;
use crate::rules::{self, Rule};
use log::debug;

/// Assigns each segment to the first matching rule's field, or to the street
///
/// Unmatched segments are joined with `joiner` in their original left-to-right
/// order. When two segments match the same field, the one nearer the start
/// wins. `full_address` is left empty for the caller to fill.
pub fn classify(
    segments: &[&str],
    rules: &[Rule],
    lexicons: &Lexicons,
    joiner: &str,
) -> AddressRecord {
    let mut record = AddressRecord::default();
    let mut street: Vec<&str> = Vec::new();

    for segment in segments.iter().rev() {
        match rules::first_match(rules, lexicons, segment) {
            Some(rule) => {
                debug!("segment {:?} -> {}", segment, rule.field);
                rule.assign(&mut record, segment);
            }
            None => street.push(*segment),
        }
    }

    street.reverse();
    record.street = street.join(joiner);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;

    fn run(segments: &[&str]) -> AddressRecord {
        classify(segments, &default_rules(), &Lexicons::vietnam(), " - ")
    }

    #[test]
    fn test_full_segmented_address() {
        let r = run(&["45 Lê Lợi", "Phường Bến Nghé", "Quận 1", "TP.HCM", "Việt Nam"]);

        assert_eq!(r.street, "45 Lê Lợi");
        assert_eq!(r.ward, "Phường Bến Nghé");
        assert_eq!(r.district, "Quận 1");
        assert_eq!(r.city, "TP.HCM");
        assert_eq!(r.country, "Việt Nam");
    }

    #[test]
    fn test_country_keeps_original_case() {
        let r = run(&["45 Le Loi", "Ben Nghe", "District 1", "Ho Chi Minh", "VIETNAM"]);

        assert_eq!(r.country, "VIETNAM");
        assert!(!r.street.contains("VIETNAM"));
    }

    #[test]
    fn test_unmatched_segments_join_in_order() {
        let r = run(&["45 Le Loi", "Ben Nghe", "District 1", "Ho Chi Minh", "Vietnam"]);

        assert_eq!(r.street, "45 Le Loi - Ben Nghe - District 1 - Ho Chi Minh");
        assert_eq!(r.country, "Vietnam");
        assert!(r.ward.is_empty());
        assert!(r.district.is_empty());
        assert!(r.city.is_empty());
    }

    #[test]
    fn test_prefix_markers_glued_to_text() {
        let r = run(&["12 Nguyễn Trãi", "P.7", "Q5", "hcm"]);

        assert_eq!(r.street, "12 Nguyễn Trãi");
        assert_eq!(r.ward, "P.7");
        assert_eq!(r.district, "Q5");
        assert_eq!(r.city, "hcm");
    }

    #[test]
    fn test_leftmost_segment_wins_field() {
        let r = run(&["Bến Nghé", "Quận 1", "Quận 3"]);

        assert_eq!(r.district, "Quận 1");
        assert_eq!(r.street, "Bến Nghé");
    }

    #[test]
    fn test_no_segment_dropped() {
        let segments = ["a", "b", "Phường 2", "c", "vn"];
        let r = run(&segments);

        assert_eq!(r.street, "a - b - c");
        assert_eq!(r.ward, "Phường 2");
        assert_eq!(r.country, "vn");
    }

    #[test]
    fn test_all_segments_recognized_leaves_street_empty() {
        let r = run(&["Quận 1", "hcm"]);

        assert_eq!(r.district, "Quận 1");
        assert_eq!(r.city, "hcm");
        assert_eq!(r.street, "");
    }

    #[test]
    fn test_custom_joiner() {
        let r = classify(&["a", "b"], &default_rules(), &Lexicons::vietnam(), " | ");
        assert_eq!(r.street, "a | b");
    }
}
