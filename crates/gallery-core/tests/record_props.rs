// Rust guideline compliant 2026-10-14

//! Property-based tests for the record codec, slugs, and subject filtering.

use gallery_core::models::DEFAULT_SUBJECTS;
use gallery_core::{filter_subjects, slug_from_title, FieldValue, Header, Record, FALLBACK_SLUG};
use proptest::prelude::*;

/// Generates single-line-or-not text with the characters that need escaping.
fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-zA-Z0-9 :#"'\\\n\[\]א-ת₪×-]{0,40}"#).unwrap()
}

proptest! {
    #[test]
    fn prop_text_value_round_trips(value in arb_text()) {
        let mut header = Header::new();
        header.insert("title", value.clone());
        let rendered = Record::new(header, "").render();

        let parsed = Record::parse(&rendered).unwrap();
        prop_assert_eq!(parsed.header.get("title"), Some(&FieldValue::Text(value)));
    }

    #[test]
    fn prop_slug_never_empty(title in any::<String>()) {
        let slug = slug_from_title(&title);
        prop_assert!(!slug.is_empty());
        prop_assert!(!slug.chars().any(char::is_whitespace));
    }

    #[test]
    fn prop_symbol_only_title_uses_fallback(title in r"[!?.,;:()*&^%$@ ]{0,20}") {
        prop_assert_eq!(slug_from_title(&title), FALLBACK_SLUG);
    }

    #[test]
    fn prop_filtered_subjects_are_in_vocabulary(
        tags in prop::collection::vec(r"[a-z-]{0,12}", 0..8),
    ) {
        let raw = tags.join(",");
        let subjects = filter_subjects(&raw, &DEFAULT_SUBJECTS);
        for subject in &subjects {
            prop_assert!(DEFAULT_SUBJECTS.contains(&subject.as_str()));
            prop_assert!(tags.contains(subject));
        }
    }
}
