//! Key collation for mapping fragments.
//!
//! [`KeyOrder::Locale`] uses the CLDR root collation from ICU4X at default
//! (tertiary) strength with non-ignorable punctuation. That is the order
//! ECMAScript `localeCompare` produces, so a route built here matches one
//! built by a JavaScript peer. The host locale is never consulted.
//!
//! Root collation has no numeric ordering: `"10"` sorts before `"2"`.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::config::KeyOrder;

thread_local! {
    // Built from compiled data, so construction only fails if that data is
    // missing from the build.
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|err| tracing::warn!(error = %err, "root collator unavailable"))
            .ok();
}

/// Compare two mapping keys under the given ordering.
pub fn compare_keys(a: &str, b: &str, order: KeyOrder) -> Ordering {
    match order {
        KeyOrder::Locale => locale_compare(a, b),
        KeyOrder::Codepoint => a.cmp(b),
    }
}

/// Root-locale comparison. Total: keys that collate equal (for example
/// canonically equivalent spellings) fall back to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(keys: &[&str], order: KeyOrder) -> Vec<String> {
        let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        keys.sort_by(|a, b| compare_keys(a, b, order));
        keys
    }

    #[test]
    fn test_case_insensitive_primary() {
        // Codepoint order would put "B" before "a"
        assert_eq!(sorted(&["B", "a", "c"], KeyOrder::Locale), ["a", "B", "c"]);
        assert_eq!(sorted(&["B", "a", "c"], KeyOrder::Codepoint), ["B", "a", "c"]);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Cmd", "cmd"), Ordering::Greater);
    }

    #[test]
    fn test_primary_difference_beats_case() {
        assert_eq!(locale_compare("Ab", "ac"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(
            sorted(&["a", "1", "_", " "], KeyOrder::Locale),
            [" ", "_", "1", "a"]
        );
    }

    #[test]
    fn test_punctuation_and_symbol_order() {
        assert_eq!(sorted(&["a-b", "a_b"], KeyOrder::Locale), ["a_b", "a-b"]);
        assert_eq!(sorted(&["$a", "_a"], KeyOrder::Locale), ["_a", "$a"]);
        assert_eq!(sorted(&["#x", "&x", "@x"], KeyOrder::Locale), ["@x", "&x", "#x"]);
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(
            sorted(&["z", "f", "é", "e"], KeyOrder::Locale),
            ["e", "é", "f", "z"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("cmd", "cmdId"), Ordering::Less);
    }

    #[test]
    fn test_no_numeric_collation() {
        assert_eq!(sorted(&["2", "10", "1"], KeyOrder::Locale), ["1", "10", "2"]);
    }

    #[test]
    fn test_total_order_on_distinct_keys() {
        // "é" precomposed vs "e" + combining acute collate equal
        assert_ne!(locale_compare("\u{e9}", "e\u{301}"), Ordering::Equal);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}
