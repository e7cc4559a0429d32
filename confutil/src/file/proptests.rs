//! Property-based tests for unique list loading.
//!
//! The slot-based fold is checked against a direct list scan: find and
//! remove the equal entry, prepend the new one, reverse at the end.

use super::unique_list::{FnParser, UniqueListLoader};
use proptest::prelude::*;

fn scan_reference(content: &str, key: impl Fn(&str) -> String) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();
    for line in content.split('\n') {
        let line = line.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
        if line.is_empty() {
            continue;
        }
        if let Some(pos) = list.iter().position(|e| key(e) == key(line)) {
            list.remove(pos);
        }
        list.insert(0, line.to_string());
    }
    list.reverse();
    list
}

fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-e]{1,2}",
            "[A-E]{1,2}",
            Just(String::new()),
            Just("  ".to_string()),
            " [a-c] ",
        ],
        0..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Exact keys agree with the scan algorithm
    #[test]
    fn matches_scan_reference(content in content_strategy()) {
        let loader = UniqueListLoader::new(FnParser::new(
            |line: &str| Some(line.to_string()),
            |entry: &String| entry.clone(),
        ));
        let expected = scan_reference(&content, str::to_string);
        prop_assert_eq!(loader.load_str(&content).into_vec(), expected);
    }

    // Case-folded keys agree with the scan algorithm
    #[test]
    fn matches_scan_reference_folded(content in content_strategy()) {
        let loader = UniqueListLoader::new(FnParser::new(
            |line: &str| Some(line.to_string()),
            |entry: &String| entry.to_ascii_lowercase(),
        ));
        let expected = scan_reference(&content, str::to_ascii_lowercase);
        prop_assert_eq!(loader.load_str(&content).into_vec(), expected);
    }

    // No two entries share a key
    #[test]
    fn keys_are_unique(content in content_strategy()) {
        let loader = UniqueListLoader::new(FnParser::new(
            |line: &str| Some(line.to_string()),
            |entry: &String| entry.to_ascii_lowercase(),
        ));
        let list = loader.load_str(&content).into_vec();
        let mut keys: Vec<String> = list.iter().map(|e| e.to_ascii_lowercase()).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), list.len());
    }

    // A trailing newline never changes the result
    #[test]
    fn trailing_newline_irrelevant(content in content_strategy()) {
        let loader = UniqueListLoader::new(FnParser::new(
            |line: &str| Some(line.to_string()),
            |entry: &String| entry.clone(),
        ));
        let with_newline = format!("{content}\n");
        prop_assert_eq!(loader.load_str(&content), loader.load_str(&with_newline));
    }
}
