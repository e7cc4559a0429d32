//! Property-based tests for path resolution.

use super::resolver::PathResolver;
use crate::environment::FixedEnvironment;
use proptest::prelude::*;
use std::path::Path;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6)
        .prop_map(|parts| parts.join("/"))
        .prop_filter("must not look like a home path", |p| !p.starts_with('~'))
}

fn resolver() -> PathResolver<FixedEnvironment> {
    PathResolver::with_environment(FixedEnvironment::new("/home/prop", "/cwd/prop"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every resolved path is absolute
    #[test]
    fn absolute_always_rooted(path in relative_path_strategy()) {
        let resolver = resolver();
        prop_assert!(resolver.absolute(&path, None).starts_with('/'));
        prop_assert!(resolver.absolute(&path, Some(Path::new("/base"))).starts_with('/'));
        let home_form = format!("~/{path}");
        prop_assert!(resolver.absolute(&home_form, None).starts_with("/home/prop/"));
    }

    // Absolute input is returned byte-for-byte regardless of base
    #[test]
    fn absolute_input_unchanged(path in relative_path_strategy()) {
        let abs = format!("/{path}");
        prop_assert_eq!(resolver().absolute(&abs, Some(Path::new("/base"))), abs);
    }

    // `~rest` and `~/rest` resolve to the same place
    #[test]
    fn tilde_forms_agree(path in relative_path_strategy()) {
        let resolver = resolver();
        let with_sep = resolver.absolute(&format!("~/{path}"), None);
        let without_sep = resolver.absolute(&format!("~{path}"), None);
        prop_assert_eq!(with_sep, without_sep);
    }

    // Relative input always ends with the original path text
    #[test]
    fn relative_suffix_preserved(path in relative_path_strategy()) {
        let resolved = resolver().absolute(&path, Some(Path::new("/base")));
        prop_assert_eq!(resolved, format!("/base/{path}"));
    }
}
