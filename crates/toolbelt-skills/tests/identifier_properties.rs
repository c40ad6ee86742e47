//! Property tests for tool identifiers and skill names

use proptest::prelude::*;
use std::path::PathBuf;
use toolbelt_skills::parser::{
    is_valid_name, split_frontmatter, tool_identifier, validate_frontmatter,
};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,11}"
}

/// Property: identifiers depend only on the path below the root.
#[test]
fn prop_identifier_independent_of_root() {
    proptest!(|(segments in prop::collection::vec(segment(), 1..5))| {
        let rel: PathBuf = segments.iter().collect();
        let a = PathBuf::from("/srv/project/.skills");
        let b = PathBuf::from("/home/someone/.skills");

        let id_a = tool_identifier(&a.join(&rel).join("SKILL.md"), &a);
        let id_b = tool_identifier(&b.join(&rel).join("SKILL.md"), &b);
        prop_assert_eq!(&id_a, &id_b);

        let expected = format!("skills_{}", segments.join("_").replace('-', "_"));
        prop_assert_eq!(id_a, expected);
    });
}

/// Property: identifiers never contain hyphens or path separators.
#[test]
fn prop_identifier_is_flat() {
    proptest!(|(segments in prop::collection::vec(segment(), 1..5))| {
        let root = PathBuf::from("/skills");
        let rel: PathBuf = segments.iter().collect();
        let id = tool_identifier(&root.join(rel).join("SKILL.md"), &root);
        prop_assert!(id.starts_with("skills_"));
        prop_assert!(!id.contains('-'));
        prop_assert!(!id.contains('/'));
    });
}

/// Property: a name is accepted exactly when it is lowercase alphanumeric with hyphens.
#[test]
fn prop_name_validation_matches_pattern() {
    proptest!(|(name in "[a-zA-Z0-9_ .-]{0,16}")| {
        let expected = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        prop_assert_eq!(is_valid_name(&name), expected);
    });
}

/// Property: valid names with long enough descriptions always validate.
#[test]
fn prop_valid_frontmatter_accepted() {
    proptest!(|(name in segment(), description in "[A-Za-z][A-Za-z ]{9,40}[a-z]")| {
        let document = format!("---\nname: \"{}\"\ndescription: \"{}\"\n---\n", name, description);
        let (data, _) = split_frontmatter(&document).unwrap();
        let fm = validate_frontmatter(data);
        prop_assert!(fm.is_ok(), "rejected: {:?}", fm);
        let fm = fm.unwrap();
        prop_assert_eq!(fm.name, name);
    });
}
