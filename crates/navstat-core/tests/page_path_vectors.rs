//! Page-path vectors for the stat validator and URI normalizer.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use serde::Deserialize;

use navstat_core::stat::{normalize, validate};

#[derive(Debug, Deserialize)]
struct PathVector {
    description: String,
    input: String,
    valid: bool,
    #[serde(default)]
    normalized: Option<String>,
}

fn load() -> Vec<PathVector> {
    let s = fs::read_to_string("tests/vectors/page_paths.json").unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn page_path_vectors() {
    for v in load() {
        assert_eq!(validate(&v.input), v.valid, "vector={}", v.description);

        if let Some(expected) = v.normalized {
            assert_eq!(normalize(&v.input), expected, "vector={}", v.description);
        }
    }
}

#[test]
fn normalized_names_carry_no_separators() {
    for v in load().into_iter().filter(|v| v.valid) {
        let name = normalize(&v.input);
        assert!(!name.contains(['/', '&', '#']), "vector={}", v.description);
    }
}
