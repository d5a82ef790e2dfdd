//! Test fixture loader for the barn engine's golden scenarios.
//!
//! Fixtures live under `crates/test-fixtures/golden/` and are plain JSON;
//! each crate's tests deserialize them into their own scenario structs.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until `crates/test-fixtures` appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    loop {
        if path.join("golden").is_dir() && path.ends_with("test-fixtures") {
            return path;
        }
        let candidate = path.join("crates").join("test-fixtures");
        if candidate.join("golden").is_dir() {
            return candidate;
        }
        let sibling = path.join("test-fixtures");
        if sibling.join("golden").is_dir() {
            return sibling;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_schedule_files_exist() {
        let files = ["golden/schedule/mixed_herd.json"];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_insight_files_exist() {
        let files = [
            "golden/insights/whiskey.json",
            "golden/insights/stale_deworming.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn list_fixtures_finds_json_only() {
        let files = list_fixtures("golden/schedule");
        assert!(!files.is_empty());
        assert!(files
            .iter()
            .all(|p| p.extension().is_some_and(|ext| ext == "json")));
    }

    #[test]
    fn fixtures_parse_as_json() {
        for subdir in ["golden/schedule", "golden/insights"] {
            for path in list_fixtures(subdir) {
                let content = std::fs::read_to_string(&path).unwrap();
                let value: serde_json::Value = serde_json::from_str(&content).unwrap();
                assert!(value.is_object(), "{} is not an object", path.display());
            }
        }
    }
}
