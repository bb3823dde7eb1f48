//! Profile files: named, comma-separated value lists.
//!
//! A profile is a `.txt` file in the profiles directory whose content is one
//! comma-separated list. Values are whitespace-trimmed and empty tokens are
//! dropped, so trailing commas and newlines in the files are harmless.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;

use crate::errors::ProfileError;

/// Profile name and value count, as listed by `GET /profiles`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub name: String,
    pub values_count: usize,
}

/// Split a profile file's content into its values.
pub fn split_values(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve a profile name to its file path.
///
/// Names are plain file stems; anything that could walk out of the profiles
/// directory resolves to `NotFound`.
fn profile_path(dir: &Path, name: &str) -> Result<PathBuf, ProfileError> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(ProfileError::NotFound {
            name: name.to_string(),
        });
    }
    Ok(dir.join(format!("{}.txt", name)))
}

/// Load the values of a named profile.
pub fn load_profile_values(dir: &Path, name: &str) -> Result<Vec<String>, ProfileError> {
    let path = profile_path(dir, name)?;
    if !path.is_file() {
        return Err(ProfileError::NotFound {
            name: name.to_string(),
        });
    }
    let content = fs::read_to_string(&path).map_err(|source| ProfileError::Io {
        name: name.to_string(),
        source,
    })?;
    Ok(split_values(&content))
}

/// List all profiles in the directory, sorted by name.
///
/// Unreadable or non-UTF-8 files are skipped with a warning so one bad file
/// cannot break the listing. A missing directory lists as empty.
pub fn list_profiles(dir: &Path) -> Vec<ProfileInfo> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut profiles = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => profiles.push(ProfileInfo {
                name: name.to_string(),
                values_count: split_values(&content).len(),
            }),
            Err(err) => warn!("Skipping unreadable profile {}: {}", path.display(), err),
        }
    }
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn temp_dir() -> PathBuf {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let dir = std::env::temp_dir().join(format!(
            "bingo-profiles-test-{}-{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_split_values() {
        assert_eq!(split_values("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_values(" a , b ,  c\n"), vec!["a", "b", "c"]);
        assert_eq!(split_values("a,,b,"), vec!["a", "b"]);
        assert_eq!(split_values(""), Vec::<String>::new());
        assert_eq!(split_values(" , ,\n"), Vec::<String>::new());
    }

    #[test]
    fn test_load_profile_values() {
        let dir = temp_dir();
        fs::write(dir.join("animals.txt"), "cat, dog,\nowl").unwrap();
        let values = load_profile_values(&dir, "animals").unwrap();
        assert_eq!(values, vec!["cat", "dog", "owl"]);
    }

    #[test]
    fn test_load_missing_profile() {
        let dir = temp_dir();
        let err = load_profile_values(&dir, "ghost").unwrap_err();
        assert!(matches!(err, ProfileError::NotFound { name } if name == "ghost"));
    }

    #[test]
    fn test_load_rejects_path_traversal() {
        let dir = temp_dir();
        for name in ["../secrets", "a/b", "a\\b", "..", ""] {
            assert!(
                matches!(
                    load_profile_values(&dir, name),
                    Err(ProfileError::NotFound { .. })
                ),
                "name {:?} should not resolve",
                name
            );
        }
    }

    #[test]
    fn test_list_profiles_sorted_with_counts() {
        let dir = temp_dir();
        fs::write(dir.join("zoo.txt"), "lion,tiger").unwrap();
        fs::write(dir.join("art.txt"), "dada, bauhaus, pop, op").unwrap();
        fs::write(dir.join("notes.md"), "not a profile").unwrap();

        let profiles = list_profiles(&dir);
        let summary: Vec<(&str, usize)> = profiles
            .iter()
            .map(|p| (p.name.as_str(), p.values_count))
            .collect();
        assert_eq!(summary, vec![("art", 4), ("zoo", 2)]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = temp_dir().join("nope");
        assert!(list_profiles(&dir).is_empty());
    }
}
