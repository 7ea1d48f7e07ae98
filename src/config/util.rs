//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/docsite.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("docsite.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("docsite.toml")).unwrap();
        assert_eq!(found, root.join("docsite.toml"));
    }

    #[test]
    fn test_find_config_from_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_from(dir.path(), Path::new("no-such-config-file.toml")).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert!(find_config_file(&path).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
