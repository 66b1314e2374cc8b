//! Timer definition loading
//!
//! Load timer definitions from TOML files containing `[[timer]]` entries,
//! either one file at a time or every `*.toml` file in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::{TimerConfig, TimerDefinition, TimerError};

/// Load and validate timer definitions from a single TOML file
pub fn load_definitions_from_file(path: &Path) -> Result<Vec<TimerDefinition>, TimerError> {
    let content = fs::read_to_string(path).map_err(|source| TimerError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let config: TimerConfig = toml::from_str(&content).map_err(|source| TimerError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    for def in &config.timers {
        def.validate()
            .map_err(|reason| TimerError::InvalidDefinition {
                path: path.to_path_buf(),
                reason,
            })?;
    }

    tracing::debug!(
        path = %path.display(),
        count = config.timers.len(),
        "Loaded timer definitions"
    );
    Ok(config.timers)
}

/// Load timer definitions from every `*.toml` file in `dir`, in path order.
///
/// A missing directory yields no definitions.
pub fn load_definitions_from_dir(dir: &Path) -> Result<Vec<TimerDefinition>, TimerError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let read_dir_err = |source| TimerError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();

    let mut definitions = Vec::new();
    for file in files {
        definitions.extend(load_definitions_from_file(&file)?);
    }
    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir
    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tickwork-loader-{}-{}",
            test,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_file() {
        let dir = scratch_dir("loads_file");
        let path = dir.join("timers.toml");
        fs::write(
            &path,
            r#"
            [[timer]]
            name = "heartbeat"
            duration_secs = 1.0
            loop_infinitely = true

            [[timer]]
            name = "intro"
            duration_secs = 3.5
            preserve_after_expiry = true
            "#,
        )
        .unwrap();

        let defs = load_definitions_from_file(&path).unwrap();
        assert_eq!(defs.len(), 2);
        assert!(defs[0].loop_infinitely);
        assert!(defs[1].preserve_after_expiry);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = scratch_dir("missing_file");
        let err = load_definitions_from_file(&dir.join("nope.toml")).unwrap_err();
        assert!(matches!(err, TimerError::ReadFile { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let dir = scratch_dir("malformed");
        let path = dir.join("bad.toml");
        fs::write(&path, "[[timer]]\nname = \n").unwrap();

        let err = load_definitions_from_file(&path).unwrap_err();
        assert!(matches!(err, TimerError::ParseToml { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_definition_is_reported() {
        let dir = scratch_dir("invalid");
        let path = dir.join("neg.toml");
        fs::write(&path, "[[timer]]\nname = \"x\"\nduration_secs = -2.0\n").unwrap();

        let err = load_definitions_from_file(&path).unwrap_err();
        assert!(matches!(err, TimerError::InvalidDefinition { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn loads_directory_in_path_order() {
        let dir = scratch_dir("directory");
        fs::write(
            dir.join("b.toml"),
            "[[timer]]\nname = \"second\"\nduration_secs = 2.0\n",
        )
        .unwrap();
        fs::write(
            dir.join("a.toml"),
            "[[timer]]\nname = \"first\"\nduration_secs = 1.0\n",
        )
        .unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let defs = load_definitions_from_dir(&dir).unwrap();
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = std::env::temp_dir().join("tickwork-loader-does-not-exist");
        assert!(load_definitions_from_dir(&dir).unwrap().is_empty());
    }
}
