use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::GeneratorConfig;
use super::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate a config from TOML text; `path` is only used in errors
pub fn parse_config(contents: &str, path: &Path) -> Result<GeneratorConfig> {
    let config = toml::from_str::<GeneratorConfig>(contents)
        .map_err(|e| Error::config(path, e.message()))?;
    for family in &config.families {
        family.validate()?;
    }
    Ok(config)
}

/// Load an explicitly requested config file. Every failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::config(path, format!("failed to read: {}", e)))?;
    let config = parse_config(&contents, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Try a discovered candidate; missing files are silent, broken ones warn
fn try_load_config(path: &Path) -> Option<GeneratorConfig> {
    let contents = match read_config_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config file");
            }
            return None;
        }
    };

    match parse_config(&contents, path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring config file, using defaults");
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> GeneratorConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "no config found, using built-in families"
            );
            GeneratorConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }
    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to get current directory, using defaults");
            Ok(GeneratorConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EmissionMode;
    use tempfile::TempDir;

    #[test]
    fn test_parse_overrides_max_arity_and_keeps_builtin_families() {
        let config = parse_config("max_arity = 4\n", Path::new("test.toml")).unwrap();
        assert_eq!(config.max_arity, 4);
        assert_eq!(config.families.len(), 5);
    }

    #[test]
    fn test_parse_custom_families() {
        let toml = r#"
[[families]]
name = "pipe"
function = "pipe"
handler = "Step"
mode = "state-only"
"#;
        let config = parse_config(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.max_arity, 9);
        assert_eq!(config.families.len(), 1);
        assert_eq!(config.families[0].mode, EmissionMode::StateOnly);
        assert!(!config.families[0].cleanup);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_config("max_overloads = 3\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_family() {
        let toml = r#"
[[families]]
name = "pipe"
function = "pipe"
handler = "Step"
mode = "state-only"
cleanup = true
"#;
        let err = parse_config(toml, Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, Error::InvalidFamily { .. }));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "max_arity = 3\n").unwrap();
        let nested = temp.path().join("src").join("types");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.max_arity, 3);
    }

    #[test]
    fn test_discover_config_ignores_malformed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "max_arity = [\n").unwrap();

        let config = discover_config(temp.path().to_path_buf());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(load_config(Some(&missing)).is_err());
    }
}
