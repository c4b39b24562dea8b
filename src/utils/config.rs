use crate::index::IndexConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sufx";
const CONFIG_FILE: &str = "config.json";

/// Path of the per-user config file (`<config dir>/sufx/config.json`)
pub fn get_config_path() -> Result<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux: XDG_CONFIG_HOME or ~/.config; macOS: ~/Library/Application Support
        dirs::config_dir()
    };

    let base = base.context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}

/// Load the index configuration.
///
/// An explicit path must exist. Without one, the per-user config file is
/// used when present and the defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<IndexConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                return Ok(IndexConfig::default());
            }
            default_path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: IndexConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Write `config` as pretty JSON, creating parent directories
pub fn save_config(config: &IndexConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content).context("Failed to write config file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let config = IndexConfig {
            case_insensitive: true,
            max_input_size: 1024,
            ..Default::default()
        };
        save_config(&config, &path).unwrap();

        let loaded = load_config(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "case_insensitive": true }"#).unwrap();

        let loaded = load_config(Some(path.as_path())).unwrap();
        assert!(loaded.case_insensitive);
        assert_eq!(loaded.max_input_size, IndexConfig::default().max_input_size);
        assert!(loaded.build_tree);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp_dir = tempdir().unwrap();
        let err = load_config(Some(temp_dir.path().join("absent.json").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        if let Ok(path) = get_config_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(CONFIG_FILE)));
        }
    }
}
