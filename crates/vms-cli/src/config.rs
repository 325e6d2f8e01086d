//! Configuration loading for the CLI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use vms_app::AppConfig;

/// Defaults, then the TOML file if present, then `VMS_*` variables, then the
/// `--api-url` flag.
pub fn load(path: &Path, api_url: Option<&str>) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path)
        .with_context(|| format!("Loading {}", path.display()))?;
    config.merge_with_env()?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}

/// Session file: configured path, else `<config dir>/vms/session.json`.
pub fn session_path(config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = &config.session.path {
        return Ok(path.clone());
    }
    let base = dirs::config_dir().context("No user config directory; set VMS_SESSION_PATH")?;
    Ok(base.join("vms").join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"http://from-file:8080\"\n[session]\npath = \"/tmp/s.json\"\n",
        )
        .unwrap();

        let config = load(&path, Some("http://from-flag:8080")).unwrap();
        assert_eq!(config.base_url(), "http://from-flag:8080");
        assert_eq!(session_path(&config).unwrap(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn test_bad_flag_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load(&missing, Some("ftp://nope")).is_err());
    }
}
