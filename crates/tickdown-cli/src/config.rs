use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::path::PathBuf;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TICKDOWN_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.tickdown (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TICKDOWN_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tickdown"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tickdown"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Span of the countdown a fresh widget starts with, in seconds
    pub duration_secs: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { duration_secs: 60 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw the progress meter with block glyphs; plain ASCII otherwise
    pub unicode: bool,
    /// What the countdown readout shows once the end instant has passed
    pub finished_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            finished_text: "🎉".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.defaults.duration_secs, 60);
        assert!(config.display.unicode);
        assert_eq!(config.display.finished_text, "🎉");
    }

    #[test]
    fn test_full_file_overrides_every_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[defaults]\nduration_secs = 300\n\n[display]\nunicode = false\nfinished_text = \"DONE\"\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.defaults.duration_secs, 300);
        assert!(!config.display.unicode);
        assert_eq!(config.display.finished_text, "DONE");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.defaults.duration_secs, 60);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[defaults]\nduration_secs = 90\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.defaults.duration_secs, 90);
        assert!(config.display.unicode);
        assert_eq!(config.display.finished_text, "🎉");

        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[defaults\nduration_secs = ")?;

        assert!(Config::load_from(&config_path).is_err());

        Ok(())
    }
}
