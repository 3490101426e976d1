use crate::config::Config;
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Shared per-invocation state: the data directory plus a lazily loaded
/// config. Handlers that never touch the config never pay for reading it.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_is_loaded_lazily() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf());

        assert!(
            ctx.config.get().is_none(),
            "Config should not be loaded initially"
        );

        let config = ctx.config().unwrap();
        assert_eq!(config.defaults.duration_secs, 60);
        assert!(
            ctx.config.get().is_some(),
            "Config should be loaded after access"
        );
    }

    #[test]
    fn test_config_comes_from_the_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[defaults]\nduration_secs = 600\n").unwrap();

        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf());
        assert_eq!(ctx.config().unwrap().defaults.duration_secs, 600);
    }

    #[test]
    fn test_data_dir_access() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();
        let ctx = ExecutionContext::new(data_dir.clone());

        assert_eq!(ctx.data_dir(), data_dir.as_path());
    }
}
