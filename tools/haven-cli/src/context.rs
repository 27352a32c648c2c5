//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use haven_commerce::Currency;

use crate::config::{HavenConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: HavenConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading `config_path` or the nearest config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => HavenConfig::load(path)?,
            None => HavenConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Configured store currency.
    pub fn currency(&self) -> Result<Currency> {
        self.config
            .store
            .currency()
            .context("Invalid store.currency in config")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".haven.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, root.path().join(".haven.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest_and_order() {
        let root = tempfile::tempdir().unwrap();
        let child = root.path().join("shop");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(root.path().join("haven.toml"), "").unwrap();
        std::fs::write(child.join("haven.json"), "{}").unwrap();
        std::fs::write(child.join("haven.toml"), "").unwrap();

        assert_eq!(find_config(&child).unwrap(), child.join("haven.toml"));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(cwd, "out/index.html"), PathBuf::from("/work/out/index.html"));
        assert_eq!(resolve(cwd, "/tmp/x.html"), PathBuf::from("/tmp/x.html"));
    }
}
