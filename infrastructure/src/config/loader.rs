//! Configuration file loader with multi-source merging.

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Configuration loader that handles file discovery and merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority.
    ///
    /// Priority (highest to lowest):
    /// 1. `CONFERO_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./confero.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        let project = Path::new("confero.toml");
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("CONFERO_"))
            .extract()
            .map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Load only default configuration.
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.review_quorum, "all");
        assert_eq!(config.default_review_days, 21);
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("confero.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "review_quorum = \"atleast:3\"").unwrap();
        writeln!(file, "comment_max_chars = 500").unwrap();
        drop(file);

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.review_quorum, "atleast:3");
        assert_eq!(config.comment_max_chars, 500);
        // Untouched keys keep their defaults
        assert_eq!(config.default_review_days, 21);
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("override.toml", "default_review_days = 7")?;
            jail.set_env("CONFERO_DEFAULT_REVIEW_DAYS", "14");

            let path = PathBuf::from("override.toml");
            let config = ConfigLoader::load(Some(&path)).unwrap();
            assert_eq!(config.default_review_days, 14);
            Ok(())
        });
    }
}
