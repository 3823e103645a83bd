use crate::domain::debounce::SearchConfig;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteType,
    pub search: SearchConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Defaults to `lull.log` next to the config file.
    pub file: Option<PathBuf>,
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("lull");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    /// Reads the default config file, falling back to the defaults when there is none.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log
            .file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("lull.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.input_id, "searchInput");
        assert_eq!(config.search.form_id, "filterForm");
        assert_eq!(config.search.delay_ms, 300);
        assert!(config.log.file.is_none());
        assert_eq!(config.palette, PaletteType::Nord);
    }

    #[test]
    fn test_palette_key_round_trips() {
        let config: Config = toml::from_str(r#"palette = "catppuccin""#).unwrap();
        assert_eq!(config.palette, PaletteType::Catppuccin);

        let written = toml::to_string(&config).unwrap();
        assert!(written.contains(r#"palette = "catppuccin""#), "{written}");
        assert_eq!(toml::from_str::<Config>(&written).unwrap(), config);

        assert!(toml::from_str::<Config>(r#"palette = "solarized""#).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            palette: PaletteType::Catppuccin,
            search: SearchConfig {
                delay_ms: 150,
                ..SearchConfig::default()
            },
            log: LogConfig {
                file: Some(dir.path().join("out.log")),
            },
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\ndelay_ms = 500").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.search.delay_ms, 500);
        assert_eq!(config.search.form_id, "filterForm");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\ndelay_ms = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
