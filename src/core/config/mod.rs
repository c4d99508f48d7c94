use std::{fmt, path::Path, str::FromStr};

mod loader;
mod paths;

use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// When diagnostics on stderr get coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{}' (expected auto, always or never)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub log_level: String,
    ignored_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            log_level: "off".to_string(),
            ignored_keys: Vec::new(),
        }
    }
}

impl Config {
    /// Reads `~/.myshellrc` if there is one, then applies `NO_COLOR`.
    pub fn load() -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new();
        let mut config = match paths.rc_path.as_deref() {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.apply_env(std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()));
        Ok(config)
    }

    /// Reads one config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        ConfigLoader::new(path).load_into(&mut config)?;
        Ok(config)
    }

    pub fn apply_env(&mut self, no_color: bool) {
        if no_color {
            self.color = ColorMode::Never;
        }
    }

    /// Keys found in the file that this version does not know about.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    Parse { line: usize, message: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("Never".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.log_level, "off");
        assert!(config.ignored_keys().is_empty());
    }

    #[test]
    fn test_no_color_overrides_file() {
        let mut config = Config {
            color: ColorMode::Always,
            ..Config::default()
        };
        config.apply_env(false);
        assert_eq!(config.color, ColorMode::Always);
        config.apply_env(true);
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            line: 3,
            message: "expected key = value".to_string(),
        };
        assert_eq!(err.to_string(), "line 3: expected key = value");
    }
}
