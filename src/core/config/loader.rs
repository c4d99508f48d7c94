use std::{fs, io, path::Path};

use log::debug;

use super::{Config, ConfigError};

pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load_into(&self, config: &mut Config) -> Result<(), ConfigError> {
        let content = match fs::read_to_string(self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config file at {}", self.path.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for (idx, line) in content.lines().enumerate() {
            self.process_line(idx + 1, line, config)?;
        }
        Ok(())
    }

    fn process_line(
        &self,
        line_no: usize,
        line: &str,
        config: &mut Config,
    ) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::Parse {
            line: line_no,
            message: format!("expected key = value, found '{}'", line),
        })?;
        let key = key.trim();
        let value = unquote(value.trim());

        match key {
            "color" => {
                config.color = value.parse().map_err(|message| ConfigError::Parse {
                    line: line_no,
                    message,
                })?;
            }
            "log_level" => config.log_level = value.to_string(),
            _ => config.ignored_keys.push(key.to_string()),
        }
        Ok(())
    }
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
