use std::io::{self, IsTerminal};

use inksac::prelude::*;

use crate::core::config::ColorMode;

/// Colours the `<command>:` prefix of diagnostic lines.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    enabled: bool,
}

impl Highlighter {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                io::stderr().is_terminal()
                    && !matches!(
                        check_color_support().unwrap_or(ColorSupport::NoColor),
                        ColorSupport::NoColor
                    )
            }
        };
        Self { enabled }
    }

    /// A highlighter that never adds escape sequences.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn highlight_diagnostic(&self, line: &str) -> String {
        if !self.enabled {
            return line.to_string();
        }

        let Some((prefix, rest)) = line.split_once(": ") else {
            return line.to_string();
        };

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        format!("{}: {}", prefix.style(error_style), rest)
    }
}
