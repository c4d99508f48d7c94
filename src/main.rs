use std::io::{self, IsTerminal};

use log::{debug, warn};
use myshell::core::config::Config;
use myshell::highlight::Highlighter;
use myshell::input::{EditorSource, ReaderSource};
use myshell::Shell;

fn main() {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        eprintln!("myshell: ignoring ~/.myshellrc: {}", e);
    }
    for key in config.ignored_keys() {
        warn!("unknown config key '{}'", key);
    }
    debug!("config: {:?}", config);

    let highlighter = Highlighter::new(config.color);

    let editor = if io::stdin().is_terminal() {
        EditorSource::new()
            .map_err(|e| warn!("line editor unavailable, reading plain input: {}", e))
            .ok()
    } else {
        None
    };

    let result = match editor {
        Some(source) => Shell::new(source, io::stdout(), io::stderr(), highlighter).run(),
        None => Shell::new(
            ReaderSource::new(io::stdin().lock()),
            io::stdout(),
            io::stderr(),
            highlighter,
        )
        .run(),
    };

    // The exit status stays 0 even when the interpreter's own streams fail.
    if let Err(e) = result {
        eprintln!("myshell: {}", e);
    }
}
