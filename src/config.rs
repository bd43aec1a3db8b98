//! Runtime configuration for the binary: environment names and logging setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Selects the output format when `--format` is not given.
pub const ENV_FORMAT: &str = "IP_RANGE_OPS_FORMAT";
/// Path of the log4rs configuration file.
pub const ENV_LOG_CONFIG: &str = "IP_RANGE_OPS_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Log config path from the environment, else [`DEFAULT_LOG_CONFIG`].
pub fn log_config_path() -> String {
    std::env::var(ENV_LOG_CONFIG).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string())
}

/// Initialise log4rs from the config file, or a stderr logger at `warn`
/// when the file does not exist.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let config_path = log_config_path();
    if Path::new(&config_path).exists() {
        log4rs::init_file(&config_path, Default::default())?;
        log::debug!("Logging configured from {config_path}");
    } else {
        log4rs::init_config(fallback_config(LevelFilter::Warn)?)?;
        log::debug!("No log config at {config_path}, logging to stderr");
    }
    Ok(())
}

// stdout carries command output, so logs go to stderr.
fn fallback_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
