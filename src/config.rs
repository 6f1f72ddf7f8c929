//! Runtime configuration and logging bootstrap.
//!
//! Settings come from the environment (a `.env` file is loaded by `main`):
//! - `NETCALC_PRESETS` - `label=network/cidr` entries separated by `;`
//! - `NETCALC_LOG_CONFIG` - path of the log4rs yaml file
//! - `NETCALC_FADE_MS` / `NETCALC_HIDE_MS` - copy indicator timings

use crate::models::{default_presets, parse_presets, Preset};
use crate::processing::FeedbackTimings;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Settings for the netcalc binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub presets: Vec<Preset>,
    pub log_config: PathBuf,
    pub feedback: FeedbackTimings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            presets: default_presets(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            feedback: FeedbackTimings::default(),
        }
    }
}

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let presets = match lookup("NETCALC_PRESETS") {
            Some(text) => parse_presets(&text).map_err(|e| format!("NETCALC_PRESETS: {e}"))?,
            None => default_presets(),
        };

        let log_config = lookup("NETCALC_LOG_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG));

        let defaults = FeedbackTimings::default();
        let feedback = FeedbackTimings {
            fade_after: read_millis(&lookup, "NETCALC_FADE_MS")?.unwrap_or(defaults.fade_after),
            hide_after: read_millis(&lookup, "NETCALC_HIDE_MS")?.unwrap_or(defaults.hide_after),
        };
        if feedback.hide_after < feedback.fade_after {
            return Err(format!(
                "NETCALC_HIDE_MS ({}ms) must not be earlier than NETCALC_FADE_MS ({}ms)",
                feedback.hide_after.as_millis(),
                feedback.fade_after.as_millis()
            )
            .into());
        }

        Ok(Config {
            presets,
            log_config,
            feedback,
        })
    }
}

fn read_millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, Box<dyn Error>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => {
            let ms: u64 = value
                .trim()
                .parse()
                .map_err(|e| format!("{key}={value:?} is not a number of milliseconds: {e}"))?;
            Ok(Some(Duration::from_millis(ms)))
        }
        None => Ok(None),
    }
}

/// Initialise log4rs from `path`, or log warnings to stderr when the file is
/// missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("No {} found, using built-in logging", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("Error building config");
        assert_eq!(config, Config::default());
        assert_eq!(config.presets.len(), 2);
        assert_eq!(config.feedback.fade_after, Duration::from_millis(1500));
        assert_eq!(config.feedback.hide_after, Duration::from_millis(2000));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("NETCALC_PRESETS", "lab=10.0.0.0/8"),
            ("NETCALC_LOG_CONFIG", "/tmp/netcalc-log.yml"),
            ("NETCALC_FADE_MS", "100"),
            ("NETCALC_HIDE_MS", " 250 "),
        ]))
        .expect("Error building config");
        assert_eq!(config.presets, vec![Preset::new("lab", "10.0.0.0/8")]);
        assert_eq!(config.log_config, PathBuf::from("/tmp/netcalc-log.yml"));
        assert_eq!(config.feedback.fade_after, Duration::from_millis(100));
        assert_eq!(config.feedback.hide_after, Duration::from_millis(250));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(Config::from_lookup(lookup_from(&[("NETCALC_FADE_MS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("NETCALC_PRESETS", "broken")])).is_err());
        let err = Config::from_lookup(lookup_from(&[
            ("NETCALC_FADE_MS", "500"),
            ("NETCALC_HIDE_MS", "100"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("must not be earlier"));
    }
}
