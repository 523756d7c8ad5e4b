use std::{env, fmt, fs, path, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uptime::{
    DEFAULT_INTERVAL_MS, DEFAULT_MAX_CONCURRENT_PROBES, DEFAULT_THRESHOLD_MS, DEFAULT_TIMEOUT_MS,
    MIN_INTERVAL_MS,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Neither XDG_CONFIG_HOME nor a home directory is available")]
    ConfigPathUnavailable,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub monitoring: Monitoring,
    /// Websites registered at startup
    pub websites: Vec<WebsiteEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitoring {
    pub interval_ms: u64,
    pub threshold_ms: u64,
    pub timeout_ms: u64,
    /// Probes in flight at once during one sweep
    pub max_concurrent_probes: usize,
    /// Entries served by the combined feed
    pub feed_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteEntry {
    pub name: String,
    pub url: String,
}

impl Default for Server {
    fn default() -> Self {
        Self { bind: "0.0.0.0".into(), port: 8080 }
    }
}

impl Default for Monitoring {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            threshold_ms: DEFAULT_THRESHOLD_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            feed_limit: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { server: Server::default(), monitoring: Monitoring::default(), websites: Vec::new() }
    }
}

/// Used to ensure we are actually reading a toml file
fn normalize_toml_path(path: &path::Path) -> path::PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().map(|ext| ext != "toml").unwrap_or(true) {
        path.set_extension("toml");
    }
    path
}

/// Get default config path ($XDG_CONFIG_HOME/uptime/config.toml or
/// $HOME/.config/...)
fn default_config_path() -> Result<path::PathBuf, Error> {
    let path = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        path::PathBuf::from(config_home)
    } else if let Some(home_dir) = env::home_dir() {
        home_dir.join(".config")
    } else {
        return Err(Error::ConfigPathUnavailable);
    };

    Ok(path.join("uptime/config.toml"))
}

/// Overwrite `target` with the parsed value of `name`, if set and valid
fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, target: &mut T)
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = lookup(name) else { return };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(e) => warn!("Ignoring {name}={raw:?}: {e}"),
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str, value: &dyn fmt::Display| {
                writeln!(f, "  {:indent$}{}: {}", "", label, value, indent = level * 2)
            }
        };
        let write_title_indented = |level: usize| {
            move |f: &mut fmt::Formatter<'_>, label: &str| {
                writeln!(f, "{:indent$}{}", "", label, indent = level * 2)
            }
        };

        let write_title_1 = write_title_indented(1);
        let write_1 = write_indented(1);

        writeln!(f, "Current Configuration State:")?;
        write_title_1(f, "Server")?;
        write_1(f, "Bind Address", &self.server.bind)?;
        write_1(f, "Port", &self.server.port)?;
        write_title_1(f, "Monitoring")?;
        write_1(f, "Interval (ms)", &self.monitoring.interval_ms)?;
        write_1(f, "Slow Threshold (ms)", &self.monitoring.threshold_ms)?;
        write_1(f, "Timeout (ms)", &self.monitoring.timeout_ms)?;
        write_1(f, "Max Concurrent Probes", &self.monitoring.max_concurrent_probes)?;
        write_1(f, "Feed Limit", &self.monitoring.feed_limit)?;
        write_title_1(f, "Websites")?;
        for website in &self.websites {
            write_1(f, &website.name, &website.url)?;
        }

        Ok(())
    }
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/uptime/config.toml
    ///  or the specified path, with the name config.toml if one does not exist
    ///
    /// ```ignore
    /// let cfg = config::Config::from_config(None::<&path::Path>)?;
    /// println!("{}", cfg);
    /// ```
    pub fn from_config(optional_path: Option<impl AsRef<path::Path>>) -> Result<Self, Error> {
        let config_path: path::PathBuf = if let Some(path) = optional_path {
            normalize_toml_path(path.as_ref())
        } else {
            default_config_path()?
        };

        if config_path.exists() {
            let raw_string = fs::read_to_string(&config_path).map_err(Error::ReadFailed)?;
            Ok(toml::from_str(raw_string.as_str())?)
        } else {
            let config = Self::default();
            config.write_config(&config_path)?;
            Ok(config)
        }
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &path::Path) -> Result<(), Error> {
        let config_str: String = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::WriteFailed)?;
        }

        fs::write(path, config_str).map_err(Error::WriteFailed)
    }

    /// Apply `BIND`, `PORT`, `POLL_INTERVAL_MS`, `SLOW_THRESHOLD_MS` and
    /// `PROBE_TIMEOUT_MS` from the environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| env::var(name).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = lookup("BIND") {
            self.server.bind = bind;
        }
        override_from(&lookup, "PORT", &mut self.server.port);
        override_from(&lookup, "POLL_INTERVAL_MS", &mut self.monitoring.interval_ms);
        override_from(&lookup, "SLOW_THRESHOLD_MS", &mut self.monitoring.threshold_ms);
        override_from(&lookup, "PROBE_TIMEOUT_MS", &mut self.monitoring.timeout_ms);
    }

    pub fn validate(&self) -> Result<(), Error> {
        let monitoring = &self.monitoring;
        for (label, value) in [
            ("interval_ms", monitoring.interval_ms),
            ("threshold_ms", monitoring.threshold_ms),
            ("timeout_ms", monitoring.timeout_ms),
        ] {
            if value == 0 {
                return Err(Error::Invalid(format!("{label} must be greater than zero")));
            }
        }
        // Websites inherit the poll interval, so it has to pass the same bound.
        if monitoring.interval_ms < MIN_INTERVAL_MS {
            return Err(Error::Invalid(format!("interval_ms must be at least {MIN_INTERVAL_MS}")));
        }
        if monitoring.max_concurrent_probes == 0 {
            return Err(Error::Invalid("max_concurrent_probes must be greater than zero".into()));
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}
