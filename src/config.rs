//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bundle server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend (`trunk build` output)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("climate-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the SPA shell inside the bundle
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from the first default location that exists, or from defaults
    ///
    /// A file that exists but cannot be read or parsed is an error rather
    /// than a reason to fall through to the next location.
    pub fn load_default() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_first(&default_paths(), |key| std::env::var(key).ok())
    }

    fn load_first(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        let (mut config, source) = match paths.iter().find(|path| path.exists()) {
            Some(path) => (Self::load(path)?, ConfigSource::File(path.clone())),
            None => (Config::default(), ConfigSource::Defaults),
        };

        config.apply_overrides(lookup)?;
        Ok((config, source))
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any `CLIMATE_DASHBOARD_*` lookup
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("CLIMATE_DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CLIMATE_DASHBOARD_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "CLIMATE_DASHBOARD_PORT",
                value: port,
            })?;
        }
        if let Some(dist_dir) = lookup("CLIMATE_DASHBOARD_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        if let Some(level) = lookup("CLIMATE_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CLIMATE_DASHBOARD_LOG_FORMAT") {
            self.logging.format =
                LogFormat::parse(&format).ok_or(ConfigError::InvalidEnv {
                    key: "CLIMATE_DASHBOARD_LOG_FORMAT",
                    value: format,
                })?;
        }

        Ok(())
    }
}

/// Config file locations searched by [`Config::load_default`], in order
pub fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("climate-dashboard").join("config.toml")),
        Some(PathBuf::from("/etc/climate-dashboard/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Climate Dashboard Configuration
#
# Environment variables override these settings:
# - CLIMATE_DASHBOARD_HOST
# - CLIMATE_DASHBOARD_PORT
# - CLIMATE_DASHBOARD_DIST_DIR
# - CLIMATE_DASHBOARD_LOG_LEVEL
# - CLIMATE_DASHBOARD_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

# Built frontend bundle (output of `trunk build` in climate-ui/)
dist_dir = "climate-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(
            config.server.index_path(),
            PathBuf::from("climate-ui/dist/index.html")
        );
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let file = write_config(&generate_default_config());
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n");
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load(Path::new("/nonexistent/climate-dashboard.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[server\nport = ");
        let result = Config::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_overrides() {
        let vars = [
            ("CLIMATE_DASHBOARD_HOST", "127.0.0.1"),
            ("CLIMATE_DASHBOARD_PORT", "3000"),
            ("CLIMATE_DASHBOARD_DIST_DIR", "/srv/dashboard"),
            ("CLIMATE_DASHBOARD_LOG_LEVEL", "debug"),
            ("CLIMATE_DASHBOARD_LOG_FORMAT", "JSON"),
        ];

        let mut config = Config::default();
        config.apply_overrides(lookup_from(&vars)).unwrap();

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/dashboard"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("CLIMATE_DASHBOARD_PORT", "not-a-port")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { key: "CLIMATE_DASHBOARD_PORT", .. })
        ));
    }

    #[test]
    fn test_invalid_format_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("CLIMATE_DASHBOARD_LOG_FORMAT", "xml")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { key: "CLIMATE_DASHBOARD_LOG_FORMAT", .. })
        ));
    }

    #[test]
    fn test_load_first_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = [dir.path().join("config.toml")];

        let (config, source) = Config::load_first(&paths, lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_load_first_picks_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "[server]\nport = 9001\n").unwrap();
        std::fs::write(&second, "[server]\nport = 9002\n").unwrap();

        let paths = [missing, first.clone(), second];
        let (config, source) =
            Config::load_first(&paths, lookup_from(&[("CLIMATE_DASHBOARD_HOST", "::1")])).unwrap();

        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "::1");
        assert_eq!(source, ConfigSource::File(first));
    }

    #[test]
    fn test_load_first_fails_on_broken_file() {
        let broken = write_config("[server\nport = ");
        let fallback = write_config("[server]\nport = 9002\n");
        let paths = [broken.path().to_path_buf(), fallback.path().to_path_buf()];

        let result = Config::load_first(&paths, lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::Parse { ref path, .. }) if path == broken.path()));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");
        assert_eq!(
            ConfigSource::File(PathBuf::from("/etc/climate-dashboard/config.toml")).to_string(),
            "/etc/climate-dashboard/config.toml"
        );
    }
}
