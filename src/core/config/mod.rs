//! core::config
//!
//! Configuration loading and validation.
//!
//! # Location
//!
//! Resolved in this order:
//! 1. `--config <path>` on the command line
//! 2. `$AITERM_CONFIG` if set
//! 3. `config.yaml` next to the running executable
//!
//! # Validation
//!
//! Loading is all-or-nothing. A missing file, unparsable YAML, a missing
//! `api_provider`, or a missing or placeholder API key for the selected
//! provider is an error, and no command runs.
//!
//! # Example
//!
//! ```no_run
//! use aiterm::core::config::Config;
//!
//! let path = Config::default_path().unwrap();
//! let config = Config::load(&path).unwrap();
//!
//! println!("Provider: {}", config.api_provider());
//! println!("Model: {}", config.provider_settings().model());
//! ```

pub mod schema;

pub use schema::{ConfigFile, ProviderSettings};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable that overrides the config location.
pub const CONFIG_ENV_VAR: &str = "AITERM_CONFIG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("API provider or API key missing in config")]
    MissingProvider,

    #[error("API key for {provider} is missing in config")]
    MissingApiKey { provider: String },

    #[error("API key for {provider} seems to be a placeholder. Please update {file}")]
    PlaceholderApiKey { provider: String, file: String },

    #[error("cannot locate the executable directory: {0}")]
    NoExecutableDir(std::io::Error),
}

/// Validated configuration.
///
/// Constructed once at startup and passed by reference to command handlers.
#[derive(Debug, Clone)]
pub struct Config {
    api_provider: String,
    debug_mode: bool,
    auto_fix_errors: bool,
    providers: BTreeMap<String, ProviderSettings>,
    path: PathBuf,
}

impl Config {
    /// Default config path: `config.yaml` beside the executable.
    ///
    /// Symlinks are resolved so an executable linked into `~/bin` still
    /// finds the config in its install directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::NoExecutableDir)?;
        let exe = fs::canonicalize(&exe).unwrap_or(exe);
        let dir = exe.parent().ok_or_else(|| {
            ConfigError::NoExecutableDir(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "executable has no parent directory",
            ))
        })?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Resolve the config path from an explicit override or the default.
    ///
    /// The `$AITERM_CONFIG` variable arrives through the `--config` flag.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load and validate configuration from `path`.
    ///
    /// # Errors
    ///
    /// Any failure is fatal for the caller; see [`ConfigError`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_yaml_str(&contents, path)
    }

    /// Parse and validate configuration from YAML text.
    ///
    /// `path` is only used for error messages and [`Config::path`].
    pub fn from_yaml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Err(ConfigError::MissingProvider);
        }

        let file: ConfigFile =
            serde_yaml::from_str(contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_file(file, path)
    }

    /// Validate a parsed config file.
    ///
    /// Provider names are matched case-insensitively: `api_provider` and the
    /// provider block keys are both normalised to lowercase.
    pub fn from_file(file: ConfigFile, path: &Path) -> Result<Self, ConfigError> {
        let api_provider = file
            .api_provider
            .as_deref()
            .map(normalize_provider)
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingProvider)?;

        let providers: BTreeMap<String, ProviderSettings> = file
            .providers
            .into_iter()
            .map(|(name, settings)| (normalize_provider(&name), settings))
            .collect();

        let settings = providers
            .get(&api_provider)
            .ok_or(ConfigError::MissingProvider)?;

        if settings.has_placeholder_key() {
            return Err(ConfigError::PlaceholderApiKey {
                provider: api_provider,
                file: CONFIG_FILE_NAME.to_string(),
            });
        }
        if settings.api_key().is_none() {
            return Err(ConfigError::MissingApiKey {
                provider: api_provider,
            });
        }

        Ok(Config {
            api_provider,
            debug_mode: file.debug_mode,
            auto_fix_errors: file.auto_fix_errors,
            providers,
            path: path.to_path_buf(),
        })
    }

    /// Name of the selected provider, lowercased.
    pub fn api_provider(&self) -> &str {
        &self.api_provider
    }

    /// Whether debug logging was requested in the file.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Whether the shell hook may request fixes automatically.
    pub fn auto_fix_errors(&self) -> bool {
        self.auto_fix_errors
    }

    /// Settings block of the selected provider.
    ///
    /// Always present: validation guarantees the block exists.
    pub fn provider_settings(&self) -> &ProviderSettings {
        &self.providers[&self.api_provider]
    }

    /// Settings block for any configured provider.
    pub fn settings_for(&self, provider: &str) -> Option<&ProviderSettings> {
        self.providers.get(&normalize_provider(provider))
    }

    /// Path the configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn normalize_provider(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"
api_provider: anthropic
debug_mode: false
auto_fix_errors: true
anthropic:
  api_key: sk-ant-test
  model: claude-3-haiku-20240307
"#;

    fn parse(yaml: &str) -> Result<Config, ConfigError> {
        Config::from_yaml_str(yaml, Path::new("config.yaml"))
    }

    mod load {
        use super::*;

        #[test]
        fn valid_file() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join(CONFIG_FILE_NAME);
            fs::write(&path, VALID).unwrap();

            let config = Config::load(&path).unwrap();

            assert_eq!(config.api_provider(), "anthropic");
            assert!(config.auto_fix_errors());
            assert!(!config.debug_mode());
            assert_eq!(config.provider_settings().model(), "claude-3-haiku-20240307");
            assert_eq!(config.path(), path.as_path());
        }

        #[test]
        fn missing_file() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("nope.yaml");

            let err = Config::load(&path).unwrap_err();
            assert!(matches!(err, ConfigError::NotFound { .. }));
            assert!(err.to_string().contains("nope.yaml"));
        }

        #[test]
        fn malformed_yaml() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join(CONFIG_FILE_NAME);
            fs::write(&path, "api_provider: [unclosed\n").unwrap();

            let err = Config::load(&path).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { .. }));
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn empty_file() {
            assert!(matches!(parse(""), Err(ConfigError::MissingProvider)));
        }

        #[test]
        fn missing_api_provider() {
            let err = parse("anthropic:\n  api_key: sk-test\n").unwrap_err();
            assert!(matches!(err, ConfigError::MissingProvider));
        }

        #[test]
        fn missing_provider_block() {
            let err = parse("api_provider: anthropic\n").unwrap_err();
            assert!(matches!(err, ConfigError::MissingProvider));
        }

        #[test]
        fn missing_api_key() {
            let err = parse("api_provider: anthropic\nanthropic:\n  model: m\n").unwrap_err();
            assert!(matches!(err, ConfigError::MissingApiKey { .. }));
        }

        #[test]
        fn empty_api_key() {
            let err = parse("api_provider: anthropic\nanthropic:\n  api_key: \"\"\n").unwrap_err();
            assert!(matches!(err, ConfigError::MissingApiKey { .. }));
        }

        #[test]
        fn placeholder_api_key() {
            let err = parse("api_provider: anthropic\nanthropic:\n  api_key: YOUR_API_KEY_HERE\n")
                .unwrap_err();

            assert!(matches!(err, ConfigError::PlaceholderApiKey { .. }));
            assert!(err.to_string().contains("placeholder"));
        }

        #[test]
        fn unknown_provider_with_key_loads() {
            // Dispatch, not loading, rejects unknown providers.
            let config = parse("api_provider: gemini\ngemini:\n  api_key: g-key\n").unwrap();
            assert_eq!(config.api_provider(), "gemini");
        }

        #[test]
        fn provider_name_is_case_insensitive() {
            let config =
                parse("api_provider: Anthropic\nanthropic:\n  api_key: sk-ant-test\n").unwrap();
            assert_eq!(config.api_provider(), "anthropic");
            assert!(config.provider_settings().api_key().is_some());

            let config = parse("api_provider: openai\nOpenAI:\n  api_key: sk-openai\n").unwrap();
            assert_eq!(config.api_provider(), "openai");
            assert!(config.settings_for("OPENAI").is_some());
        }

        #[test]
        fn other_provider_blocks_are_kept() {
            let config = parse(&format!("{}openai:\n  api_key: sk-openai\n", VALID)).unwrap();
            assert!(config.settings_for("openai").is_some());
            assert!(config.settings_for("mistral").is_none());
        }
    }

    #[test]
    fn resolve_path_prefers_explicit() {
        let explicit = Path::new("/tmp/custom.yaml");
        assert_eq!(Config::resolve_path(Some(explicit)).unwrap(), explicit);
    }

    #[test]
    fn default_path_is_beside_executable() {
        let path = Config::default_path().unwrap();
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
    }
}
