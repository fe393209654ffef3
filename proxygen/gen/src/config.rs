//! Configuration.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. Command-line flags, or their `PROXYGEN_*` environment variables
//! 2. A TOML file passed with `--config`
//! 3. Built-in defaults
//!
//! ## Config File
//!
//! ```toml
//! url = "https://localhost:44300"
//! module = "app"
//! output = "src/api"
//! target = "ts"
//! timeout = 60
//!
//! [typescript]
//! http_client_module = "@/utils/request"
//! http_client_function = "request"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::emitter::typescript::types::is_identifier;
use crate::emitter::{EmitterOptions, TargetLanguage, TypeScriptOptions};
use crate::errors::GeneratorError;
use crate::fetch::DEFAULT_TIMEOUT_SECS;

/// Output root used when neither the command line nor the config file sets one.
pub const DEFAULT_OUTPUT: &str = ".";

/// Generates client proxies from a service's API definition.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "proxygen")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Base URL of the remote service (or a file:// URL of a saved definition)
    #[arg(short, long, env = "PROXYGEN_URL")]
    pub url: Option<String>,

    /// Module to generate proxies for (case-insensitive)
    #[arg(short, long, env = "PROXYGEN_MODULE")]
    pub module: Option<String>,

    /// Root directory for generated files [default: .]
    #[arg(short, long, value_name = "DIR", env = "PROXYGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Target language [default: ts]
    #[arg(short, long, value_enum)]
    pub target: Option<TargetLanguage>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Timeout for the API definition request, in seconds [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json: bool,
}

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub module: Option<String>,
    pub output: Option<PathBuf>,
    pub target: Option<TargetLanguage>,
    pub timeout: Option<u64>,
    pub typescript: TypeScriptOptions,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::ReadError`] if the file cannot be read and
    /// [`GeneratorError::ConfigError`] if it is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let content = std::fs::read_to_string(path).map_err(|source| GeneratorError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
            .map_err(|e| GeneratorError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Parses config TOML.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub url: String,
    pub module: String,
    pub output: PathBuf,
    pub target: TargetLanguage,
    pub dry_run: bool,
    pub timeout: Duration,
    pub emitter: EmitterOptions,
}

impl GeneratorConfig {
    /// Resolves command-line arguments, loading the config file they name.
    ///
    /// ## Errors
    ///
    /// Fails if the config file cannot be loaded, or see [`GeneratorConfig::merge`].
    pub fn resolve(cli: &CliArgs) -> Result<Self, GeneratorError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Merges command-line arguments over a config file and defaults.
    ///
    /// ## Errors
    ///
    /// - [`GeneratorError::MissingArgument`] when `url` or `module` is absent or blank
    /// - [`GeneratorError::ConfigError`] for a zero timeout or an HTTP helper
    ///   name that is not an identifier
    pub fn merge(cli: &CliArgs, file: FileConfig) -> Result<Self, GeneratorError> {
        let url = required(cli.url.clone().or(file.url), "url")?;
        let module = required(cli.module.clone().or(file.module), "module")?;

        let timeout_secs = cli
            .timeout
            .or(file.timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(GeneratorError::ConfigError(
                "timeout must be at least one second".to_string(),
            ));
        }

        if !is_identifier(&file.typescript.http_client_function) {
            return Err(GeneratorError::ConfigError(format!(
                "typescript.http_client_function '{}' is not a valid identifier",
                file.typescript.http_client_function
            )));
        }

        Ok(Self {
            url,
            module,
            output: cli
                .output
                .clone()
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            target: cli.target.or(file.target).unwrap_or_default(),
            dry_run: cli.dry_run,
            timeout: Duration::from_secs(timeout_secs),
            emitter: EmitterOptions {
                typescript: file.typescript,
            },
        })
    }
}

fn required(value: Option<String>, argument: &'static str) -> Result<String, GeneratorError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(GeneratorError::MissingArgument { argument })
}
