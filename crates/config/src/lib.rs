//! Configuration management for viewcall
//!
//! The configuration lives in `$HOME/.viewcall/config.toml` and is created with defaults the first
//! time it is loaded. When MESC is enabled, its default endpoint for the `viewcall` profile
//! overrides the configured `rpc_url`.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use viewcall_common::utils::io::file::{delete_path, read_file, write_file};

/// The MESC profile queried for endpoints.
const MESC_PROFILE: &str = "viewcall";

/// Every key accepted by `viewcall config KEY VALUE`.
pub const CONFIG_KEYS: [&str; 2] = ["rpc_url", "local_rpc_url"];

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "viewcall config [KEY] [VALUE]"
)]
pub struct ConfigArgs {
    /// The target key to show or update.
    #[clap(required = false, default_value = "")]
    pub key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    pub value: String,
}

/// The [`Configuration`] struct represents the persisted settings of the CLI. The `call` command
/// falls back to it when no `--rpc-url` is given.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The URL for the Ethereum RPC endpoint
    pub rpc_url: String,

    /// The URL for a local Ethereum RPC endpoint, used when `rpc_url` is empty
    pub local_rpc_url: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            rpc_url: String::new(),
            local_rpc_url: "http://localhost:8545".to_string(),
        }
    }
}

/// `$HOME/.viewcall/config.toml`
#[allow(deprecated)]
fn config_path() -> Result<String, Error> {
    let mut path: PathBuf = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    path.push(".viewcall");
    path.push("config.toml");

    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

impl Configuration {
    /// Returns the current configuration, creating the file with defaults if it doesn't exist.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        if !std::path::Path::new(&path).exists() {
            debug!("no config file at {}, writing defaults", path);
            Configuration::default().save()?;
        }

        let contents = read_file(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;
        let mut config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        if !mesc::is_mesc_enabled() {
            return Ok(config);
        }

        if let Some(endpoint) = mesc::get_default_endpoint(Some(MESC_PROFILE))? {
            debug!("overriding rpc_url with mesc endpoint '{}'", endpoint.name);
            config.rpc_url = endpoint.url;
        }

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        write_file(
            &config_path()?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.viewcall/config.toml`.
    pub fn delete() -> Result<(), Error> {
        delete_path(&config_path()?);
        Ok(())
    }

    /// Returns the value of a single key.
    pub fn get(&self, key: &str) -> Result<&str, Error> {
        match key {
            "rpc_url" => Ok(&self.rpc_url),
            "local_rpc_url" => Ok(&self.local_rpc_url),
            _ => Err(Error::InvalidKey(key.to_string())),
        }
    }

    /// Update a single key/value pair in the configuration and persist it.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "rpc_url" => self.rpc_url = value.to_string(),
            "local_rpc_url" => self.local_rpc_url = value.to_string(),
            _ => return Err(Error::InvalidKey(key.to_string())),
        }

        self.save()
    }

    /// Picks the endpoint for a call: an explicit `--rpc-url` wins, then `rpc_url`, then
    /// `local_rpc_url`.
    pub fn resolve_rpc_url(&self, explicit: &str) -> String {
        [explicit, self.rpc_url.as_str(), self.local_rpc_url.as_str()]
            .into_iter()
            .find(|url| !url.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    let mut config = Configuration::load()?;

    match (args.key.is_empty(), args.value.is_empty()) {
        (true, _) => {
            let contents = toml::to_string(&config)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?;
            println!("{}", contents.trim_end());
            info!("use `viewcall config <KEY> <VALUE>` to set a key/value pair.");
        }
        (false, true) => {
            println!("{}", config.get(&args.key)?);
            warn!("found key but no value to set. use `viewcall config <KEY> <VALUE>` to update it.");
        }
        (false, false) => {
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set '{}' = '{}'.", &args.key, &args.value);
        }
    }

    Ok(())
}

/// Parse user input --rpc-url into a full url. With MESC enabled, network names and endpoint
/// aliases resolve to their configured URL.
pub fn parse_url_arg(url: &str) -> Result<String, String> {
    if mesc::is_mesc_enabled() {
        if let Ok(Some(endpoint)) = mesc::get_endpoint_by_query(url, Some(MESC_PROFILE)) {
            return Ok(endpoint.url);
        }
    }
    Ok(url.to_string())
}
