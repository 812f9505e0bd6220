use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pokebat_battle::{Catalog, CatalogError};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(120);

/// Runtime settings for the server and every session it hosts
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// How long the turn owner may take before forfeiting. `None` waits forever.
    pub turn_timeout: Option<Duration>,

    /// Seed for match randomness, for reproducible matches
    pub seed: Option<u64>,

    /// Host one match and exit instead of serving pairs forever
    pub single_match: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            catalog_path: None,
            turn_timeout: Some(DEFAULT_TURN_TIMEOUT),
            seed: None,
            single_match: false,
        }
    }
}

impl ServerConfig {
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

/// Command line flags for the `pokebat-server` binary
#[derive(Debug, Parser)]
#[command(name = "pokebat-server", about = "Two-player pokebat battle server")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// JSON catalog of combatant templates
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seconds the turn owner has to act; 0 disables the limit
    #[arg(long, default_value_t = DEFAULT_TURN_TIMEOUT.as_secs())]
    pub turn_timeout_secs: u64,

    /// Seed for match randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Exit after one match
    #[arg(long)]
    pub single: bool,
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            bind_addr: args.bind,
            catalog_path: args.catalog,
            turn_timeout: (args.turn_timeout_secs > 0)
                .then(|| Duration::from_secs(args.turn_timeout_secs)),
            seed: args.seed,
            single_match: args.single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: ServerConfig = ServerArgs::try_parse_from(["pokebat-server"])
            .unwrap()
            .into();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.turn_timeout, Some(DEFAULT_TURN_TIMEOUT));
        assert!(config.catalog_path.is_none());
        assert!(!config.single_match);
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config: ServerConfig = ServerArgs::try_parse_from([
            "pokebat-server",
            "--bind",
            "127.0.0.1:9000",
            "--turn-timeout-secs",
            "0",
            "--seed",
            "11",
            "--single",
        ])
        .unwrap()
        .into();

        assert_eq!(config.turn_timeout, None);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(config.single_match);
    }

    #[test]
    fn test_builtin_catalog_when_unset() {
        let catalog = ServerConfig::default().load_catalog().unwrap();
        assert!(!catalog.is_empty());
    }
}
