use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Parser)]
#[command(name = "phonebook")]
#[command(about = "Phonebook REST service")]
pub struct Cli {
    /// Listening port. Overrides the PORT environment variable.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding a pre-built front-end to serve alongside the API.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Serve files from here, falling back to its `index.html`.
    pub static_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: None,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Resolves the port from the flag, then `PORT`, then the default.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            port: resolve_port(cli.port, std::env::var("PORT").ok().as_deref()),
            static_dir: cli.static_dir,
            verbose: cli.verbose,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Unset or unparseable env values fall back to [`DEFAULT_PORT`].
pub fn resolve_port(flag: Option<u16>, env: Option<&str>) -> u16 {
    flag.or_else(|| env.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        assert_eq!(resolve_port(Some(8080), Some("4000")), 8080);
    }

    #[test]
    fn env_used_without_flag() {
        assert_eq!(resolve_port(None, Some("4000")), 4000);
    }

    #[test]
    fn unset_env_uses_default() {
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn garbage_env_uses_default() {
        assert_eq!(resolve_port(None, Some("http")), DEFAULT_PORT);
        assert_eq!(resolve_port(None, Some("70000")), DEFAULT_PORT);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["phonebook", "--port", "9000", "--static-dir", "dist", "--verbose"]);
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.static_dir, Some(PathBuf::from("dist")));
        assert!(cli.verbose);
    }

    #[test]
    fn addr_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().to_string(), "0.0.0.0:3001");
    }
}
