use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Bundled front end shipped next to the crate sources.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Runtime configuration, read from flags with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(name = "mergington-backend", about = "Mergington High School activities API")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "MERGINGTON_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MERGINGTON_PORT", default_value_t = 3030)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "MERGINGTON_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3030,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["mergington-backend"]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3030".parse().unwrap());
        assert!(config.static_dir.ends_with("static"));
    }

    #[test]
    fn test_flags_override() {
        let config = Config::try_parse_from([
            "mergington-backend",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--static-dir",
            "/srv/www",
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }
}
