//! Server configuration, read from the environment.

use std::env;
use std::net::SocketAddr;

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Load the demo tenant at startup.
    pub seed_demo_data: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        let bind_addr = env::var("ECCLESIA_BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default.bind_addr);
        let seed_demo_data = env_bool("ECCLESIA_SEED_DEMO_DATA", default.seed_demo_data);
        Self {
            bind_addr,
            seed_demo_data,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            seed_demo_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.seed_demo_data);
    }
}
