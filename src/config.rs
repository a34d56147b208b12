//! Configuration loader and application settings.

use std::net::{IpAddr, Ipv4Addr};

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP API binds to.
    pub bind_addr: IpAddr,
    /// Port the HTTP API listens on.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables, with defaults that
    /// suit a local run.
    pub fn load() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0".into())
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3091".into())
            .parse()
            .unwrap_or(3091);
        Self { bind_addr, port }
    }
}
