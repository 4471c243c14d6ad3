//! Process configuration.

use crate::data::DataLoader;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_MATCHES_PATH: &str = "data/matches.csv";
pub const DEFAULT_DELIVERIES_PATH: &str = "data/deliveries.csv";
pub const DEFAULT_PORT: u16 = 5000;

/// Read-only settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub matches_path: PathBuf,
    pub deliveries_path: PathBuf,
    /// Expose error details in responses and log at debug level.
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            matches_path: PathBuf::from(DEFAULT_MATCHES_PATH),
            deliveries_path: PathBuf::from(DEFAULT_DELIVERIES_PATH),
            debug: false,
        }
    }
}

impl DashboardConfig {
    pub fn loader(&self) -> DataLoader {
        DataLoader::new(&self.matches_path, &self.deliveries_path)
    }
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ListenConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
