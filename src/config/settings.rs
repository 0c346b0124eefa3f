use std::time::Duration;

use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub worker_count: usize,
    pub processing_delay_secs: u64,
}

impl AppConfig {
    /// Build the configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn new() -> Self {
        Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            // A pool of zero workers would leave every job queued forever.
            worker_count: env::get_parsed(EnvKey::WorkerCount, 4).max(1),
            processing_delay_secs: env::get_parsed(EnvKey::ProcessingDelaySecs, 3),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_secs(self.processing_delay_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            worker_count: 4,
            processing_delay_secs: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.worker_count, 4);
        assert_eq!(config.processing_delay_secs, 3);
    }

    #[test]
    fn listen_addr_joins_host_and_port() {
        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn processing_delay_is_seconds() {
        let config = AppConfig {
            processing_delay_secs: 7,
            ..AppConfig::default()
        };
        assert_eq!(config.processing_delay(), Duration::from_secs(7));
    }
}
