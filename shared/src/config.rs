//! Runtime configuration of the directory web server

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

/// Whether a resolved submission may be moved to the other terminal status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any decision overwrites the current status
    #[default]
    Permissive,
    /// Approved and rejected are final; re-applying the same status is a no-op
    Strict,
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionPolicy::Permissive => write!(f, "permissive"),
            TransitionPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "strict" => Ok(TransitionPolicy::Strict),
            _ => Err(SharedError::invalid_config("transition_policy", s)),
        }
    }
}

/// Web server configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebServerConfig {
    pub bind_host: IpAddr,
    pub bind_port: u16,
    pub static_file_root: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub transition_policy: TransitionPolicy,
    pub onboard_delay_ms: u64,
    pub log_level: String,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl WebServerConfig {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.bind_port)
    }

    pub fn onboard_delay(&self) -> Duration {
        Duration::from_millis(self.onboard_delay_ms)
    }

    /// Reject values that would only fail later at bind or log setup time
    pub fn validate(&self) -> SharedResult<()> {
        if self.bind_port == 0 {
            return Err(SharedError::invalid_config("bind_port", self.bind_port));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(SharedError::invalid_config("log_level", &self.log_level));
        }
        // A minute is already far beyond any believable form round trip
        if self.onboard_delay_ms > 60_000 {
            return Err(SharedError::invalid_config("onboard_delay_ms", self.onboard_delay_ms));
        }
        Ok(())
    }
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::from([127, 0, 0, 1]),
            bind_port: 8080,
            static_file_root: PathBuf::from("./static"),
            seed_file: None,
            transition_policy: TransitionPolicy::Permissive,
            onboard_delay_ms: 1500,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WebServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address().to_string(), "127.0.0.1:8080");
        assert_eq!(config.onboard_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = WebServerConfig {
            log_level: "loud".to_string(),
            ..WebServerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SharedError::invalid_config("log_level", "loud"))
        );

        let config = WebServerConfig {
            bind_port: 0,
            ..WebServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("STRICT".parse::<TransitionPolicy>().unwrap(), TransitionPolicy::Strict);
        assert_eq!(TransitionPolicy::default().to_string(), "permissive");
        assert!("lenient".parse::<TransitionPolicy>().is_err());
    }
}
