//! Webserver state management
//!
//! Process-level bookkeeping shared by the handlers. Domain data lives in
//! the injected services, not here.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use artistly_shared::WebServerConfig;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub onboard_delay: Duration,
    pub is_running: AtomicBool,
    pub applications_received: AtomicU64,
    pub server_start_time: Instant,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new(config: &WebServerConfig) -> Self {
        Self {
            bind_address: config.bind_address(),
            onboard_delay: config.onboard_delay(),
            is_running: AtomicBool::new(true),
            applications_received: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Set running state
    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count one onboarding application, returning the new total
    pub fn record_application(&self) -> u64 {
        self.applications_received.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get_applications_received(&self) -> u64 {
        self.applications_received.load(Ordering::Relaxed)
    }
}
