//! System utilities and monitoring
//!
//! Operation metrics and the health report served by the HTTP layer.

pub mod metrics;

pub mod health {
    //! Service health snapshot
    use crate::storage::StoreStats;
    use serde::Serialize;
    use std::time::Instant;

    /// Health report for the `/health` endpoint
    #[derive(Debug, Clone, Serialize)]
    pub struct HealthStatus {
        /// Always `healthy` while the process is serving
        pub status: &'static str,
        /// Seconds since the service started
        pub uptime_seconds: u64,
        /// Crate version
        pub version: &'static str,
        /// Current record counts
        pub records: StoreStats,
    }

    /// Build a health report for a service started at `started`
    pub fn check(started: Instant, records: StoreStats) -> HealthStatus {
        HealthStatus {
            status: "healthy",
            uptime_seconds: started.elapsed().as_secs(),
            version: crate::VERSION,
            records,
        }
    }
}

pub use metrics::{Metrics, Outcome};
