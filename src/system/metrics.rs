//! Metrics collection and monitoring for the social graph service
//!
//! Prometheus counters and histograms for dispatched operations, plus gauges
//! mirroring the size of each collection. Every [`Metrics`] owns its own
//! registry, so independent instances (tests, multiple routers) never clash.

use crate::core::error::{Error, Result};
use crate::storage::StoreStats;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Outcome label of a dispatched operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation returned a value (including an absent one)
    Ok,
    /// The caller sent something invalid or referenced a missing entity
    ClientError,
    /// Anything else
    ServerError,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::ClientError => "client_error",
            Outcome::ServerError => "server_error",
        }
    }

    /// Classify an operation result
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Outcome::Ok,
            Err(e) if e.is_client_error() => Outcome::ClientError,
            Err(_) => Outcome::ServerError,
        }
    }
}

/// Centralized metrics for the service
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    /// Dispatched operations by name and outcome
    pub operations: IntCounterVec,
    /// Duration of dispatched operations in seconds, by name
    pub operation_duration: HistogramVec,
    /// Number of stored records, by collection
    pub records: IntGaugeVec,
}

impl Metrics {
    /// Create a new metrics instance with a fresh registry
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let operations = IntCounterVec::new(
            Opts::new("sg_operations_total", "Total number of dispatched operations"),
            &["operation", "outcome"],
        )?;
        let operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "sg_operation_duration_seconds",
                "Duration of dispatched operations in seconds",
            )
            .buckets(vec![0.000_01, 0.000_1, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
            &["operation"],
        )?;
        let records = IntGaugeVec::new(
            Opts::new("sg_records", "Number of stored records"),
            &["collection"],
        )?;

        registry.register(Box::new(operations.clone()))?;
        registry.register(Box::new(operation_duration.clone()))?;
        registry.register(Box::new(records.clone()))?;

        Ok(Self {
            registry,
            operations,
            operation_duration,
            records,
        })
    }

    /// Record one dispatched operation
    pub fn observe(&self, operation: &str, outcome: Outcome, elapsed: Duration) {
        self.operations
            .with_label_values(&[operation, outcome.as_str()])
            .inc();
        self.operation_duration
            .with_label_values(&[operation])
            .observe(elapsed.as_secs_f64());
    }

    /// Mirror the current collection sizes into the record gauges
    pub fn record_store_stats(&self, stats: StoreStats) {
        for (collection, count) in [
            ("users", stats.users),
            ("posts", stats.posts),
            ("comments", stats.comments),
        ] {
            self.records
                .with_label_values(&[collection])
                .set(i64::try_from(count).unwrap_or(i64::MAX));
        }
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Metrics(prometheus::Error::Msg(e.to_string())))
    }
}
