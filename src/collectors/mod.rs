//! Metrics Collectors
//!
//! Turns the result of a switch collection cycle into Prometheus gauge updates.
//!
//! # Error Handling
//!
//! A failed cycle is not an error here: the switch is reported down and the
//! per-port gauges keep the values from the last successful cycle.

use crate::metrics::MetricsCollector;
use crate::prosafe::SwitchClient;
use tracing::info;

pub mod port;

pub use port::{record_snapshot, record_switch_down};

/// Status of a metrics collection operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Metrics were successfully collected and updated
    Success,
    /// Collection failed (already logged), switch marked down
    Failed,
}

/// Run one collection cycle against the switch and update `metrics`
pub async fn collect_switch_metrics(
    client: &mut SwitchClient,
    metrics: &MetricsCollector,
) -> CollectionStatus {
    match client.collect().await {
        Some(snapshot) => {
            record_snapshot(metrics, &snapshot);
            info!(
                "Updated metrics for {} ports on {}",
                snapshot.port_count, snapshot.switch
            );
            CollectionStatus::Success
        }
        None => {
            record_switch_down(metrics, client.host());
            CollectionStatus::Failed
        }
    }
}
