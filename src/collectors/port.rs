//! Port Metrics
//!
//! # Metrics Produced
//! - `prosafe_up` - set to 1 (or 0 via [`record_switch_down`])
//! - `prosafe_receive_bytes_total`, `prosafe_transmit_bytes_total`
//! - `prosafe_link_speed_mbps`, `prosafe_port_up`, `prosafe_crc_errors_total`
//!   - Labels: switch, port

use crate::metrics::MetricsCollector;
use crate::prosafe::Snapshot;

/// Write every port `1..=port_count` of `snapshot`, zeroing fields the switch did not report
pub fn record_snapshot(metrics: &MetricsCollector, snapshot: &Snapshot) {
    let switch = snapshot.switch.as_str();
    metrics.up.with_label_values(&[switch]).set(1.0);

    for (port, record) in snapshot.all_ports() {
        let port = port.to_string();
        let labels = [switch, port.as_str()];

        metrics
            .receive_bytes_total
            .with_label_values(&labels)
            .set(record.rx_bytes());
        metrics
            .transmit_bytes_total
            .with_label_values(&labels)
            .set(record.tx_bytes());
        metrics
            .link_speed_mbps
            .with_label_values(&labels)
            .set(f64::from(record.speed_mbps));
        metrics
            .port_up
            .with_label_values(&labels)
            .set(if record.link.is_up() { 1.0 } else { 0.0 });
        metrics
            .crc_errors_total
            .with_label_values(&labels)
            .set(record.crc_errors as f64);
    }
}

/// Mark the switch unreachable, leaving port gauges untouched
pub fn record_switch_down(metrics: &MetricsCollector, switch: &str) {
    metrics.up.with_label_values(&[switch]).set(0.0);
}
