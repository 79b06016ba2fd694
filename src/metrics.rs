//! Prometheus Metrics Definitions
//!
//! This module defines all Prometheus metrics exposed by the ProSafe exporter.
//!
//! # Metrics
//!
//! - `prosafe_up` - Whether the switch web UI is reachable (1=up, 0=down)
//! - `prosafe_receive_bytes_total` - Bytes received per port
//! - `prosafe_transmit_bytes_total` - Bytes transmitted per port
//! - `prosafe_link_speed_mbps` - Negotiated link speed per port
//! - `prosafe_port_up` - Whether a port has link (1=connected, 0=disconnected)
//! - `prosafe_crc_errors_total` - CRC errors per port
//! - `prosafe_build_info` - Exporter version (value is always 1)
//!
//! Port metrics are labeled with `switch` (host) and `port` (1-based number).
//! The switch reports counters as absolute values, so they are exposed as gauges.

use prometheus::{Encoder, GaugeVec, IntGaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Metrics collector for ProSafe switches
#[derive(Clone)]
pub struct MetricsCollector {
    registry: Arc<Registry>,

    // Switch metrics
    pub up: Arc<GaugeVec>,
    pub build_info: Arc<IntGaugeVec>,

    // Port metrics
    pub receive_bytes_total: Arc<GaugeVec>,
    pub transmit_bytes_total: Arc<GaugeVec>,
    pub link_speed_mbps: Arc<GaugeVec>,
    pub port_up: Arc<GaugeVec>,
    pub crc_errors_total: Arc<GaugeVec>,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let up = GaugeVec::new(
            Opts::new("up", "Switch is reachable (1=up, 0=down)").namespace("prosafe"),
            &["switch"],
        )?;

        let build_info = IntGaugeVec::new(
            Opts::new("build_info", "Exporter build information (value is always 1)")
                .namespace("prosafe"),
            &["version"],
        )?;

        let receive_bytes_total = GaugeVec::new(
            Opts::new("receive_bytes_total", "Incoming transfer in bytes").namespace("prosafe"),
            &["switch", "port"],
        )?;

        let transmit_bytes_total = GaugeVec::new(
            Opts::new("transmit_bytes_total", "Outgoing transfer in bytes").namespace("prosafe"),
            &["switch", "port"],
        )?;

        let link_speed_mbps = GaugeVec::new(
            Opts::new("link_speed_mbps", "Link speed in Mbps").namespace("prosafe"),
            &["switch", "port"],
        )?;

        let port_up = GaugeVec::new(
            Opts::new("port_up", "Port is connected (1=up, 0=down)").namespace("prosafe"),
            &["switch", "port"],
        )?;

        let crc_errors_total = GaugeVec::new(
            Opts::new("crc_errors_total", "CRC errors").namespace("prosafe"),
            &["switch", "port"],
        )?;

        // Register all metrics
        registry.register(Box::new(up.clone()))?;
        registry.register(Box::new(build_info.clone()))?;
        registry.register(Box::new(receive_bytes_total.clone()))?;
        registry.register(Box::new(transmit_bytes_total.clone()))?;
        registry.register(Box::new(link_speed_mbps.clone()))?;
        registry.register(Box::new(port_up.clone()))?;
        registry.register(Box::new(crc_errors_total.clone()))?;

        build_info
            .with_label_values(&[env!("CARGO_PKG_VERSION")])
            .set(1);

        Ok(Self {
            registry: Arc::new(registry),
            up: Arc::new(up),
            build_info: Arc::new(build_info),
            receive_bytes_total: Arc::new(receive_bytes_total),
            transmit_bytes_total: Arc::new(transmit_bytes_total),
            link_speed_mbps: Arc::new(link_speed_mbps),
            port_up: Arc::new(port_up),
            crc_errors_total: Arc::new(crc_errors_total),
        })
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics collector")
    }
}
