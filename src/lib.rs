//! ProSafe Plus Prometheus Exporter
//!
//! A Prometheus metrics exporter for NETGEAR ProSafe Plus switches that only offer a
//! web management UI.
//!
//! # Overview
//!
//! The switch has no structured API. The exporter logs into the web UI the way a
//! browser does, scrapes port counters and link state out of the inline scripts of
//! two HTML pages, and republishes them in Prometheus format.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    HTTP + SID cookie   ┌──────────────┐
//! │  ProSafe    │ ◄────────────────────► │   Exporter   │
//! │   Switch    │   HTML pages           │              │
//! └─────────────┘                        │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                        │  │ Client │  │ ◄────────────► │ Prometheus │
//!                                        │  └────────┘  │   /metrics     └────────────┘
//!                                        │  ┌────────┐  │
//!                                        │  │Metrics │  │
//!                                        │  └────────┘  │
//!                                        └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`prosafe`] - Login handshake, session handling, and page parsers
//! - [`collectors`] - Applies collection results to metrics
//! - [`metrics`] - Prometheus metric definitions
//! - [`server`] - HTTP server
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use prosafe_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod prosafe;
pub mod server;
