//! ProSafe Switch Client
//!
//! Scrapes port metrics from the switch's web management UI.
//!
//! # Collection cycle
//!
//! 1. Log in if there is no session yet
//! 2. Fetch and parse the port statistics page (mandatory)
//! 3. Fetch and parse the port status page (best-effort)
//! 4. Merge both into a [`Snapshot`]
//!
//! # Example
//!
//! ```no_run
//! use prosafe_exporter::prosafe::{Credential, SwitchClient};
//! use secrecy::SecretString;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credential = Credential::new("192.168.0.239", SecretString::from("password"));
//! let mut client = SwitchClient::new(credential, Duration::from_secs(5), Duration::from_secs(10))?;
//!
//! if let Some(snapshot) = client.collect().await {
//!     for (port, record) in snapshot.all_ports() {
//!         println!("port {}: {} Mbps", port, record.speed_mbps);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::fetcher::PageFetcher;
use super::session::SessionManager;
use super::statistics::parse_port_statistics;
use super::status::parse_port_status;
use super::types::{Credential, Snapshot, DEFAULT_PORT_COUNT};
use crate::config::SwitchConfig;
use crate::error::Result;
use std::time::Duration;
use tracing::{debug, error, warn};

pub const PORT_STATISTICS_PAGE: &str = "/config/monitoring_port_statistics.htm";
pub const PORT_STATUS_PAGE: &str = "/config/status_status.htm";

/// Client for a single ProSafe Plus switch
///
/// `collect` takes `&mut self`: logging in replaces the session's cookie jar, so
/// concurrent callers must share the client behind a lock.
pub struct SwitchClient {
    session: SessionManager,
    fetcher: PageFetcher,
    /// Last `portList` value seen on the statistics page
    discovered_ports: Option<u32>,
}

impl SwitchClient {
    pub fn new(
        credential: Credential,
        login_timeout: Duration,
        fetch_timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            session: SessionManager::new(credential, login_timeout)?,
            fetcher: PageFetcher::new(fetch_timeout),
            discovered_ports: None,
        })
    }

    pub fn from_config(config: &SwitchConfig) -> Result<Self> {
        Self::new(
            config.credential()?,
            config.login_timeout(),
            config.fetch_timeout(),
        )
    }

    pub fn host(&self) -> &str {
        self.session.host()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Run one collection cycle.
    ///
    /// Returns `None` when the switch could not be logged into or the statistics
    /// page could not be fetched or came back empty. A failed status fetch only leaves link state and
    /// speed at their defaults. Errors are logged here and never returned.
    pub async fn collect(&mut self) -> Option<Snapshot> {
        if !self.session.is_authenticated() && self.session.login().await.is_err() {
            return None;
        }

        let statistics_html = match self
            .fetcher
            .fetch(&mut self.session, PORT_STATISTICS_PAGE)
            .await
        {
            Ok(html) if html.is_empty() => {
                error!("Port statistics page {} returned an empty body", PORT_STATISTICS_PAGE);
                return None;
            }
            Ok(html) => html,
            Err(e) => {
                error!("Failed to fetch port statistics: {}", e);
                return None;
            }
        };

        let mut snapshot = Snapshot::new(self.session.host());

        let statistics = parse_port_statistics(&statistics_html);
        if statistics.ports.is_empty() {
            warn!("No port statistics entries found on {}", PORT_STATISTICS_PAGE);
        }
        if let Some(count) = statistics.port_count {
            self.discovered_ports = Some(count);
        }
        statistics.apply(&mut snapshot);

        match self.fetcher.fetch(&mut self.session, PORT_STATUS_PAGE).await {
            Ok(status_html) => {
                let status = parse_port_status(&status_html);
                debug!("Parsed status for {} ports", status.ports.len());
                status.apply(&mut snapshot);
            }
            Err(e) => warn!("Failed to fetch port status, continuing without it: {}", e),
        }

        snapshot.port_count = self.discovered_ports.unwrap_or(DEFAULT_PORT_COUNT);
        Some(snapshot)
    }
}
