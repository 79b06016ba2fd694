//! ProSafe Switch Data Model
//!
//! Types shared by the session, parser, and client layers.
//!
//! - [`Credential`] - immutable host + password pair handed to the client
//! - [`PortRecord`] - per-port measurements merged from the statistics and status pages
//! - [`Snapshot`] - one collection cycle: switch identity, port records, and port count

use secrecy::SecretString;
use std::collections::BTreeMap;

/// Bytes per megabyte as the switch reports them (1024 * 1024)
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Port count assumed when the statistics page does not carry `portList`
pub const DEFAULT_PORT_COUNT: u32 = 16;

/// Switch address and login password
#[derive(Debug, Clone)]
pub struct Credential {
    host: String,
    password: SecretString,
}

impl Credential {
    pub fn new(host: impl Into<String>, password: SecretString) -> Self {
        Self {
            host: host.into(),
            password,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Physical link state reported on the status page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkState {
    Up,
    #[default]
    Down,
}

impl LinkState {
    pub fn is_up(self) -> bool {
        self == LinkState::Up
    }
}

/// Measurements for a single switch port
///
/// Statistics and status come from independent pages, so any field may still hold
/// its default when the other page did not list the port.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortRecord {
    pub rx_mbytes: f64,
    pub tx_mbytes: f64,
    pub crc_errors: u64,
    pub link: LinkState,
    pub speed_mbps: u32,
}

impl PortRecord {
    pub fn rx_bytes(&self) -> f64 {
        self.rx_mbytes * BYTES_PER_MB
    }

    pub fn tx_bytes(&self) -> f64 {
        self.tx_mbytes * BYTES_PER_MB
    }
}

/// Result of one successful collection cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub switch: String,
    pub ports: BTreeMap<u32, PortRecord>,
    pub port_count: u32,
}

impl Snapshot {
    pub fn new(switch: impl Into<String>) -> Self {
        Self {
            switch: switch.into(),
            ports: BTreeMap::new(),
            port_count: DEFAULT_PORT_COUNT,
        }
    }

    /// Record for `port`, created with defaults on first access
    pub fn port_mut(&mut self, port: u32) -> &mut PortRecord {
        self.ports.entry(port).or_default()
    }

    pub fn port(&self, port: u32) -> Option<&PortRecord> {
        self.ports.get(&port)
    }

    /// Every port `1..=port_count`, filling gaps with zeroed records
    pub fn all_ports(&self) -> impl Iterator<Item = (u32, PortRecord)> + '_ {
        (1..=self.port_count).map(|port| (port, self.port(port).cloned().unwrap_or_default()))
    }
}
