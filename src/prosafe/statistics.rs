//! Port statistics page (`/config/monitoring_port_statistics.htm`)
//!
//! Entries look like `StatisticsEntry[0] = '1?232204765?359217889?0';`
//! (port, received bytes, transmitted bytes, CRC errors). The page also declares
//! the number of ports as `var portList = 8;`.

use super::script::{extract_records, extract_scalar, FieldKind, RecordPattern};
use super::types::{Snapshot, BYTES_PER_MB};

const STATISTICS_ENTRY: RecordPattern = RecordPattern {
    array: "StatisticsEntry",
    fields: &[
        FieldKind::Digits,
        FieldKind::Digits,
        FieldKind::Digits,
        FieldKind::Digits,
    ],
};

const PORT_LIST: &str = "var portList";

/// Counters for one port as listed on the statistics page
#[derive(Debug, Clone, PartialEq)]
pub struct PortStatistics {
    pub port: u32,
    pub rx_mbytes: f64,
    pub tx_mbytes: f64,
    pub crc_errors: u64,
}

/// Parsed statistics page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsPage {
    pub ports: Vec<PortStatistics>,
    /// `portList` value, `None` when the page does not declare it or declares 0
    pub port_count: Option<u32>,
}

impl StatisticsPage {
    /// Merge the counters into `snapshot`, keyed by the port number from each payload
    pub fn apply(&self, snapshot: &mut Snapshot) {
        for stats in &self.ports {
            let record = snapshot.port_mut(stats.port);
            record.rx_mbytes = stats.rx_mbytes;
            record.tx_mbytes = stats.tx_mbytes;
            record.crc_errors = stats.crc_errors;
        }
    }
}

pub fn parse_port_statistics(html: &str) -> StatisticsPage {
    let ports = extract_records(html, &STATISTICS_ENTRY)
        .into_iter()
        .filter_map(|record| {
            let port = record.fields[0].parse().ok()?;
            let rx_bytes: u64 = record.fields[1].parse().ok()?;
            let tx_bytes: u64 = record.fields[2].parse().ok()?;
            let crc_errors = record.fields[3].parse().ok()?;

            Some(PortStatistics {
                port,
                rx_mbytes: rx_bytes as f64 / BYTES_PER_MB,
                tx_mbytes: tx_bytes as f64 / BYTES_PER_MB,
                crc_errors,
            })
        })
        .collect();

    let port_count = extract_scalar(html, PORT_LIST)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0);

    StatisticsPage { ports, port_count }
}
