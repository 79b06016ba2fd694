//! Port status page (`/config/status_status.htm`)
//!
//! Entries look like `portConfigEntry[0] = '1?NAS?Up?Auto?1000M?Disable';`
//! (port, name, link state, speed setting, actual speed, flow control).

use super::script::{extract_records, FieldKind, RecordPattern};
use super::types::{LinkState, Snapshot};

const PORT_CONFIG_ENTRY: RecordPattern = RecordPattern {
    array: "portConfigEntry",
    fields: &[
        FieldKind::Digits,
        FieldKind::Text,
        FieldKind::NonEmpty,
        FieldKind::NonEmpty,
        FieldKind::NonEmpty,
        FieldKind::Rest,
    ],
};

/// Link state and negotiated speed for one port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortStatus {
    pub port: u32,
    pub link: LinkState,
    pub speed_mbps: u32,
}

/// Parsed status page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPage {
    pub ports: Vec<PortStatus>,
}

impl StatusPage {
    /// Merge link state and speed into `snapshot`
    pub fn apply(&self, snapshot: &mut Snapshot) {
        for status in &self.ports {
            let record = snapshot.port_mut(status.port);
            record.link = status.link;
            record.speed_mbps = status.speed_mbps;
        }
    }
}

pub fn parse_port_status(html: &str) -> StatusPage {
    let ports = extract_records(html, &PORT_CONFIG_ENTRY)
        .into_iter()
        .filter_map(|record| {
            let port = record.fields[0].parse().ok()?;
            let link_state = record.fields[2];
            let actual_speed = record.fields[4];

            // Speed is 0 for a down port whatever the actual-speed field says
            if link_state.eq_ignore_ascii_case("down") {
                return Some(PortStatus {
                    port,
                    link: LinkState::Down,
                    speed_mbps: 0,
                });
            }

            Some(PortStatus {
                port,
                link: LinkState::Up,
                speed_mbps: parse_speed_mbps(actual_speed).unwrap_or(0),
            })
        })
        .collect();

    StatusPage { ports }
}

/// First run of digits immediately followed by `M`, e.g. `"1000M"` or `"100M Full"`
pub fn parse_speed_mbps(speed: &str) -> Option<u32> {
    let bytes = speed.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }

        let end = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |offset| start + offset);

        if bytes.get(end) == Some(&b'M') {
            return speed[start..end].parse().ok();
        }
        start = end;
    }

    None
}
