//! Script-Embedded Record Extraction
//!
//! The switch web UI has no API. Each page builds its tables from inline script
//! assignments such as:
//!
//! ```text
//! StatisticsEntry[0] = '1?232204765?359217889?0';
//! var portList = 8;
//! ```
//!
//! Every page-specific parser goes through [`extract_records`] and [`extract_scalar`],
//! so the firmware's record format is encoded in exactly one place. Matching is a
//! tolerant forward scan: whitespace around `=` is optional and entries that do not
//! fit the expected shape are skipped rather than reported.

/// Constraint on a single `?`-separated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One or more ASCII digits
    Digits,
    /// Any text, possibly empty
    Text,
    /// At least one character
    NonEmpty,
    /// Remainder of the payload; must be last, may itself contain `?`
    Rest,
}

impl FieldKind {
    fn accepts(self, field: &str) -> bool {
        match self {
            FieldKind::Digits => !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()),
            FieldKind::Text => true,
            FieldKind::NonEmpty | FieldKind::Rest => !field.is_empty(),
        }
    }
}

/// Shape of one script array: `<array>[<index>] = '<f1>?<f2>?...'`
#[derive(Debug, Clone, Copy)]
pub struct RecordPattern {
    pub array: &'static str,
    pub fields: &'static [FieldKind],
}

/// One matched array assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRecord<'a> {
    /// Index inside the script array, not necessarily the port number
    pub index: u32,
    pub fields: Vec<&'a str>,
}

/// Extract every assignment to `pattern.array` whose payload fits `pattern.fields`.
pub fn extract_records<'a>(text: &'a str, pattern: &RecordPattern) -> Vec<ScriptRecord<'a>> {
    let needle = format!("{}[", pattern.array);
    let mut records = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(&needle) {
        let start = cursor + found + needle.len();
        cursor = start;

        let Some((index, payload)) = parse_assignment(&text[start..]) else {
            continue;
        };
        if let Some(fields) = split_fields(payload, pattern.fields) {
            records.push(ScriptRecord { index, fields });
        }
    }

    records
}

/// Extract the first `<prefix> = <digits>` assignment, e.g. `var portList = 8`.
pub fn extract_scalar(text: &str, prefix: &str) -> Option<u64> {
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(prefix) {
        cursor += found + prefix.len();
        let rest = &text[cursor..];

        let Some(rest) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let (digits, _) = take_digits(rest.trim_start());
        if let Ok(value) = digits.parse() {
            return Some(value);
        }
    }

    None
}

/// Parse `<index>] = '<payload>'` following the opening bracket
fn parse_assignment(rest: &str) -> Option<(u32, &str)> {
    let (digits, rest) = take_digits(rest);
    let index = digits.parse().ok()?;

    let rest = rest.strip_prefix(']')?.trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    let rest = rest.strip_prefix('\'')?;

    let end = rest.find('\'')?;
    Some((index, &rest[..end]))
}

fn split_fields<'a>(payload: &'a str, kinds: &[FieldKind]) -> Option<Vec<&'a str>> {
    let fields: Vec<&str> = match kinds.last() {
        Some(FieldKind::Rest) => payload.splitn(kinds.len(), '?').collect(),
        _ => payload.split('?').collect(),
    };

    if fields.len() != kinds.len() {
        return None;
    }

    kinds
        .iter()
        .zip(&fields)
        .all(|(kind, field)| kind.accepts(field))
        .then_some(fields)
}

fn take_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}
