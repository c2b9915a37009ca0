//! Placeholder substitution and filename-safe copies of identifying fields.

use crate::derive::format_timestamp;
use crate::record::WipeSessionRecord;
use chrono::TimeZone;
use std::fmt::Display;

/// Text substituted for identifying fields the probe could not read.
pub const UNKNOWN: &str = "Unknown";

/// A record with placeholders filled in, plus filename-safe variants of its
/// identifying fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub record: WipeSessionRecord,
    pub sanitized_model: String,
    pub sanitized_serial: String,
    pub sanitized_end_time: String,
}

/// Fill empty model/serial with [`UNKNOWN`] and derive the sanitized copies.
///
/// The end time is formatted in `tz`, exactly as it is printed on the certificate.
pub fn normalize<Tz>(mut record: WipeSessionRecord, tz: &Tz) -> NormalizedRecord
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if record.device_serial_no.is_empty() {
        log::warn!(
            "Device '{}' reported no serial number, using '{}'",
            record.device_model,
            UNKNOWN
        );
        record.device_serial_no = UNKNOWN.to_string();
    }
    if record.device_model.is_empty() {
        log::warn!("Device reported no model, using '{}'", UNKNOWN);
        record.device_model = UNKNOWN.to_string();
    }

    let sanitized_model = replace_non_alphanumeric(&record.device_model, '_');
    let sanitized_serial = replace_non_alphanumeric(&record.device_serial_no, '_');
    let sanitized_end_time = replace_non_alphanumeric(&format_timestamp(record.end_time, tz), '-');

    NormalizedRecord {
        record,
        sanitized_model,
        sanitized_serial,
        sanitized_end_time,
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `replacement`.
pub fn replace_non_alphanumeric(s: &str, replacement: char) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { replacement })
        .collect()
}
