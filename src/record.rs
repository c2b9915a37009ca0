//! The erasure session record a certificate is rendered from.

use serde::{Deserialize, Serialize};

/// State of the Host Protected Area as probed before the wipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HpaStatus {
    NotApplicable,
    Enabled,
    Disabled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Everything known about one device's erasure session.
///
/// Produced by the wipe engine; the renderer only reads it, apart from the
/// placeholder substitution done by [`normalize`](crate::normalize::normalize).
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipeSessionRecord {
    pub device_model: String,
    pub device_serial_no: String,

    /// Apparent capacity in bytes.
    pub device_size: u64,
    pub device_size_text: String,
    /// Bus or device class, e.g. `ATA`, `USB`, `NVME`, `VIRT`.
    pub device_type_str: String,

    #[serde(alias = "HPA_status")]
    pub hpa_status: HpaStatus,
    /// Hidden sectors when the HPA is enabled.
    #[serde(alias = "HPA_size")]
    pub hpa_size: u64,

    #[serde(alias = "DCO_reported_real_max_size")]
    pub dco_reported_real_max_size: u64,
    #[serde(alias = "DCO_reported_real_max_size_text")]
    pub dco_reported_real_max_size_text: String,
    #[serde(alias = "DCO_reported_real_max_sectors")]
    pub dco_reported_real_max_sectors: u64,

    /// Seconds since the Unix epoch.
    pub start_time: i64,
    pub end_time: i64,
    pub duration_str: String,

    /// `"ERASED"` on success; anything else is a failure.
    pub wipe_status_txt: String,
    pub round_working: u32,
    pub bytes_erased: u64,

    pub pass_errors: u64,
    pub fsyncdata_errors: u64,
    pub verify_errors: u64,

    pub throughput_txt: String,
}

impl WipeSessionRecord {
    /// Bus types that have no HPA/DCO concept at all.
    pub fn bus_has_no_hpa(&self) -> bool {
        matches!(self.device_type_str.as_str(), "NVME" | "VIRT")
    }
}
