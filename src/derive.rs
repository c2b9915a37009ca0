//! Display values, colour classes and layout choices for one certificate.
//!
//! Everything here is pure: the same record, configuration and time zone
//! always give the same [`DerivedFields`].

use crate::config::RunConfiguration;
use crate::normalize::{UNKNOWN, NormalizedRecord};
use crate::record::{HpaStatus, WipeSessionRecord};
use chrono::TimeZone;
use std::fmt::Display;

/// `wipe_status_txt` of a session that finished successfully.
pub const ERASED: &str = "ERASED";

/// Bytes per sector used for DCO capacity.
const SECTOR_SIZE: u64 = 512;

/// Colour class of a value on the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

impl Tone {
    fn from_ok(ok: bool) -> Self {
        if ok { Tone::Success } else { Tone::Failure }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// A value together with the colour it is printed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toned {
    pub text: String,
    pub tone: Tone,
}

impl Toned {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Everything the layout prints that is not a fixed label.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    pub model: String,
    pub serial: String,
    /// Barcode payload, `model:serial`.
    pub barcode: String,
    pub apparent_size: String,
    pub bus: String,
    /// `None` when the HPA is disabled and there is nothing extra to say.
    pub real_size: Option<Toned>,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub outcome: Outcome,
    /// The raw status word, coloured by outcome.
    pub status: Toned,
    pub method: String,
    pub prng: String,
    pub blanking: String,
    pub verify: String,
    pub bytes_erased: Toned,
    pub rounds_completed: u32,
    pub rounds: Toned,
    pub hpa_status: Toned,
    pub hpa_size: Toned,
    pub throughput: String,
    pub errors: Toned,
}

/// Format epoch seconds as `YYYY/MM/DD HH:MM:SS` in `tz`.
///
/// Timestamps chrono cannot represent come back as [`UNKNOWN`].
pub fn format_timestamp<Tz>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(epoch_seconds, 0).earliest() {
        Some(time) => time.format("%Y/%m/%d %H:%M:%S").to_string(),
        None => {
            log::warn!("Timestamp {} is out of range, printing '{}'", epoch_seconds, UNKNOWN);
            UNKNOWN.to_string()
        }
    }
}

/// Derive every printed value from a normalized record and the run configuration.
pub fn derive_fields<Tz>(normalized: &NormalizedRecord, config: &RunConfiguration, tz: &Tz) -> DerivedFields
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let r = &normalized.record;

    let outcome = if r.wipe_status_txt == ERASED {
        Outcome::Success
    } else {
        Outcome::Failure
    };
    let succeeded = outcome == Outcome::Success;
    // An unsuccessful session was interrupted inside its last round.
    let rounds_completed = if succeeded {
        r.round_working
    } else {
        r.round_working.saturating_sub(1)
    };

    let (hpa_status, hpa_size) = hpa_block(r);
    let fields = DerivedFields {
        model: r.device_model.clone(),
        serial: r.device_serial_no.clone(),
        barcode: format!("{}:{}", r.device_model, r.device_serial_no),
        apparent_size: format!("{}, {} bytes", r.device_size_text, r.device_size),
        bus: r.device_type_str.clone(),
        real_size: real_size(r),
        start_time: format_timestamp(r.start_time, tz),
        end_time: format_timestamp(r.end_time, tz),
        duration: r.duration_str.clone(),
        outcome,
        status: Toned::new(r.wipe_status_txt.clone(), Tone::from_ok(succeeded)),
        method: config.method.label().to_string(),
        prng: prng_label(config).to_string(),
        blanking: if config.noblank { "None" } else { "Zeros" }.to_string(),
        verify: config.verify.label().to_string(),
        bytes_erased: bytes_erased(r),
        rounds_completed,
        rounds: Toned::new(
            format!("{}/{}", rounds_completed, config.rounds),
            Tone::from_ok(succeeded),
        ),
        hpa_status,
        hpa_size,
        throughput: format!("{}/sec", r.throughput_txt),
        errors: Toned::new(
            format!("{}/{}/{}", r.pass_errors, r.fsyncdata_errors, r.verify_errors),
            Tone::from_ok(r.pass_errors == 0 && r.fsyncdata_errors == 0 && r.verify_errors == 0),
        ),
    };
    log::debug!("Derived certificate fields: {:?}", fields);
    fields
}

fn not_applicable(r: &WipeSessionRecord) -> Toned {
    Toned::new(format!("Not applicable to {}", r.device_type_str), Tone::Success)
}

fn real_size(r: &WipeSessionRecord) -> Option<Toned> {
    if r.bus_has_no_hpa() || r.hpa_status == HpaStatus::NotApplicable {
        return Some(not_applicable(r));
    }
    match r.hpa_status {
        HpaStatus::Enabled => Some(Toned::new(
            format!(
                "{}, {} bytes",
                r.dco_reported_real_max_size_text, r.dco_reported_real_max_size
            ),
            Tone::Failure,
        )),
        HpaStatus::Unknown => Some(Toned::new(UNKNOWN, Tone::Failure)),
        HpaStatus::Disabled | HpaStatus::NotApplicable => None,
    }
}

fn hpa_block(r: &WipeSessionRecord) -> (Toned, Toned) {
    if r.bus_has_no_hpa() || r.hpa_status == HpaStatus::NotApplicable {
        return (not_applicable(r), not_applicable(r));
    }
    match r.hpa_status {
        HpaStatus::Enabled => (
            Toned::new("ENABLED", Tone::Failure),
            Toned::new(format!("{} sectors", r.hpa_size), Tone::Failure),
        ),
        HpaStatus::Disabled => (
            Toned::new("DISABLED", Tone::Success),
            Toned::new("Zero sectors", Tone::Success),
        ),
        HpaStatus::Unknown | HpaStatus::NotApplicable => (
            Toned::new("UNKNOWN", Tone::Failure),
            Toned::new("UNKNOWN", Tone::Failure),
        ),
    }
}

fn prng_label(config: &RunConfiguration) -> &'static str {
    if config.method.uses_prng() {
        config.prng.label()
    } else {
        "Not applicable to method"
    }
}

/// Capacity the erased byte count is measured against.
///
/// The DCO real maximum wins when the probe reported one, since the apparent
/// size shrinks under an enabled HPA.
pub fn erasure_denominator(r: &WipeSessionRecord) -> u64 {
    if r.dco_reported_real_max_sectors != 0 {
        r.dco_reported_real_max_sectors.saturating_mul(SECTOR_SIZE)
    } else {
        r.device_size
    }
}

fn bytes_erased(r: &WipeSessionRecord) -> Toned {
    let denominator = erasure_denominator(r);
    let text = if denominator == 0 {
        format!("{} (N/A)", r.bytes_erased)
    } else {
        let percentage = r.bytes_erased as f64 / denominator as f64 * 100.0;
        format!("{} ({:.1}%)", r.bytes_erased, percentage)
    };
    Toned::new(text, Tone::from_ok(r.bytes_erased == r.device_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrngAlgorithm, VerifyMode, WipeMethod};
    use crate::normalize::normalize;
    use chrono::{FixedOffset, Utc};

    fn record() -> WipeSessionRecord {
        WipeSessionRecord {
            device_model: "ST1000".into(),
            device_serial_no: "Z1D2".into(),
            device_size: 1_000_000_000,
            device_size_text: "1TB".into(),
            device_type_str: "ATA".into(),
            hpa_status: HpaStatus::Disabled,
            start_time: 1_700_000_000,
            end_time: 1_700_003_600,
            duration_str: "01:00:00".into(),
            wipe_status_txt: ERASED.into(),
            round_working: 1,
            bytes_erased: 1_000_000_000,
            throughput_txt: "150 MB".into(),
            ..Default::default()
        }
    }

    fn derive(r: WipeSessionRecord, config: &RunConfiguration) -> DerivedFields {
        derive_fields(&normalize(r, &Utc), config, &Utc)
    }

    #[test]
    fn test_erased_is_success() {
        let r = WipeSessionRecord {
            round_working: 3,
            ..record()
        };
        let d = derive(r, &RunConfiguration { rounds: 3, ..Default::default() });
        assert_eq!(d.outcome, Outcome::Success);
        assert_eq!(d.status, Toned::new("ERASED", Tone::Success));
        assert_eq!(d.rounds_completed, 3);
        assert_eq!(d.rounds, Toned::new("3/3", Tone::Success));
    }

    #[test]
    fn test_any_other_status_is_failure() {
        for status in ["FAILED", "ABORTED", "erased", ""] {
            let r = WipeSessionRecord {
                wipe_status_txt: status.into(),
                round_working: 3,
                ..record()
            };
            let d = derive(r, &RunConfiguration { rounds: 4, ..Default::default() });
            assert_eq!(d.outcome, Outcome::Failure, "{}", status);
            assert_eq!(d.status.tone, Tone::Failure);
            assert_eq!(d.status.text, status);
            assert_eq!(d.rounds_completed, 2);
            assert_eq!(d.rounds, Toned::new("2/4", Tone::Failure));
        }
    }

    #[test]
    fn test_failure_in_first_round_does_not_underflow() {
        let r = WipeSessionRecord {
            wipe_status_txt: "FAILED".into(),
            round_working: 0,
            ..record()
        };
        assert_eq!(derive(r, &RunConfiguration::default()).rounds_completed, 0);
    }

    #[test]
    fn test_full_erasure_percentage() {
        let d = derive(record(), &RunConfiguration::default());
        assert_eq!(d.bytes_erased, Toned::new("1000000000 (100.0%)", Tone::Success));
    }

    #[test]
    fn test_percentage_uses_dco_sectors_when_reported() {
        let r = WipeSessionRecord {
            dco_reported_real_max_sectors: 4_000_000,
            ..record()
        };
        // 1e9 / (4e6 * 512) = 48.828..%
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.bytes_erased, Toned::new("1000000000 (48.8%)", Tone::Success));
    }

    #[test]
    fn test_partial_erasure_is_red() {
        let r = WipeSessionRecord {
            bytes_erased: 250_000_000,
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.bytes_erased, Toned::new("250000000 (25.0%)", Tone::Failure));
    }

    #[test]
    fn test_zero_denominator_is_not_available() {
        let r = WipeSessionRecord {
            device_size: 0,
            bytes_erased: 0,
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.bytes_erased, Toned::new("0 (N/A)", Tone::Success));
    }

    #[test]
    fn test_nvme_overrides_enabled_hpa() {
        let r = WipeSessionRecord {
            device_type_str: "NVME".into(),
            hpa_status: HpaStatus::Enabled,
            hpa_size: 100,
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        let expected = Toned::new("Not applicable to NVME", Tone::Success);
        assert_eq!(d.real_size, Some(expected.clone()));
        assert_eq!(d.hpa_status, expected);
        assert_eq!(d.hpa_size, expected);
    }

    #[test]
    fn test_virt_overrides_every_hpa_status() {
        for status in [HpaStatus::Enabled, HpaStatus::Disabled, HpaStatus::Unknown] {
            let r = WipeSessionRecord {
                device_type_str: "VIRT".into(),
                hpa_status: status,
                ..record()
            };
            let d = derive(r, &RunConfiguration::default());
            assert_eq!(d.hpa_status.text, "Not applicable to VIRT");
            assert_eq!(d.hpa_size.tone, Tone::Success);
            assert_eq!(d.real_size.unwrap().text, "Not applicable to VIRT");
        }
    }

    #[test]
    fn test_hpa_enabled() {
        let r = WipeSessionRecord {
            hpa_status: HpaStatus::Enabled,
            hpa_size: 2048,
            dco_reported_real_max_size: 1_000_204_886_016,
            dco_reported_real_max_size_text: "1TB".into(),
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.real_size, Some(Toned::new("1TB, 1000204886016 bytes", Tone::Failure)));
        assert_eq!(d.hpa_status, Toned::new("ENABLED", Tone::Failure));
        assert_eq!(d.hpa_size, Toned::new("2048 sectors", Tone::Failure));
    }

    #[test]
    fn test_hpa_disabled_and_unknown() {
        let d = derive(record(), &RunConfiguration::default());
        assert_eq!(d.real_size, None);
        assert_eq!(d.hpa_status, Toned::new("DISABLED", Tone::Success));
        assert_eq!(d.hpa_size, Toned::new("Zero sectors", Tone::Success));

        let r = WipeSessionRecord {
            hpa_status: HpaStatus::Unknown,
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.real_size, Some(Toned::new("Unknown", Tone::Failure)));
        assert_eq!(d.hpa_status, Toned::new("UNKNOWN", Tone::Failure));
        assert_eq!(d.hpa_size, Toned::new("UNKNOWN", Tone::Failure));
    }

    #[test]
    fn test_hpa_not_applicable_on_other_bus() {
        let r = WipeSessionRecord {
            device_type_str: "USB".into(),
            hpa_status: HpaStatus::NotApplicable,
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.real_size.unwrap().text, "Not applicable to USB");
        assert_eq!(d.hpa_status.text, "Not applicable to USB");
    }

    #[test]
    fn test_prng_label() {
        let mut config = RunConfiguration {
            method: WipeMethod::Random,
            prng: PrngAlgorithm::Twister,
            ..Default::default()
        };
        assert_eq!(derive(record(), &config).prng, "Twister");
        config.prng = PrngAlgorithm::Isaac;
        assert_eq!(derive(record(), &config).prng, "Isaac");
        config.prng = PrngAlgorithm::Isaac64;
        assert_eq!(derive(record(), &config).prng, "Isaac64");
        config.prng = PrngAlgorithm::Unknown;
        assert_eq!(derive(record(), &config).prng, "Unknown");
        for method in [
            WipeMethod::Zero,
            WipeMethod::One,
            WipeMethod::VerifyZero,
            WipeMethod::VerifyOne,
        ] {
            config.method = method;
            assert_eq!(derive(record(), &config).prng, "Not applicable to method");
        }
    }

    #[test]
    fn test_configuration_labels() {
        let config = RunConfiguration {
            method: WipeMethod::Gutmann,
            verify: VerifyMode::All,
            noblank: true,
            ..Default::default()
        };
        let d = derive(record(), &config);
        assert_eq!(d.method, "Gutmann Wipe");
        assert_eq!(d.verify, "Verify All");
        assert_eq!(d.blanking, "None");

        let d = derive(record(), &RunConfiguration { verify: VerifyMode::None, ..Default::default() });
        assert_eq!(d.blanking, "Zeros");
        assert_eq!(d.verify, "Verify None");

        let d = derive(record(), &RunConfiguration::default());
        assert_eq!(d.verify, "Verify Last");
        assert_eq!(d.method, "PRNG Stream");
    }

    #[test]
    fn test_error_summary() {
        let d = derive(record(), &RunConfiguration::default());
        assert_eq!(d.errors, Toned::new("0/0/0", Tone::Success));

        let r = WipeSessionRecord {
            verify_errors: 3,
            ..record()
        };
        let d = derive(r, &RunConfiguration::default());
        assert_eq!(d.errors, Toned::new("0/0/3", Tone::Failure));
    }

    #[test]
    fn test_text_fields() {
        let d = derive(record(), &RunConfiguration::default());
        assert_eq!(d.barcode, "ST1000:Z1D2");
        assert_eq!(d.apparent_size, "1TB, 1000000000 bytes");
        assert_eq!(d.throughput, "150 MB/sec");
        assert_eq!(d.start_time, "2023/11/14 22:13:20");
        assert_eq!(d.end_time, "2023/11/14 23:13:20");
    }

    #[test]
    fn test_timestamp_uses_time_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp(0, &tz), "1970/01/01 02:00:00");
        assert_eq!(format_timestamp(i64::MAX, &Utc), "Unknown");
    }
}
