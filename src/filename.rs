//! Output filename for a certificate.

use crate::normalize::NormalizedRecord;

/// `nwipe_report_<end time>_Model_<model>_Serial_<serial>.pdf`, built from the
/// sanitized fields. Two devices with the same model, serial and end second
/// collide.
pub fn compose_filename(normalized: &NormalizedRecord) -> String {
    format!(
        "nwipe_report_{}_Model_{}_Serial_{}.pdf",
        normalized.sanitized_end_time, normalized.sanitized_model, normalized.sanitized_serial
    )
}
