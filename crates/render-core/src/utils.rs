/// Encode text as WinAnsi bytes for a Type1 base font.
///
/// Characters outside Latin-1 become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 255 { c as u8 } else { b'?' })
        .collect()
}

/// Format a PDF date string (`D:YYYYMMDDHHmmSS`) from broken-down UTC time fields.
pub fn pdf_date(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    format!(
        "D:{:04}{:02}{:02}{:02}{:02}{:02}Z",
        year, month, day, hour, minute, second
    )
}
