//! Code 128 symbol encoding (subset A).

use std::borrow::Cow;
use wipecert_render_core::RenderError;

/// Bar/space module widths for symbol values 0..=105.
#[rustfmt::skip]
const PATTERNS: [&[u8; 6]; 106] = [
    b"212222", b"222122", b"222221", b"121223", b"121322", b"131222", b"122213", b"122312",
    b"132212", b"221213", b"221312", b"231212", b"112232", b"122132", b"122231", b"113222",
    b"123122", b"123221", b"223211", b"221132", b"221231", b"213212", b"223112", b"312131",
    b"311222", b"321122", b"321221", b"312212", b"322112", b"322211", b"212123", b"212321",
    b"232121", b"111323", b"131123", b"131321", b"112313", b"132113", b"132311", b"211313",
    b"231113", b"231311", b"112133", b"112331", b"132131", b"113123", b"113321", b"133121",
    b"313121", b"211331", b"231131", b"213113", b"213311", b"213131", b"311123", b"311321",
    b"331121", b"312113", b"312311", b"332111", b"314111", b"221411", b"431111", b"111224",
    b"111422", b"121124", b"121421", b"141122", b"141221", b"112214", b"112412", b"122114",
    b"122411", b"142112", b"142211", b"241211", b"221114", b"413111", b"241112", b"134111",
    b"111242", b"121142", b"121241", b"114212", b"124112", b"124211", b"411212", b"421112",
    b"421211", b"212141", b"214121", b"412121", b"111143", b"111341", b"131141", b"114113",
    b"114311", b"411113", b"411311", b"113141", b"114131", b"311141", b"411131", b"211412",
    b"211214", b"211232",
];

const STOP_PATTERN: &[u8; 7] = b"2331112";
const START_A: u8 = 103;
const STOP: u8 = 106;
const MODULES_PER_SYMBOL: usize = 11;
const STOP_MODULES: usize = 13;

/// A Code 128 symbol sequence: start, data, checksum and stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    symbols: Vec<u8>,
}

impl Code128 {
    /// Encode `data` in code set A.
    ///
    /// Set A holds ASCII control characters, digits, punctuation and upper-case
    /// letters; anything else is rejected. See [`fold_to_subset_a`].
    pub fn subset_a(data: &str) -> Result<Self, RenderError> {
        if data.is_empty() {
            return Err(RenderError::Barcode("nothing to encode".into()));
        }

        let mut symbols = Vec::with_capacity(data.len() + 3);
        symbols.push(START_A);
        for c in data.chars() {
            symbols.push(subset_a_value(c).ok_or_else(|| {
                RenderError::Barcode(format!("character {:?} is not in Code 128 set A", c))
            })?);
        }

        let weighted: u32 = symbols
            .iter()
            .enumerate()
            .skip(1)
            .map(|(pos, &v)| pos as u32 * v as u32)
            .sum();
        symbols.push(((START_A as u32 + weighted) % 103) as u8);
        symbols.push(STOP);
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn checksum(&self) -> u8 {
        self.symbols[self.symbols.len() - 2]
    }

    /// Total width of the symbol sequence in modules.
    pub fn module_count(&self) -> usize {
        (self.symbols.len() - 1) * MODULES_PER_SYMBOL + STOP_MODULES
    }

    /// Dark bars as `(start_module, width_in_modules)` runs.
    pub fn bars(&self) -> Vec<(usize, usize)> {
        let mut bars = Vec::new();
        let mut cursor = 0;
        for &symbol in &self.symbols {
            let pattern: &[u8] = if symbol == STOP {
                STOP_PATTERN
            } else {
                PATTERNS[symbol as usize]
            };
            for (i, w) in pattern.iter().enumerate() {
                let width = (w - b'0') as usize;
                // Elements alternate bar, space, bar, ...
                if i % 2 == 0 {
                    bars.push((cursor, width));
                }
                cursor += width;
            }
        }
        bars
    }
}

fn subset_a_value(c: char) -> Option<u8> {
    match c as u32 {
        0..=31 => Some(c as u8 + 64),
        32..=95 => Some(c as u8 - 32),
        _ => None,
    }
}

/// Map `data` onto characters code set A can carry.
///
/// Lower-case ASCII letters are upper-cased; anything else outside the set
/// becomes `?`. Borrowed when nothing needed changing.
pub fn fold_to_subset_a(data: &str) -> Cow<'_, str> {
    if data.chars().all(|c| subset_a_value(c).is_some()) {
        return Cow::Borrowed(data);
    }
    Cow::Owned(
        data.chars()
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                if subset_a_value(upper).is_some() { upper } else { '?' }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_is_eleven_modules() {
        for p in PATTERNS.iter() {
            let sum: u32 = p.iter().map(|b| (b - b'0') as u32).sum();
            assert_eq!(sum, 11);
        }
        let stop: u32 = STOP_PATTERN.iter().map(|b| (b - b'0') as u32).sum();
        assert_eq!(stop, 13);
    }

    #[test]
    fn test_checksum() {
        // 'A' = 33, 'B' = 34: (103 + 33*1 + 34*2) % 103 = 101
        let code = Code128::subset_a("AB").unwrap();
        assert_eq!(code.symbols(), &[103, 33, 34, 101, 106]);
        assert_eq!(code.checksum(), 101);
    }

    #[test]
    fn test_module_count_and_bars() {
        let code = Code128::subset_a("ST1000:UNKNOWN").unwrap();
        assert_eq!(code.module_count(), (1 + 14 + 1) * 11 + 13);
        let bars = code.bars();
        // Three bars per symbol, four in the stop pattern.
        assert_eq!(bars.len(), 16 * 3 + 4);
        let (last_start, last_width) = *bars.last().unwrap();
        assert_eq!(last_start + last_width, code.module_count());
    }

    #[test]
    fn test_lowercase_rejected_then_folded() {
        assert!(matches!(Code128::subset_a("abc"), Err(RenderError::Barcode(_))));
        assert_eq!(fold_to_subset_a("Samsung:S4x"), "SAMSUNG:S4X");
        assert_eq!(fold_to_subset_a("WD:{1}"), "WD:?1?");
        assert!(matches!(fold_to_subset_a("WDC:123"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Code128::subset_a("").is_err());
    }
}
