/// Page dimensions in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// ISO A4, rounded to whole points.
    pub const A4: PageSize = PageSize {
        width: 595.0,
        height: 842.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}
