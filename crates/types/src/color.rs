/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xff);
    pub const DARK_GREEN: Color = Color::rgb(0, 0x64, 0);
    pub const GRAY: Color = Color::rgb(0x5a, 0x5a, 0x5a);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Components scaled to the `0.0..=1.0` range used by PDF colour operators.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_components() {
        assert_eq!(Color::WHITE.to_unit(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_unit(), [0.0, 0.0, 0.0]);
    }
}
