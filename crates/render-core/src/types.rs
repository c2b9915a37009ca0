use crate::error::RenderError;
use std::sync::Arc;

/// The two faces a certificate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

impl FontFace {
    /// Base-14 PostScript name of the face.
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Linear barcode symbologies a surface can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Code128A,
}

/// Decoded 8-bit RGB pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgb: Arc<Vec<u8>>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 3;
        if width == 0 || height == 0 || rgb.len() != expected {
            return Err(RenderError::Image(format!(
                "{}x{} RGB image needs {} bytes, got {}",
                width,
                height,
                expected,
                rgb.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgb: Arc::new(rgb),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }
}

/// Document information dictionary entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub creator: String,
    pub producer: String,
    pub title: String,
    pub author: String,
    pub subject: String,
    /// PDF date string, e.g. `D:20240101120000Z`.
    pub creation_date: String,
    /// Additional custom keys written verbatim.
    pub custom: Vec<(String, String)>,
}
