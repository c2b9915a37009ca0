//! Images placed in the certificate header.

use crate::error::CertificateError;
use wipecert_assets::AssetProvider;
use wipecert_render_core::{RasterImage, RenderError};
use wipecert_types::Color;

const ICON_SIZE: u32 = 96;

/// The brand mark and the two outcome icons.
#[derive(Debug, Clone)]
pub struct Branding {
    pub brand_mark: RasterImage,
    pub success_icon: RasterImage,
    pub failure_icon: RasterImage,
}

impl Branding {
    /// The built-in images, drawn procedurally.
    pub fn builtin() -> Result<Self, RenderError> {
        Ok(Self {
            brand_mark: shredder_mark()?,
            success_icon: tick_icon()?,
            failure_icon: cross_icon()?,
        })
    }

    /// Replace the brand mark with a PNG or JPEG asset.
    pub fn with_brand_mark(
        mut self,
        provider: &dyn AssetProvider,
        name: &str,
    ) -> Result<Self, CertificateError> {
        let bytes = provider.load(name)?;
        self.brand_mark = decode_image(&bytes)?;
        log::info!("Using brand mark '{}' from {}", name, provider.name());
        Ok(self)
    }
}

/// Decode PNG/JPEG bytes into an RGB raster, dropping any alpha channel.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, RenderError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| RenderError::Image(e.to_string()))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    RasterImage::new(width, height, decoded.into_raw())
}

/// A small RGB pixel buffer with anti-alias-free shape primitives.
struct Canvas {
    size: u32,
    rgb: Vec<u8>,
}

impl Canvas {
    fn new(size: u32, background: Color) -> Self {
        let rgb = [background.r, background.g, background.b].repeat((size * size) as usize);
        Self { size, rgb }
    }

    fn paint_where(&mut self, color: Color, inside: impl Fn(f32, f32) -> bool) {
        for py in 0..self.size {
            for px in 0..self.size {
                if inside(px as f32 + 0.5, py as f32 + 0.5) {
                    let i = ((py * self.size + px) * 3) as usize;
                    self.rgb[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
                }
            }
        }
    }

    fn disc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.paint_where(color, |x, y| (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius);
    }

    /// A straight stroke of the given thickness from `a` to `b`.
    fn stroke(&mut self, a: (f32, f32), b: (f32, f32), thickness: f32, color: Color) {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let len_sq = dx * dx + dy * dy;
        let half = thickness / 2.0;
        self.paint_where(color, |x, y| {
            let t = (((x - a.0) * dx + (y - a.1) * dy) / len_sq).clamp(0.0, 1.0);
            let (nx, ny) = (a.0 + t * dx, a.1 + t * dy);
            (x - nx).powi(2) + (y - ny).powi(2) <= half * half
        });
    }

    fn rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.paint_where(color, |x, y| x >= x0 && x < x1 && y >= y0 && y < y1);
    }

    fn into_image(self) -> Result<RasterImage, RenderError> {
        RasterImage::new(self.size, self.size, self.rgb)
    }
}

fn tick_icon() -> Result<RasterImage, RenderError> {
    let s = ICON_SIZE as f32;
    let mut canvas = Canvas::new(ICON_SIZE, Color::WHITE);
    canvas.disc(s / 2.0, s / 2.0, s * 0.46, Color::DARK_GREEN);
    canvas.stroke((s * 0.26, s * 0.52), (s * 0.43, s * 0.70), s * 0.1, Color::WHITE);
    canvas.stroke((s * 0.43, s * 0.70), (s * 0.76, s * 0.32), s * 0.1, Color::WHITE);
    canvas.into_image()
}

fn cross_icon() -> Result<RasterImage, RenderError> {
    let s = ICON_SIZE as f32;
    let mut canvas = Canvas::new(ICON_SIZE, Color::WHITE);
    canvas.disc(s / 2.0, s / 2.0, s * 0.46, Color::RED);
    canvas.stroke((s * 0.3, s * 0.3), (s * 0.7, s * 0.7), s * 0.1, Color::WHITE);
    canvas.stroke((s * 0.7, s * 0.3), (s * 0.3, s * 0.7), s * 0.1, Color::WHITE);
    canvas.into_image()
}

/// A disk platter above a row of shredded strips.
fn shredder_mark() -> Result<RasterImage, RenderError> {
    let s = ICON_SIZE as f32;
    let mut canvas = Canvas::new(ICON_SIZE, Color::WHITE);
    canvas.disc(s / 2.0, s * 0.32, s * 0.28, Color::GRAY);
    canvas.disc(s / 2.0, s * 0.32, s * 0.06, Color::WHITE);
    canvas.rect(s * 0.1, s * 0.56, s * 0.9, s * 0.62, Color::BLACK);
    for i in 0..7 {
        let x = s * (0.14 + i as f32 * 0.11);
        canvas.rect(x, s * 0.66, x + s * 0.06, s * 0.92, Color::gray(0x30));
    }
    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wipecert_assets::InMemoryAssetProvider;

    fn pixel(image: &RasterImage, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * image.width() + x) * 3) as usize;
        [image.rgb()[i], image.rgb()[i + 1], image.rgb()[i + 2]]
    }

    #[test]
    fn test_builtin_icons_use_outcome_colours() {
        let branding = Branding::builtin().unwrap();
        assert_eq!(branding.success_icon.width(), ICON_SIZE);
        // Corners stay white; a point on the ring is coloured.
        assert_eq!(pixel(&branding.success_icon, 0, 0), [0xff, 0xff, 0xff]);
        assert_eq!(pixel(&branding.success_icon, 48, 8), [0, 0x64, 0]);
        assert_eq!(pixel(&branding.failure_icon, 48, 8), [0xff, 0, 0]);
        // Centre of the cross is white.
        assert_eq!(pixel(&branding.failure_icon, 48, 48), [0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_custom_brand_mark_from_png() {
        let mut png = Vec::new();
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let provider = InMemoryAssetProvider::new().with_asset("mark.png", png).unwrap();

        let branding = Branding::builtin()
            .unwrap()
            .with_brand_mark(&provider, "mark.png")
            .unwrap();
        assert_eq!(branding.brand_mark.width(), 3);
        assert_eq!(branding.brand_mark.height(), 2);
        assert_eq!(pixel(&branding.brand_mark, 2, 1), [10, 20, 30]);
    }

    #[test]
    fn test_missing_or_corrupt_brand_mark() {
        let provider = InMemoryAssetProvider::new()
            .with_asset("broken.png", b"not an image".to_vec())
            .unwrap();
        let builtin = Branding::builtin().unwrap();
        assert!(matches!(
            builtin.clone().with_brand_mark(&provider, "absent.png"),
            Err(CertificateError::Asset(_))
        ));
        assert!(matches!(
            builtin.with_brand_mark(&provider, "broken.png"),
            Err(CertificateError::Render(RenderError::Image(_)))
        ));
    }
}
