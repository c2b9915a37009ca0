use crate::error::RenderError;
use crate::scope::FontScope;
use crate::types::{FontFace, RasterImage, Symbology, TextAlign};
use wipecert_types::Color;

/// A single page that accepts drawing primitives at absolute coordinates.
///
/// Coordinates are PDF user space: origin at the bottom-left corner, y grows
/// upwards, units are points. Text is positioned by its baseline.
pub trait DocumentSurface {
    fn page_width(&self) -> f32;

    fn page_height(&self) -> f32;

    /// Select the font used by subsequent text operations.
    fn set_font(&mut self, font: FontFace);

    fn font(&self) -> FontFace;

    fn add_text(
        &mut self,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Draw `text` word-wrapped to `wrap_width`, first baseline at `y`.
    /// Returns the height consumed.
    #[allow(clippy::too_many_arguments)]
    fn add_text_wrap(
        &mut self,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
        color: Color,
        wrap_width: f32,
        align: TextAlign,
    ) -> Result<f32, RenderError>;

    #[allow(clippy::too_many_arguments)]
    fn add_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Axis-aligned ellipse centred on (`x`, `y`). `fill` of `None` leaves it transparent.
    #[allow(clippy::too_many_arguments)]
    fn add_ellipse(
        &mut self,
        x: f32,
        y: f32,
        x_radius: f32,
        y_radius: f32,
        width: f32,
        stroke: Color,
        fill: Option<Color>,
    ) -> Result<(), RenderError>;

    /// Draw a raster image with its bottom-left corner at (`x`, `y`).
    fn add_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError>;

    #[allow(clippy::too_many_arguments)]
    fn add_barcode(
        &mut self,
        symbology: Symbology,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: &str,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Switch to `font` until the returned scope is dropped.
    fn scoped_font(&mut self, font: FontFace) -> FontScope<'_, Self>
    where
        Self: Sized,
    {
        FontScope::new(self, font)
    }
}
