use crate::code128::{fold_to_subset_a, Code128};
use crate::metrics::text_width;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wipecert_render_core::utils::to_win_ansi;
use wipecert_render_core::{
    DocumentInfo, DocumentSurface, FontFace, RasterImage, RenderError, Symbology, TextAlign,
};
use wipecert_types::{Color, PageSize};

/// Cubic Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Baseline-to-baseline distance for wrapped text, as a multiple of font size.
const LINE_SPACING: f32 = 1.2;

/// A one-page PDF document under construction.
///
/// Drawing calls append operators to the page's content stream. Nothing is
/// serialized until [`write_to`](Self::write_to) or [`save`](Self::save).
pub struct LopdfSurface {
    page: PageSize,
    info: DocumentInfo,
    operations: Vec<Operation>,
    images: Vec<(String, RasterImage)>,
    font: FontFace,
}

impl LopdfSurface {
    /// Create a document with a single empty page of the given size.
    pub fn new(page: PageSize, info: DocumentInfo) -> Self {
        Self {
            page,
            info,
            operations: Vec::new(),
            images: Vec::new(),
            font: FontFace::Regular,
        }
    }

    /// Number of content stream operators recorded so far.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    fn font_resource(face: FontFace) -> &'static str {
        match face {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_stroke_color(&mut self, color: Color) {
        let [r, g, b] = color.to_unit();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
    }

    fn set_fill_color(&mut self, color: Color) {
        let [r, g, b] = color.to_unit();
        self.push("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn show_text(&mut self, text: &str, size: f32, x: f32, y: f32, color: Color) {
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(Self::font_resource(self.font).as_bytes().to_vec()),
                size.into(),
            ],
        );
        self.set_fill_color(color);
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn wrap_lines(&self, text: &str, size: f32, wrap_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if !current.is_empty() && text_width(&candidate, self.font, size) > wrap_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn build_document(self) -> Result<Document, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in [FontFace::Regular, FontFace::Bold] {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(Self::font_resource(face).as_bytes(), font_id);
        }

        let mut xobjects = Dictionary::new();
        for (name, image) in &self.images {
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => image.width() as i64,
                    "Height" => image.height() as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                image.rgb().to_vec(),
            );
            let image_id = doc.add_object(stream);
            xobjects.set(name.as_bytes(), image_id);
        }

        let mut resources = dictionary! { "Font" => fonts };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        let resources_id = doc.add_object(resources);

        let content = Content {
            operations: self.operations,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), self.page.width.into(), self.page.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = Self::add_info(&mut doc, &self.info);
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        Ok(doc)
    }

    fn add_info(doc: &mut Document, info: &DocumentInfo) -> ObjectId {
        let literal = |s: &str| Object::String(to_win_ansi(s), StringFormat::Literal);
        let mut dict = Dictionary::new();
        for (key, value) in [
            ("Creator", &info.creator),
            ("Producer", &info.producer),
            ("Title", &info.title),
            ("Author", &info.author),
            ("Subject", &info.subject),
            ("CreationDate", &info.creation_date),
        ] {
            if !value.is_empty() {
                dict.set(key, literal(value.as_str()));
            }
        }
        for (key, value) in &info.custom {
            dict.set(key.as_bytes(), literal(value.as_str()));
        }
        doc.add_object(dict)
    }

    /// Serialize the document into `writer`.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<(), RenderError> {
        let mut doc = self.build_document()?;
        doc.save_to(writer)?;
        Ok(())
    }

    /// Serialize the document into a byte buffer.
    pub fn to_bytes(self) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::debug!("Wrote PDF document to {}", path.display());
        Ok(())
    }
}

impl DocumentSurface for LopdfSurface {
    fn page_width(&self) -> f32 {
        self.page.width
    }

    fn page_height(&self) -> f32 {
        self.page.height
    }

    fn set_font(&mut self, font: FontFace) {
        self.font = font;
    }

    fn font(&self) -> FontFace {
        self.font
    }

    fn add_text(
        &mut self,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        if text.is_empty() {
            return Ok(());
        }
        self.show_text(text, size, x, y, color);
        Ok(())
    }

    fn add_text_wrap(
        &mut self,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
        color: Color,
        wrap_width: f32,
        align: TextAlign,
    ) -> Result<f32, RenderError> {
        if wrap_width <= 0.0 {
            return Err(RenderError::Other(format!(
                "wrap width must be positive, got {}",
                wrap_width
            )));
        }
        let leading = size * LINE_SPACING;
        let lines = self.wrap_lines(text, size, wrap_width);
        for (i, line) in lines.iter().enumerate() {
            let slack = wrap_width - text_width(line, self.font, size);
            let line_x = match align {
                TextAlign::Left => x,
                TextAlign::Center => x + slack.max(0.0) / 2.0,
                TextAlign::Right => x + slack.max(0.0),
            };
            self.show_text(line, size, line_x, y - i as f32 * leading, color);
        }
        Ok(lines.len() as f32 * leading)
    }

    fn add_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        self.push("q", vec![]);
        self.push("w", vec![width.into()]);
        self.set_stroke_color(color);
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn add_ellipse(
        &mut self,
        x: f32,
        y: f32,
        x_radius: f32,
        y_radius: f32,
        width: f32,
        stroke: Color,
        fill: Option<Color>,
    ) -> Result<(), RenderError> {
        let kx = x_radius * KAPPA;
        let ky = y_radius * KAPPA;

        self.push("q", vec![]);
        self.push("w", vec![width.into()]);
        self.set_stroke_color(stroke);
        if let Some(fill) = fill {
            self.set_fill_color(fill);
        }
        self.push("m", vec![(x - x_radius).into(), y.into()]);
        let quadrants = [
            [x - x_radius, y + ky, x - kx, y + y_radius, x, y + y_radius],
            [x + kx, y + y_radius, x + x_radius, y + ky, x + x_radius, y],
            [x + x_radius, y - ky, x + kx, y - y_radius, x, y - y_radius],
            [x - kx, y - y_radius, x - x_radius, y - ky, x - x_radius, y],
        ];
        for q in quadrants {
            self.push("c", q.iter().map(|&v| v.into()).collect());
        }
        self.push(if fill.is_some() { "B" } else { "S" }, vec![]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn add_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push((name.clone(), image.clone()));

        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                width.into(),
                0.into(),
                0.into(),
                height.into(),
                x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn add_barcode(
        &mut self,
        symbology: Symbology,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: &str,
        color: Color,
    ) -> Result<(), RenderError> {
        let code = match symbology {
            Symbology::Code128A => {
                let folded = fold_to_subset_a(data);
                if folded != data {
                    log::warn!(
                        "Barcode data {:?} folded to {:?} for Code 128 set A",
                        data,
                        folded
                    );
                }
                Code128::subset_a(&folded)?
            }
        };

        let module = width / code.module_count() as f32;
        self.push("q", vec![]);
        self.set_fill_color(color);
        for (start, modules) in code.bars() {
            self.push(
                "re",
                vec![
                    (x + start as f32 * module).into(),
                    y.into(),
                    (modules as f32 * module).into(),
                    height.into(),
                ],
            );
        }
        self.push("f", vec![]);
        self.push("Q", vec![]);
        Ok(())
    }
}
