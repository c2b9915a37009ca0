//! Fixed single-page certificate layout.
//!
//! All coordinates are literal positions on an A4 page in PDF user space
//! (origin bottom-left). Labels are regular grey text; values taken from the
//! record are bold, selected through a [`FontScope`] so the regular face is
//! back in place whatever path drew the value.

use crate::branding::Branding;
use crate::derive::{DerivedFields, Outcome, Tone, Toned};
use wipecert_render_core::{DocumentSurface, FontFace, FontScope, RenderError, Symbology, TextAlign};
use wipecert_types::Color;

const LABEL_SIZE: f32 = 12.0;
const DATA_SIZE: f32 = 10.0;

/// Footnote explaining the bytes-erased figure.
pub const BYTES_ERASED_LEGEND: &str =
    "* bytes erased: The amount of drive that's been erased at least once";

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::DARK_GREEN,
        Tone::Failure => Color::RED,
    }
}

/// Draws one certificate from its derived fields.
pub struct CertificateLayout<'a> {
    fields: &'a DerivedFields,
    branding: &'a Branding,
    footer: String,
}

impl<'a> CertificateLayout<'a> {
    pub fn new(fields: &'a DerivedFields, branding: &'a Branding, version: &str) -> Self {
        Self {
            fields,
            branding,
            footer: format!("Disc Erasure by NWIPE version {}", version),
        }
    }

    /// Issue every drawing call, top to bottom by section.
    pub fn draw<S: DocumentSurface>(&self, surface: &mut S) -> Result<(), RenderError> {
        surface.set_font(FontFace::Regular);
        self.footer(surface)?;
        self.header(surface)?;
        self.organisation(surface)?;
        self.customer(surface)?;
        self.disk_information(surface)?;
        self.erasure_details(surface)?;
        self.operator(surface)?;
        Ok(())
    }

    fn footer<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        let width = s.page_width();
        s.add_text_wrap(&self.footer, 12.0, 0.0, 30.0, Color::BLACK, width, TextAlign::Center)?;
        s.add_line(50.0, 50.0, 550.0, 50.0, 3.0, Color::BLACK)?;
        Ok(())
    }

    fn header<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        let f = self.fields;
        s.add_line(50.0, 650.0, 550.0, 650.0, 3.0, Color::BLACK)?;
        s.add_image(&self.branding.brand_mark, 45.0, 665.0, 100.0, 100.0)?;
        let icon = match f.outcome {
            Outcome::Success => &self.branding.success_icon,
            Outcome::Failure => &self.branding.failure_icon,
        };
        s.add_image(icon, 450.0, 665.0, 100.0, 100.0)?;
        {
            let mut bold = s.scoped_font(FontFace::Bold);
            bold.add_text(&format!(" Model: {} ", f.model), 14.0, 195.0, 755.0, Color::BLACK)?;
            bold.add_text(&format!(" S/N: {} ", f.serial), 14.0, 215.0, 735.0, Color::BLACK)?;
        }
        s.add_text("Disk Erasure Report", 24.0, 190.0, 690.0, Color::BLACK)?;
        s.add_barcode(Symbology::Code128A, 100.0, 790.0, 400.0, 25.0, &f.barcode, Color::BLACK)?;
        Ok(())
    }

    fn organisation<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        s.add_line(50.0, 550.0, 550.0, 550.0, 1.0, Color::GRAY)?;
        heading(s, "Organisation Performing The Disk Erasure", 50.0, 630.0)?;
        label(s, "Business Name:", 60.0, 610.0)?;
        label(s, "Business Address:", 60.0, 590.0)?;
        label(s, "Contact Name:", 60.0, 570.0)?;
        label(s, "Contact Phone:", 300.0, 570.0)?;
        Ok(())
    }

    fn customer<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        s.add_line(50.0, 450.0, 550.0, 450.0, 1.0, Color::GRAY)?;
        heading(s, "Customer Details", 50.0, 530.0)?;
        label(s, "Name:", 60.0, 510.0)?;
        label(s, "Address:", 60.0, 490.0)?;
        label(s, "Contact Name:", 60.0, 470.0)?;
        label(s, "Contact Phone:", 300.0, 470.0)?;
        Ok(())
    }

    fn disk_information<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        let f = self.fields;
        s.add_line(50.0, 330.0, 550.0, 330.0, 1.0, Color::GRAY)?;
        heading(s, "Disk Information", 50.0, 430.0)?;

        label(s, "Make/Model:", 60.0, 410.0)?;
        value(s, &f.model, 135.0, 410.0, Color::BLACK)?;
        label(s, "Serial:", 340.0, 410.0)?;
        value(s, &f.serial, 380.0, 410.0, Color::BLACK)?;

        label(s, "Size(Apparent): ", 60.0, 390.0)?;
        value(s, &f.apparent_size, 145.0, 390.0, Color::BLACK)?;
        label(s, "Bus:", 340.0, 390.0)?;
        value(s, &f.bus, 370.0, 390.0, Color::BLACK)?;

        label(s, "Size(Real):", 60.0, 370.0)?;
        if let Some(real) = &f.real_size {
            toned(s, real, 125.0, 370.0)?;
        }
        label(s, "Remapped Sectors:", 340.0, 370.0)?;
        Ok(())
    }

    fn erasure_details<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        let f = self.fields;
        heading(s, "Disk Erasure Details", 50.0, 310.0)?;

        label(s, "Start time:", 60.0, 290.0)?;
        value(s, &f.start_time, 120.0, 290.0, Color::BLACK)?;
        label(s, "End time:", 300.0, 290.0)?;
        value(s, &f.end_time, 360.0, 290.0, Color::BLACK)?;

        label(s, "Duration:", 60.0, 270.0)?;
        value(s, &f.duration, 115.0, 270.0, Color::BLACK)?;
        label(s, "Status:", 300.0, 270.0)?;
        self.status(s)?;

        label(s, "Method:", 60.0, 250.0)?;
        value(s, &f.method, 110.0, 250.0, Color::BLACK)?;
        label(s, "PRNG algorithm:", 300.0, 250.0)?;
        value(s, &f.prng, 395.0, 250.0, Color::BLACK)?;

        label(s, "Final Pass(Zeros/Ones/None):", 60.0, 230.0)?;
        value(s, &f.blanking, 230.0, 230.0, Color::BLACK)?;
        label(s, "Verify Pass(Last/All/None):", 300.0, 230.0)?;
        value(s, &f.verify, 450.0, 230.0, Color::BLACK)?;

        label(s, "*Bytes Erased:", 60.0, 210.0)?;
        toned(s, &f.bytes_erased, 145.0, 210.0)?;
        label(s, "Rounds(completed/requested):", 300.0, 210.0)?;
        toned(s, &f.rounds, 470.0, 210.0)?;

        label(s, "HPA:", 60.0, 190.0)?;
        toned(s, &f.hpa_status, 95.0, 190.0)?;
        label(s, "HPA Size:", 300.0, 190.0)?;
        toned(s, &f.hpa_size, 360.0, 190.0)?;

        label(s, "Errors(pass/sync/verify):", 60.0, 170.0)?;
        toned(s, &f.errors, 195.0, 170.0)?;
        label(s, "Throughput:", 300.0, 170.0)?;
        value(s, &f.throughput, 370.0, 170.0, Color::BLACK)?;

        label(s, "Information:", 60.0, 150.0)?;
        value(s, BYTES_ERASED_LEGEND, 60.0, 130.0, Color::BLACK)?;
        Ok(())
    }

    /// Outcome word inside an outline ellipse.
    fn status<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        let status = &self.fields.status;
        let color = tone_color(status.tone);
        // Nudged so the common words sit centred in the ellipse.
        let x = match status.text.as_str() {
            "ERASED" => 365.0,
            "FAILED" => 370.0,
            _ => 360.0,
        };
        {
            let mut bold = s.scoped_font(FontFace::Bold);
            bold.add_text(&status.text, LABEL_SIZE, x, 270.0, color)?;
        }
        s.add_ellipse(390.0, 275.0, 45.0, 10.0, 2.0, color, None)?;
        Ok(())
    }

    fn operator<S: DocumentSurface>(&self, s: &mut S) -> Result<(), RenderError> {
        s.add_line(50.0, 120.0, 550.0, 120.0, 1.0, Color::GRAY)?;
        heading(s, "Technician/Operator ID", 50.0, 100.0)?;
        label(s, "Name/ID:", 60.0, 80.0)?;
        heading(s, "Signature:", 300.0, 100.0)?;
        s.add_line(360.0, 65.0, 550.0, 66.0, 1.0, Color::GRAY)?;
        Ok(())
    }
}

fn heading<S: DocumentSurface>(s: &mut S, text: &str, x: f32, y: f32) -> Result<(), RenderError> {
    s.add_text(text, LABEL_SIZE, x, y, Color::BLUE)
}

fn label<S: DocumentSurface>(s: &mut S, text: &str, x: f32, y: f32) -> Result<(), RenderError> {
    s.add_text(text, LABEL_SIZE, x, y, Color::GRAY)
}

fn value<S: DocumentSurface>(
    s: &mut S,
    text: &str,
    x: f32,
    y: f32,
    color: Color,
) -> Result<(), RenderError> {
    FontScope::new(s, FontFace::Bold).add_text(text, DATA_SIZE, x, y, color)
}

fn toned<S: DocumentSurface>(s: &mut S, v: &Toned, x: f32, y: f32) -> Result<(), RenderError> {
    value(s, &v.text, x, y, tone_color(v.tone))
}
