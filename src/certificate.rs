//! Certificate generation: normalize, derive, lay out, save.

use crate::branding::Branding;
use crate::config::{CertificateSettings, RunConfiguration};
use crate::derive::derive_fields;
use crate::error::CertificateError;
use crate::filename::compose_filename;
use crate::layout::CertificateLayout;
use crate::normalize::{NormalizedRecord, normalize};
use crate::record::WipeSessionRecord;
use chrono::{Datelike, Local, TimeZone, Timelike, Utc};
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;
use wipecert_assets::DirectoryAssetProvider;
use wipecert_render_core::{DocumentInfo, RenderError, utils::pdf_date};
use wipecert_render_lopdf::LopdfSurface;
use wipecert_types::PageSize;

/// Revision of the page layout, stored in the document information dictionary.
pub const LAYOUT_VERSION: &str = "2";

/// Renders certificates for one run configuration.
#[derive(Debug, Clone)]
pub struct CertificateRenderer {
    config: RunConfiguration,
    settings: CertificateSettings,
    branding: Branding,
}

impl CertificateRenderer {
    /// A renderer using the built-in branding.
    pub fn new(config: RunConfiguration, settings: CertificateSettings) -> Result<Self, CertificateError> {
        Ok(Self {
            config,
            settings,
            branding: Branding::builtin()?,
        })
    }

    /// A renderer whose brand mark is loaded from `settings.branding_dir` when one is configured.
    pub fn from_settings(
        config: RunConfiguration,
        settings: CertificateSettings,
    ) -> Result<Self, CertificateError> {
        let mut branding = Branding::builtin()?;
        if let Some(name) = &settings.brand_mark {
            let dir = settings.branding_dir.as_ref().ok_or_else(|| {
                CertificateError::Config(format!(
                    "brand_mark '{}' is set but branding_dir is not",
                    name
                ))
            })?;
            let provider = DirectoryAssetProvider::new(dir);
            branding = branding.with_brand_mark(&provider, name)?;
        }
        Ok(Self {
            config,
            settings,
            branding,
        })
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    pub fn settings(&self) -> &CertificateSettings {
        &self.settings
    }

    /// Render a certificate with times in the local time zone.
    pub fn render(&self, record: WipeSessionRecord) -> Result<PathBuf, CertificateError> {
        self.render_in(record, &Local)
    }

    /// Render a certificate into the output directory and return its path.
    pub fn render_in<Tz>(&self, record: WipeSessionRecord, tz: &Tz) -> Result<PathBuf, CertificateError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let normalized = normalize(record, tz);
        let path = self.settings.output_dir.join(compose_filename(&normalized));
        let surface = self.draw(&normalized, tz)?;

        log::info!("Writing certificate to {}", path.display());
        surface.save(&path).map_err(|e| match e {
            RenderError::Io(source) => CertificateError::Io {
                path: path.clone(),
                source,
            },
            other => CertificateError::Render(other),
        })?;
        Ok(path)
    }

    /// Render a certificate into `writer` instead of the output directory.
    pub fn render_to_writer<Tz, W>(
        &self,
        record: WipeSessionRecord,
        tz: &Tz,
        writer: &mut W,
    ) -> Result<(), CertificateError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        W: Write,
    {
        let normalized = normalize(record, tz);
        self.draw(&normalized, tz)?.write_to(writer)?;
        Ok(())
    }

    /// Render every record, one result per record in input order.
    ///
    /// A failing record does not stop the others.
    pub fn render_batch(&self, records: Vec<WipeSessionRecord>) -> Vec<Result<PathBuf, CertificateError>> {
        log::info!("Rendering {} certificate(s)", records.len());

        #[cfg(feature = "parallel")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            records.into_par_iter().map(|r| self.render(r)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = records.into_iter().map(|r| self.render(r)).collect();

        results
    }

    fn draw<Tz>(&self, normalized: &NormalizedRecord, tz: &Tz) -> Result<LopdfSurface, CertificateError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let fields = derive_fields(normalized, &self.config, tz);
        let mut surface = LopdfSurface::new(PageSize::A4, self.document_info());
        CertificateLayout::new(&fields, &self.branding, &self.settings.version).draw(&mut surface)?;
        log::debug!(
            "Laid out certificate for {}:{} with {} content operations (layout {})",
            fields.model,
            fields.serial,
            surface.operation_count(),
            LAYOUT_VERSION
        );
        Ok(surface)
    }

    fn document_info(&self) -> DocumentInfo {
        let now = Utc::now();
        DocumentInfo {
            creator: self.settings.creator.clone(),
            producer: self.settings.producer.clone(),
            title: "PDF Disk Erasure Certificate".to_string(),
            author: "Nwipe".to_string(),
            subject: "Disk Erase Certificate".to_string(),
            creation_date: pdf_date(
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute(),
                now.second(),
            ),
            custom: vec![("LayoutVersion".to_string(), LAYOUT_VERSION.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Document;

    #[test]
    fn test_render_to_writer_produces_single_page() {
        let renderer =
            CertificateRenderer::new(RunConfiguration::default(), CertificateSettings::default()).unwrap();
        let record = WipeSessionRecord {
            device_model: "ST1000".into(),
            wipe_status_txt: "ERASED".into(),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        renderer.render_to_writer(record, &Utc, &mut buffer).unwrap();

        let doc = Document::load_mem(&buffer).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_brand_mark_without_directory_is_config_error() {
        let settings = CertificateSettings {
            brand_mark: Some("logo.png".into()),
            ..Default::default()
        };
        let result = CertificateRenderer::from_settings(RunConfiguration::default(), settings);
        assert!(matches!(result, Err(CertificateError::Config(_))));
    }

    #[test]
    fn test_missing_brand_mark_is_asset_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CertificateSettings {
            branding_dir: Some(dir.path().to_path_buf()),
            brand_mark: Some("absent.png".into()),
            ..Default::default()
        };
        let result = CertificateRenderer::from_settings(RunConfiguration::default(), settings);
        assert!(matches!(result, Err(CertificateError::Asset(_))));
    }
}
