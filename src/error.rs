use std::path::PathBuf;
use thiserror::Error;
use wipecert_assets::AssetError;
use wipecert_render_core::RenderError;

/// Errors from rendering and persisting a certificate.
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Branding asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Invalid session record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
