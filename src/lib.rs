//! Disk erasure certificates.
//!
//! Turns the record of a completed wipe session into a one-page PDF
//! certificate. The pipeline is:
//!
//! 1. [`normalize()`] fills placeholder values and derives filename-safe copies
//! 2. [`derive_fields`] computes every printed value and its colour class
//! 3. [`CertificateLayout`] draws the page onto a [`DocumentSurface`]
//! 4. [`CertificateRenderer`] ties these together and saves the file
//!
//! [`DocumentSurface`]: wipecert_render_core::DocumentSurface

pub mod branding;
pub mod certificate;
pub mod config;
pub mod derive;
pub mod error;
pub mod filename;
pub mod layout;
pub mod normalize;
pub mod record;

pub use branding::Branding;
pub use certificate::{CertificateRenderer, LAYOUT_VERSION};
pub use config::{CertificateSettings, PrngAlgorithm, RunConfiguration, VerifyMode, WipeMethod};
pub use derive::{DerivedFields, Outcome, Tone, Toned, derive_fields};
pub use error::CertificateError;
pub use filename::compose_filename;
pub use layout::CertificateLayout;
pub use normalize::{NormalizedRecord, normalize};
pub use record::{HpaStatus, WipeSessionRecord};
