//! Core rendering abstractions for certificate documents.
//!
//! This crate provides the drawing primitives a certificate layout is written against:
//! - `DocumentSurface` trait for the page-level drawing operations
//! - `FontScope` for temporarily switching the active font
//! - Error and value types shared by surface backends

mod error;
mod scope;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use scope::FontScope;
pub use traits::DocumentSurface;
pub use types::{DocumentInfo, FontFace, RasterImage, Symbology, TextAlign};
