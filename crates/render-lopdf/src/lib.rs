//! Single-page PDF drawing surface using lopdf.
//!
//! [`LopdfSurface`] records drawing operations into one page content stream and
//! assembles a complete document (fonts, images, info dictionary) on save.

mod code128;
mod metrics;
mod surface;

pub use code128::{fold_to_subset_a, Code128};
pub use metrics::text_width;
pub use surface::LopdfSurface;
