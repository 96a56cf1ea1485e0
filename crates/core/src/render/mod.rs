//! Render module for turning ticket links into transparent QR images.
//!
//! Each row of a batch CSV becomes one PNG named after its ticket ID. The
//! QR symbol is drawn black on white, then near-white pixels are cleared
//! to fully transparent so the image can be laid over any background.
//!
//! # Example
//!
//! ```ignore
//! use tantalize_core::render::QrRenderer;
//!
//! let renderer = QrRenderer::new(config.render.clone());
//! let summary = renderer.render_batch(&config.paths.csv_path, &config.paths.output_dir)?;
//! println!("Rendered {} images", summary.rendered);
//! ```

mod error;
mod qr;
mod renderer;
mod transparency;

pub use error::RenderError;
pub use qr::{encode, rasterize, DARK, LIGHT, MAX_IMAGE_EDGE};
pub use renderer::{image_path, load_jobs, QrRenderer, RenderJob, RenderSummary};
pub use transparency::{clear_near_white, is_near_white, TRANSPARENT};
