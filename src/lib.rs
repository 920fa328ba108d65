//! Calibration certificates as paginated PDF documents.
//!
//! A [CertificateDocument] is built once, from code or from loose JSON, and handed to a
//! [CertificateRenderer], which lays its sections out on landscape pages, starting new pages
//! where the layout calls for them, and serializes the result:
//!
//! ```no_run
//! use calcert::{CertificateDocument, CertificateRenderer, RenderConfig};
//!
//! # fn main() -> Result<(), calcert::RenderError> {
//! let document = CertificateDocument::from_json(r#"{"party": {"customer_name": "Acme"}}"#)?;
//! let renderer = CertificateRenderer::new(RenderConfig::from_env()?)?;
//! let certificate = renderer.render(&document)?;
//! std::fs::write(&certificate.filename, &certificate.bytes)?;
//! # Ok(())
//! # }
//! ```

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

mod page;
pub use page::*;

/// Paper sizes and orientation
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

pub(crate) mod content;

mod outline;
pub use outline::*;

mod units;
pub use units::*;

mod style;
pub use style::*;

mod canvas;
pub use canvas::*;

mod pagination;
pub use pagination::*;

mod table;
pub use table::*;

mod labels;
pub use labels::*;

mod model;
pub use model::*;

/// Section renderers, each drawing one block of a certificate at the canvas cursor
pub mod sections;

mod render;
pub use render::*;

mod config;
pub use config::*;

mod error;
pub use error::*;
