//! Export adapters: standalone HTML, PDF and published portfolio sites.
//!
//! All of them consume the renderer's output; none re-run editor logic.

pub mod handlers;
pub mod html;
pub mod pdf;
pub mod publish;

pub use html::{attachment_disposition, html_filename, pdf_filename, standalone_html};
pub use pdf::{PdfRenderer, WkhtmltopdfRenderer};
pub use publish::{S3SitePublisher, SitePublisher};
