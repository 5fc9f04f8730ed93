//! PDF export by shelling out to a headless HTML-to-PDF converter.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error};

use crate::errors::AppError;

/// Page setup for exported PDFs.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub page_size: &'static str,
    pub orientation: &'static str,
    pub margin_mm: u32,
    /// JPEG quality for embedded images, 0-100.
    pub image_quality: u8,
    /// Raster density. Twice the 96 dpi screen density keeps text and images crisp.
    pub dpi: u32,
    /// Layout scale. Stays at 1 so the A4 preview root fills exactly one page width.
    pub zoom: f32,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: "A4",
            orientation: "Portrait",
            margin_mm: 0,
            image_quality: 98,
            dpi: 192,
            zoom: 1.0,
        }
    }
}

/// Turns a standalone HTML document into PDF bytes.
///
/// Carried in `AppState` as `Arc<dyn PdfRenderer>`.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Vec<u8>, AppError>;
}

pub struct WkhtmltopdfRenderer {
    bin: String,
    options: PdfOptions,
}

impl WkhtmltopdfRenderer {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            options: PdfOptions::default(),
        }
    }
}

/// Converter arguments reading the document from stdin and writing `output`.
/// Local file access stays disabled, so `file:` references in user content load nothing.
pub fn command_args(options: &PdfOptions, output: &Path) -> Vec<String> {
    let margin = format!("{}mm", options.margin_mm);
    let mut args = vec![
        "--quiet".to_string(),
        "--disable-local-file-access".to_string(),
        "--page-size".to_string(),
        options.page_size.to_string(),
        "--orientation".to_string(),
        options.orientation.to_string(),
    ];
    for side in ["--margin-top", "--margin-right", "--margin-bottom", "--margin-left"] {
        args.push(side.to_string());
        args.push(margin.clone());
    }
    args.extend([
        "--image-quality".to_string(),
        options.image_quality.to_string(),
        "--dpi".to_string(),
        options.dpi.to_string(),
        "--zoom".to_string(),
        options.zoom.to_string(),
        "-".to_string(),
        output.display().to_string(),
    ]);
    args
}

#[async_trait]
impl PdfRenderer for WkhtmltopdfRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, AppError> {
        let dir = tempfile::tempdir()
            .map_err(|e| AppError::Render(format!("could not create temp dir: {e}")))?;
        let output = dir.path().join("document.pdf");

        let args = command_args(&self.options, &output);
        debug!(bin = %self.bin, ?args, "Running PDF converter");

        let mut child = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::Render(format!("failed to start '{}': {e}", self.bin)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(html.as_bytes())
                .await
                .map_err(|e| AppError::Render(format!("could not send html: {e}")))?;
            // Dropping stdin closes the pipe so the converter sees end of input.
        }

        let result = child
            .wait_with_output()
            .await
            .map_err(|e| AppError::Render(format!("converter did not finish: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            error!(status = ?result.status, "PDF converter failed: {stderr}");
            return Err(AppError::Render(format!(
                "'{}' exited with {}",
                self.bin, result.status
            )));
        }

        tokio::fs::read(&output)
            .await
            .map_err(|e| AppError::Render(format!("could not read pdf output: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_options_match_export_format() {
        let options = PdfOptions::default();
        assert_eq!(options.page_size, "A4");
        assert_eq!(options.orientation, "Portrait");
        assert_eq!(options.margin_mm, 0);
        assert_eq!(options.image_quality, 98);
        assert_eq!(options.dpi, 192);
        assert_eq!(options.zoom, 1.0);
    }

    #[test]
    fn test_command_args_layout() {
        let args = command_args(&PdfOptions::default(), &PathBuf::from("/tmp/out.pdf"));
        let joined = args.join(" ");
        assert!(joined.contains("--page-size A4"));
        assert!(joined.contains("--margin-left 0mm"));
        assert!(joined.contains("--image-quality 98"));
        assert!(joined.contains("--dpi 192"));
        assert!(joined.contains("--zoom 1"));
        assert_eq!(args[args.len() - 2], "-");
        assert_eq!(args[args.len() - 1], "/tmp/out.pdf");
    }

    #[test]
    fn test_converter_cannot_read_local_files() {
        let args = command_args(&PdfOptions::default(), &PathBuf::from("/tmp/out.pdf"));
        assert!(args.contains(&"--disable-local-file-access".to_string()));
        assert!(!args.contains(&"--enable-local-file-access".to_string()));
    }

    #[tokio::test]
    async fn test_missing_binary_is_render_error() {
        let renderer = WkhtmltopdfRenderer::new("/nonexistent/wkhtmltopdf-binary");
        let result = renderer.render("<html></html>").await;
        assert!(matches!(result, Err(AppError::Render(_))));
    }
}
