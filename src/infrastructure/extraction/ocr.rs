//! Image OCR through an external engine

use std::io::Write;
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::domain::extraction::is_text_meaningful;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Optical character recognition backend
#[cfg_attr(test, automock)]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in an encoded image
    fn recognize(&self, image: &[u8]) -> Result<String, DomainError>;

    fn engine_name(&self) -> &'static str;
}

/// Image container recognised by magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Tiff,
    Bmp,
    Gif,
    Webp,
}

/// Sniff the image container from its leading bytes
pub fn detect_image_kind(bytes: &[u8]) -> Option<ImageKind> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some(ImageKind::Png),
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageKind::Jpeg),
        [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some(ImageKind::Tiff),
        [b'B', b'M', ..] => Some(ImageKind::Bmp),
        [b'G', b'I', b'F', b'8', ..] => Some(ImageKind::Gif),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(ImageKind::Webp),
        _ => None,
    }
}

/// Run OCR on an image payload.
///
/// Bytes that are not a recognised image container fail with `Extraction`;
/// otherwise the engine output is returned as is, possibly empty or noisy.
pub fn extract_image(engine: &dyn OcrEngine, bytes: &[u8]) -> Result<String, DomainError> {
    let kind = detect_image_kind(bytes)
        .ok_or_else(|| DomainError::extraction("image", "Not a recognised image container"))?;

    debug!("Running {} OCR on {:?} image", engine.engine_name(), kind);

    let text = engine.recognize(bytes)?;

    if !text.trim().is_empty() && !is_text_meaningful(&text, 3) {
        warn!("OCR output looks like noise ({} chars)", text.chars().count());
    }

    Ok(text)
}

/// Tesseract command-line engine, reading the image from stdin
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }
}

/// Kill and wait for a child whose input could not be delivered
fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!("OCR process already exited: {}", e);
    }
    if let Err(e) = child.wait() {
        warn!("Failed to wait for OCR process: {}", e);
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &[u8]) -> Result<String, DomainError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DomainError::extraction("image", format!("Failed to start {}: {}", self.binary, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(image) {
                drop(stdin);
                reap(&mut child);
                return Err(DomainError::extraction(
                    "image",
                    format!("Failed to send image to OCR: {}", e),
                ));
            }
        }

        let output = child.wait_with_output().map_err(|e| {
            DomainError::extraction("image", format!("OCR process failed: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::extraction(
                "image",
                format!("OCR exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn engine_name(&self) -> &'static str {
        "tesseract"
    }
}
