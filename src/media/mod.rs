//! Document text services
//!
//! OCR and PDF parsing are delegated to host-provided engines behind the
//! [`OcrDecoder`] and [`PdfTextExtractor`] seams; this module owns only the
//! progress plumbing and the page joining/trimming policy.

use std::sync::mpsc::Sender;

use thiserror::Error;

/// Document text extraction failure
///
/// Display strings are user-visible status messages.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Unable to extract text. Please try another image.")]
    OcrFailed(String),

    #[error("Unable to read PDF file. Please try another one.")]
    PdfFailed(String),
}

/// Extraction progress, 0-100 percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractProgress {
    pub percent: u8,
}

impl ExtractProgress {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
        }
    }
}

/// A host-owned OCR engine
pub trait OcrDecoder {
    /// Recognize text in an encoded image, reporting progress as it runs
    fn recognize(
        &mut self,
        image: &[u8],
        progress: &Sender<ExtractProgress>,
    ) -> Result<String, MediaError>;
}

/// A host-owned PDF text extractor
pub trait PdfTextExtractor {
    /// Extract text page by page, one string per page
    fn extract_pages(&mut self, bytes: &[u8]) -> Result<Vec<String>, MediaError>;
}

/// The kind of document handed to [`load_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Raw text bytes, decoded as UTF-8
    PlainText,
    /// PDF bytes routed through the extractor
    Pdf,
}

impl DocumentKind {
    /// Guess the kind from a file name; anything not ending in `.pdf` is text
    pub fn from_name(name: &str) -> Self {
        if name.to_lowercase().ends_with(".pdf") {
            DocumentKind::Pdf
        } else {
            DocumentKind::PlainText
        }
    }
}

/// Join per-page texts with blank lines and trim the result
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n\n").trim().to_string()
}

/// Extract a PDF's full text with per-page progress events
pub fn extract_pdf_text(
    extractor: &mut dyn PdfTextExtractor,
    bytes: &[u8],
    progress: Option<&Sender<ExtractProgress>>,
) -> Result<String, MediaError> {
    let pages = extractor.extract_pages(bytes)?;
    let total = pages.len().max(1);

    if let Some(tx) = progress {
        for done in 1..=pages.len() {
            let percent = (done * 100 / total) as u8;
            let _ = tx.send(ExtractProgress::new(percent));
        }
    }

    tracing::debug!(pages = pages.len(), "pdf text extracted");
    Ok(join_pages(&pages))
}

/// Recognize text in an image, with optional progress reporting
pub fn recognize_image_text(
    decoder: &mut dyn OcrDecoder,
    image: &[u8],
    progress: Option<&Sender<ExtractProgress>>,
) -> Result<String, MediaError> {
    // The decoder always gets a live progress sender; unobserved events
    // just land in a channel nobody reads.
    let text = match progress {
        Some(tx) => decoder.recognize(image, tx)?,
        None => {
            let (tx, _rx) = std::sync::mpsc::channel();
            decoder.recognize(image, &tx)?
        }
    };
    tracing::debug!(chars = text.len(), "image text recognized");
    Ok(text)
}

/// Load readable text from an uploaded document
pub fn load_text(
    kind: DocumentKind,
    bytes: &[u8],
    extractor: &mut dyn PdfTextExtractor,
) -> Result<String, MediaError> {
    match kind {
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
        DocumentKind::Pdf => extract_pdf_text(extractor, bytes, None),
    }
}
