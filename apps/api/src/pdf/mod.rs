//! Text Extractor: turns an uploaded PDF into one plain-text string.
//!
//! Primary path: whole-document conversion (`PdfExtractBackend`).
//! Secondary path, only when the primary returns an empty string: page-by-page
//! extraction (`LopdfPageBackend`), concatenated in page order with no separator.
//! A failure on either path becomes one user-visible message and an empty result.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::diagnostics::Diagnostics;

pub mod backends;

pub use backends::{LopdfPageBackend, PdfExtractBackend};

/// Prefix of the message shown when a backend fails.
pub const EXTRACTION_ERROR_PREFIX: &str = "Error extracting text from PDF";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to open document: {0}")]
    Open(String),

    #[error("failed to extract text: {0}")]
    Extraction(String),

    #[error("{backend} panicked: {message}")]
    Panicked {
        backend: &'static str,
        message: String,
    },
}

/// Whole-document text conversion.
pub trait TextBackend: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract_text(&self, doc: &[u8]) -> Result<String, PdfError>;
}

/// Page-oriented extraction; returns one string per page in page order.
pub trait PagedTextBackend: Send + Sync {
    fn name(&self) -> &'static str;
    fn page_texts(&self, doc: &[u8]) -> Result<Vec<String>, PdfError>;
}

pub struct TextExtractor {
    primary: Box<dyn TextBackend>,
    fallback: Box<dyn PagedTextBackend>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(Box::new(PdfExtractBackend), Box::new(LopdfPageBackend))
    }
}

impl TextExtractor {
    pub fn new(primary: Box<dyn TextBackend>, fallback: Box<dyn PagedTextBackend>) -> Self {
        Self { primary, fallback }
    }

    /// Extracts the document's text. Never fails: any backend failure is
    /// reported through `diagnostics` and yields an empty string.
    pub fn extract_text(&self, doc: &[u8], diagnostics: &mut Diagnostics) -> String {
        let primary = self.primary.name();
        match guarded(primary, || self.primary.extract_text(doc)) {
            Ok(text) if !text.is_empty() => {
                info!(backend = primary, chars = text.len(), "text extracted");
                return text;
            }
            Ok(_) => {
                debug!(backend = primary, "primary extraction returned no text, falling back");
            }
            Err(e) => {
                warn!(backend = primary, error = %e, "primary extraction failed");
                diagnostics.error(format!("{EXTRACTION_ERROR_PREFIX}: {e}"));
                return String::new();
            }
        }

        let fallback = self.fallback.name();
        match guarded(fallback, || self.fallback.page_texts(doc)) {
            Ok(pages) => {
                let text = pages.concat();
                info!(
                    backend = fallback,
                    pages = pages.len(),
                    chars = text.len(),
                    "text extracted page by page"
                );
                text
            }
            Err(e) => {
                warn!(backend = fallback, error = %e, "fallback extraction failed");
                diagnostics.error(format!("{EXTRACTION_ERROR_PREFIX}: {e}"));
                String::new()
            }
        }
    }
}

/// Runs a backend call, converting a decoder panic into `PdfError::Panicked`.
fn guarded<T>(
    backend: &'static str,
    f: impl FnOnce() -> Result<T, PdfError>,
) -> Result<T, PdfError> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(PdfError::Panicked { backend, message })
        }
    }
}

#[cfg(test)]
pub(crate) mod stubs {
    use super::*;

    pub enum Primary {
        Text(&'static str),
        Fails,
        Panics,
    }

    impl TextBackend for Primary {
        fn name(&self) -> &'static str {
            "stub-primary"
        }

        fn extract_text(&self, _doc: &[u8]) -> Result<String, PdfError> {
            match self {
                Primary::Text(t) => Ok(t.to_string()),
                Primary::Fails => Err(PdfError::Open("not a PDF".to_string())),
                Primary::Panics => panic!("bad font table"),
            }
        }
    }

    pub enum Pages {
        Of(Vec<&'static str>),
        Fails,
    }

    impl PagedTextBackend for Pages {
        fn name(&self) -> &'static str {
            "stub-pages"
        }

        fn page_texts(&self, _doc: &[u8]) -> Result<Vec<String>, PdfError> {
            match self {
                Pages::Of(pages) => Ok(pages.iter().map(|p| p.to_string()).collect()),
                Pages::Fails => Err(PdfError::Extraction("broken xref".to_string())),
            }
        }
    }

    pub fn extractor(primary: Primary, pages: Pages) -> TextExtractor {
        TextExtractor::new(Box::new(primary), Box::new(pages))
    }

    /// Builds a real PDF with one line of Helvetica text per page.
    pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = texts
            .iter()
            .map(|text| {
                let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
                let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
                let page_id = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => Object::Reference(pages_id),
                    "MediaBox" => vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ],
                    "Contents" => Object::Reference(content_id),
                    "Resources" => dictionary! {
                        "Font" => dictionary! { "F1" => Object::Reference(font_id) },
                    },
                });
                Object::Reference(page_id)
            })
            .collect();

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
