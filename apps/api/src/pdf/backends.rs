use lopdf::Document;

use super::{PagedTextBackend, PdfError, TextBackend};

/// Whole-document conversion via `pdf-extract`.
pub struct PdfExtractBackend;

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, doc: &[u8]) -> Result<String, PdfError> {
        pdf_extract::extract_text_from_mem(doc).map_err(|e| PdfError::Extraction(e.to_string()))
    }
}

/// Page-by-page extraction via `lopdf`. Pages come back in page-number order.
pub struct LopdfPageBackend;

impl PagedTextBackend for LopdfPageBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn page_texts(&self, doc: &[u8]) -> Result<Vec<String>, PdfError> {
        let document = Document::load_mem(doc).map_err(|e| PdfError::Open(e.to_string()))?;

        // BTreeMap keyed by page number, so iteration is already in page order.
        document
            .get_pages()
            .keys()
            .map(|&page| {
                document
                    .extract_text(&[page])
                    .map_err(|e| PdfError::Extraction(format!("page {page}: {e}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::stubs::pdf_with_pages;

    #[test]
    fn test_lopdf_rejects_non_pdf() {
        let err = LopdfPageBackend.page_texts(b"hello").unwrap_err();
        assert!(matches!(err, PdfError::Open(_)));
    }

    #[test]
    fn test_lopdf_pages_come_back_in_order() {
        let pdf = pdf_with_pages(&["page1", "page2"]);
        let pages = LopdfPageBackend.page_texts(&pdf).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].trim(), "page1");
        assert_eq!(pages[1].trim(), "page2");
    }

    #[test]
    fn test_pdf_extract_reads_every_page() {
        let pdf = pdf_with_pages(&["page1", "page2"]);
        let text = PdfExtractBackend.extract_text(&pdf).unwrap();
        assert!(text.contains("page1"));
        assert!(text.contains("page2"));
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(PdfExtractBackend.name(), "pdf-extract");
        assert_eq!(LopdfPageBackend.name(), "lopdf");
    }
}
