//! Resume Parser: bytes → text → fields, with user-visible errors collected
//! along the way.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::diagnostics::Diagnostics;
use crate::fields::{FieldExtractor, FieldResult};
use crate::nlp::Tokenizer;
use crate::pdf::TextExtractor;

/// Shown when neither extraction path produced any text.
pub const EMPTY_DOCUMENT_MESSAGE: &str = "Could not extract text from the uploaded PDF.";

/// What the presentation layer renders for one upload.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    /// `None` when field extraction was skipped because no text was found.
    pub fields: Option<FieldResult>,
    pub errors: Vec<String>,
}

pub struct ResumeParser {
    text: TextExtractor,
    fields: FieldExtractor,
}

impl ResumeParser {
    pub fn new(text: TextExtractor, fields: FieldExtractor) -> Self {
        Self { text, fields }
    }

    /// Production wiring: pdf-extract with lopdf fallback, and the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::new(TextExtractor::default(), FieldExtractor::new(tokenizer))
    }

    pub fn parse(&self, doc: &[u8]) -> ParseOutcome {
        let mut diagnostics = Diagnostics::new();
        let text = self.text.extract_text(doc, &mut diagnostics);

        if text.is_empty() {
            diagnostics.error(EMPTY_DOCUMENT_MESSAGE);
            return ParseOutcome {
                fields: None,
                errors: diagnostics.into_messages(),
            };
        }

        let fields = self.fields.extract_info(&text);
        info!(
            bytes = doc.len(),
            chars = text.len(),
            found = fields.found(),
            "resume parsed"
        );

        ParseOutcome {
            fields: Some(fields),
            errors: diagnostics.into_messages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldName, SENTINEL};
    use crate::nlp::stubs::FixedTokenizer;
    use crate::nlp::RuleTagger;
    use crate::pdf::stubs::{extractor, Pages, Primary};
    use crate::pdf::EXTRACTION_ERROR_PREFIX;

    fn parser(primary: Primary, pages: Pages) -> ResumeParser {
        ResumeParser::new(
            extractor(primary, pages),
            FieldExtractor::new(Arc::new(FixedTokenizer(vec![]))),
        )
    }

    #[test]
    fn test_primary_failure_reports_both_messages_and_skips_fields() {
        let outcome = parser(Primary::Fails, Pages::Of(vec!["unused"])).parse(b"junk");
        assert!(outcome.fields.is_none());
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].starts_with(EXTRACTION_ERROR_PREFIX));
        assert_eq!(outcome.errors[1], EMPTY_DOCUMENT_MESSAGE);
    }

    #[test]
    fn test_empty_document_reports_one_message() {
        let outcome = parser(Primary::Text(""), Pages::Of(vec!["", ""])).parse(b"%PDF");
        assert!(outcome.fields.is_none());
        assert_eq!(outcome.errors, vec![EMPTY_DOCUMENT_MESSAGE.to_string()]);
    }

    #[test]
    fn test_fallback_text_feeds_field_extraction() {
        let outcome = parser(
            Primary::Text(""),
            Pages::Of(vec!["Reach me at jane@example.com ", "or 5551234567"]),
        )
        .parse(b"%PDF");
        let fields = outcome.fields.unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(fields.get(FieldName::Email), "jane@example.com");
        assert_eq!(fields.get(FieldName::Phone), "5551234567");
        assert_eq!(fields.get(FieldName::Name), SENTINEL);
    }

    #[test]
    fn test_primary_text_with_rule_tagger() {
        let parser = ResumeParser::new(
            extractor(
                Primary::Text("Ada Lovelace\nAnalyst, 10 years of experience"),
                Pages::Fails,
            ),
            FieldExtractor::new(Arc::new(RuleTagger)),
        );
        let outcome = parser.parse(b"%PDF");
        let fields = outcome.fields.unwrap();
        assert_eq!(fields.get(FieldName::Name), "Ada Lovelace");
        assert_eq!(fields.get(FieldName::Experience), "10 years of experience");
        assert_eq!(
            fields.get(FieldName::Designation),
            "Analyst, 10 years of experience"
        );
    }

    #[test]
    fn test_outcome_serializes_null_fields() {
        let outcome = parser(Primary::Text(""), Pages::Of(vec![])).parse(b"");
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json["fields"].is_null());
        assert_eq!(json["errors"][0], EMPTY_DOCUMENT_MESSAGE);
    }
}
