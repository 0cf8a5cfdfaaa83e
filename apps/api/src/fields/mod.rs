//! Field Extractor: turns extracted resume text into the fixed set of
//! display fields.
//!
//! Every field is computed by its own rule in `rules::RULES`; a rule that finds
//! nothing yields the `"N/A"` sentinel, so the result always carries all nine keys.

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::nlp::Tokenizer;

pub mod rules;

use rules::{FieldContext, RULES};

/// Value of a field the heuristics could not find.
pub const SENTINEL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Skills,
    Experience,
    College,
    Degree,
    Designation,
    Company,
}

impl FieldName {
    /// Display order.
    #[cfg(test)]
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Skills,
        FieldName::Experience,
        FieldName::College,
        FieldName::Degree,
        FieldName::Designation,
        FieldName::Company,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::Skills => "Skills",
            FieldName::Experience => "Experience",
            FieldName::College => "College",
            FieldName::Degree => "Degree",
            FieldName::Designation => "Designation",
            FieldName::Company => "Company",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name → value, in display order. Serializes as an ordered JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    entries: Vec<(FieldName, String)>,
}

impl FieldResult {
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of fields holding something other than the sentinel.
    pub fn found(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v != SENTINEL).count()
    }
}

#[cfg(test)]
impl FieldResult {
    pub fn get(&self, field: FieldName) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or(SENTINEL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for FieldResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

pub struct FieldExtractor {
    tokenizer: Arc<dyn Tokenizer>,
}

impl FieldExtractor {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Runs every registered rule over `text`. Never fails; missing fields
    /// hold `SENTINEL`.
    pub fn extract_info(&self, text: &str) -> FieldResult {
        let tokens = self.tokenizer.annotate(text);
        let ctx = FieldContext {
            text,
            tokens: &tokens,
        };

        let entries = RULES
            .iter()
            .map(|rule| {
                let value = (rule.extract)(&ctx)
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| SENTINEL.to_string());
                (rule.field, value)
            })
            .collect();

        let result = FieldResult { entries };
        debug!(
            tokens = tokens.len(),
            found = result.found(),
            "fields extracted"
        );
        result
    }
}
