//! Field heuristics. Each rule is an independent pure function over the
//! extraction context; `None` means the field was not found.

use once_cell::sync::Lazy;
use regex::Regex;

use super::FieldName;
use crate::nlp::{AnnotatedToken, PosTag};

/// Input shared by every rule: the raw text and its token annotations.
pub struct FieldContext<'a> {
    pub text: &'a str,
    pub tokens: &'a [AnnotatedToken],
}

pub type RuleFn = fn(&FieldContext<'_>) -> Option<String>;

pub struct FieldRule {
    pub field: FieldName,
    pub extract: RuleFn,
}

/// Registry in display order. One entry per `FieldName`.
pub const RULES: [FieldRule; 9] = [
    FieldRule { field: FieldName::Name, extract: name },
    FieldRule { field: FieldName::Email, extract: email },
    FieldRule { field: FieldName::Phone, extract: phone },
    FieldRule { field: FieldName::Skills, extract: skills },
    FieldRule { field: FieldName::Experience, extract: experience },
    FieldRule { field: FieldName::College, extract: college },
    FieldRule { field: FieldName::Degree, extract: degree },
    FieldRule { field: FieldName::Designation, extract: designation },
    FieldRule { field: FieldName::Company, extract: company },
];

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{10}\b|\b\d{3}[-.\s]\d{3}[-.\s]\d{4}\b").unwrap());

// Applied to a lowercased copy of the text.
static EXPERIENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\s+years?\s+of\s+experience\b").unwrap());

static COLLEGE: Lazy<Regex> = Lazy::new(|| anchored("University|College|Institute|School"));

static DEGREE: Lazy<Regex> = Lazy::new(|| {
    anchored(r"B\.?Sc|M\.?Sc|B\.?Tech|M\.?Tech|Ph\.?D|Bachelor|Master|Doctor")
});

static DESIGNATION: Lazy<Regex> =
    Lazy::new(|| anchored("Manager|Engineer|Developer|Consultant|Analyst|Intern"));

static COMPANY: Lazy<Regex> = Lazy::new(|| {
    anchored("Inc|Corp|LLC|Ltd|Technologies|Systems|Enterprises|Group|Solutions|Services")
});

/// Case-insensitive whole-word anchor followed by everything up to the end
/// of the document, newlines included.
fn anchored(alternatives: &str) -> Regex {
    Regex::new(&format!(r"(?is)\b(?:{alternatives})\b.*")).unwrap()
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

/// First two adjacent PROPN tokens. A SPACE token between them breaks the pair,
/// so the value never spans a line break.
pub fn name(ctx: &FieldContext<'_>) -> Option<String> {
    ctx.tokens
        .windows(2)
        .find(|pair| pair[0].pos == PosTag::Propn && pair[1].pos == PosTag::Propn)
        .map(|pair| {
            ctx.text
                .get(pair[0].start..pair[1].end)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} {}", pair[0].text, pair[1].text))
        })
}

pub fn email(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&EMAIL, ctx.text)
}

pub fn phone(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&PHONE, ctx.text)
}

/// Every non-entity NOUN token, in document order, duplicates kept.
pub fn skills(ctx: &FieldContext<'_>) -> Option<String> {
    let nouns: Vec<&str> = ctx
        .tokens
        .iter()
        .filter(|t| t.pos == PosTag::Noun && !t.is_entity())
        .map(|t| t.text.as_str())
        .collect();
    (!nouns.is_empty()).then(|| nouns.join(", "))
}

pub fn experience(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&EXPERIENCE, &ctx.text.to_lowercase())
}

pub fn college(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&COLLEGE, ctx.text)
}

pub fn degree(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&DEGREE, ctx.text)
}

pub fn designation(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&DESIGNATION, ctx.text)
}

pub fn company(ctx: &FieldContext<'_>) -> Option<String> {
    first_match(&COMPANY, ctx.text)
}
