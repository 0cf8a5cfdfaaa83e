//! Token annotation: the part-of-speech / entity capability the field
//! heuristics consume.
//!
//! `Tokenizer` is injected into `FieldExtractor` as `Arc<dyn Tokenizer>`;
//! `RuleTagger` is the default backend, tests use fixed annotations.

use serde::Serialize;

mod lexicon;
pub mod tagger;

pub use tagger::RuleTagger;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

/// One token of the source text with its annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedToken {
    pub text: String,
    /// Byte offset of the token in the annotated text.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
    pub pos: PosTag,
    /// Named-entity label; empty when the token is not part of an entity.
    pub ent_type: String,
}

impl AnnotatedToken {
    pub fn new(text: &str, start: usize, pos: PosTag, ent_type: &str) -> Self {
        Self {
            text: text.to_string(),
            start,
            end: start + text.len(),
            pos,
            ent_type: ent_type.to_string(),
        }
    }

    pub fn is_entity(&self) -> bool {
        !self.ent_type.is_empty()
    }
}

/// Splits text into annotated tokens, in document order.
pub trait Tokenizer: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}
