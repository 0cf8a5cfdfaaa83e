use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{closed_class, is_month, is_org_marker};
use super::{AnnotatedToken, PosTag, Tokenizer};

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?P<email>[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})
        | (?P<num>\d+(?:[.,]\d+)*)
        | (?P<word>\p{L}[\p{L}\p{M}\p{N}]*(?:['’.\-][\p{L}\p{M}\p{N}]+)*)
        | (?P<other>\S)
        ",
    )
    .unwrap()
});

const SYMBOLS: &[char] = &[
    '$', '%', '+', '@', '#', '*', '=', '<', '>', '|', '~', '^', '©', '®', '™', '€', '£',
];
const SENTENCE_END: &[&str] = &[".", "!", "?", ":", "•"];

/// Dictionary-and-shape tagger. Deterministic, no model to load.
///
/// Rules, in order:
/// - emails → X; numbers → NUM (DATE for 1900–2099, else CARDINAL)
/// - capitalized month names → PROPN / DATE
/// - closed-class words → their class (acronyms excepted)
/// - capitalized words → PROPN, except sentence-initial `-ed`/`-ing` words → VERB
/// - lowercase words by suffix: `-ly` ADV, `-ing`/`-ed` VERB, adjectival suffixes ADJ, else NOUN
///
/// Whitespace other than a single space after a token (newlines, tabs, runs
/// of spaces) becomes its own SPACE token, so adjacency between words never
/// bridges a line break.
///
/// Runs of adjacent PROPN tokens that contain an organisation marker are
/// labelled ORG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for RuleTagger {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        let mut tokens: Vec<AnnotatedToken> = Vec::new();

        let mut cursor = 0;

        for caps in TOKEN.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            push_space(text, cursor, m.start(), &mut tokens);
            cursor = m.end();

            let surface = m.as_str();
            let sentence_start = match tokens.iter().rev().find(|t| t.pos != PosTag::Space) {
                None => true,
                Some(prev) => {
                    SENTENCE_END.contains(&prev.text.as_str())
                        || text[prev.end..m.start()].contains('\n')
                }
            };

            let (pos, ent) = if caps.name("email").is_some() {
                (PosTag::X, "")
            } else if caps.name("num").is_some() {
                (PosTag::Num, number_entity(surface))
            } else if caps.name("word").is_some() {
                tag_word(surface, sentence_start)
            } else {
                (tag_symbol(surface), "")
            };

            tokens.push(AnnotatedToken::new(surface, m.start(), pos, ent));
        }

        push_space(text, cursor, text.len(), &mut tokens);
        label_organisations(&mut tokens);
        tokens
    }
}

/// Emits the gap `text[from..to]` as a SPACE token unless it is empty or the
/// single space that trails the previous token.
fn push_space(text: &str, from: usize, to: usize, tokens: &mut Vec<AnnotatedToken>) {
    let mut start = from;
    if !tokens.is_empty() && text[start..to].starts_with(' ') {
        start += 1;
    }
    if start < to {
        tokens.push(AnnotatedToken::new(&text[start..to], start, PosTag::Space, ""));
    }
}

fn number_entity(surface: &str) -> &'static str {
    match surface.parse::<u32>() {
        Ok(year) if surface.len() == 4 && (1900..=2099).contains(&year) => "DATE",
        _ => "CARDINAL",
    }
}

fn tag_word(word: &str, sentence_start: bool) -> (PosTag, &'static str) {
    let lower = word.to_lowercase();
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    let acronym = letters >= 2
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase);

    if capitalized && is_month(&lower) {
        return (PosTag::Propn, "DATE");
    }
    if acronym {
        return (PosTag::Propn, "");
    }
    if let Some(tag) = closed_class(&lower) {
        return (tag, "");
    }
    if capitalized {
        if sentence_start && (lower.ends_with("ed") || lower.ends_with("ing")) {
            return (PosTag::Verb, "");
        }
        return (PosTag::Propn, "");
    }

    let pos = if lower.ends_with("ly") {
        PosTag::Adv
    } else if lower.ends_with("ing") || lower.ends_with("ed") {
        PosTag::Verb
    } else if ["ous", "ful", "ive", "able", "ible"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        PosTag::Adj
    } else {
        PosTag::Noun
    };
    (pos, "")
}

fn tag_symbol(surface: &str) -> PosTag {
    if closed_class(surface) == Some(PosTag::Cconj) {
        return PosTag::Cconj;
    }
    match surface.chars().next() {
        Some(c) if SYMBOLS.contains(&c) => PosTag::Sym,
        _ => PosTag::Punct,
    }
}

fn label_organisations(tokens: &mut [AnnotatedToken]) {
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].pos != PosTag::Propn {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < tokens.len() && tokens[j].pos == PosTag::Propn {
            j += 1;
        }

        let run = &mut tokens[i..j];
        if run.iter().any(|t| is_org_marker(&t.text.to_lowercase())) {
            for t in run.iter_mut().filter(|t| !t.is_entity()) {
                t.ent_type = "ORG".to_string();
            }
        }
        i = j;
    }
}
