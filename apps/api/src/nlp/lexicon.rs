use super::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "my", "your", "his", "her", "its", "our",
    "their",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "of", "off", "over", "under",
    "since", "within", "without", "across", "along", "among", "around", "behind", "beyond",
    "near", "per", "via", "upon", "toward", "towards", "like",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "whose", "which", "what", "mine", "yours", "hers", "ours", "theirs",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so", "&"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "whereas", "if", "unless", "until", "whether",
    "as", "than",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const PARTICLES: &[&str] = &["not", "n't", "'s"];

const ADVERBS: &[&str] = &[
    "also", "very", "too", "just", "only", "then", "now", "here", "there", "well", "still",
    "even", "never", "always", "often", "however", "currently", "presently",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

/// Words that mark a capitalized run as an organisation.
const ORG_MARKERS: &[&str] = &[
    "inc", "corp", "corporation", "llc", "ltd", "technologies", "systems", "enterprises",
    "group", "solutions", "services", "labs", "university", "college", "institute", "school",
    "academy",
];

/// Closed-class lookup on a lowercased word.
pub(super) fn closed_class(lower: &str) -> Option<PosTag> {
    let tables: [(&[&str], PosTag); 8] = [
        (DETERMINERS, PosTag::Det),
        (ADPOSITIONS, PosTag::Adp),
        (PRONOUNS, PosTag::Pron),
        (COORDINATORS, PosTag::Cconj),
        (SUBORDINATORS, PosTag::Sconj),
        (AUXILIARIES, PosTag::Aux),
        (PARTICLES, PosTag::Part),
        (ADVERBS, PosTag::Adv),
    ];
    tables
        .iter()
        .find(|(words, _)| words.contains(&lower))
        .map(|(_, tag)| *tag)
}

pub(super) fn is_month(lower: &str) -> bool {
    MONTHS.contains(&lower)
}

pub(super) fn is_org_marker(lower: &str) -> bool {
    ORG_MARKERS.contains(&lower.trim_end_matches('.'))
}
