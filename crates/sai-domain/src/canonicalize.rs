//! Item name canonicalization
//!
//! Every function here is pure and total: no I/O, no randomness, and no
//! input can make them fail. The canonical singular form produced by
//! [`normalize_to_singular`] is the only text ever sent to the embedding
//! provider, so "AA Batteries", "aa battery" and "the AA batteries" all land
//! on the same point of the vector space.

use regex::Regex;
use std::sync::LazyLock;

/// Leading quantifiers/articles dropped before singularization
const LEADING_ARTICLES: &[&str] = &[
    "a",
    "an",
    "the",
    "some",
    "any",
    "another",
    "additional",
    "extra",
];

/// Plural suffixes that take an extra `es`
const SIBILANT_PLURALS: &[&str] = &["ses", "xes", "zes", "ches", "shes"];

/// `[word] piece(s)|bunch|pack|set of X` → `X`
static OF_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\w+\s+)?(?:piece|pieces|bunch|pack|set)\s+of\s+(.+)$")
        .expect("of-phrase pattern is a valid regex")
});

/// Trim, lowercase and collapse internal whitespace runs to one space
pub fn canonicalize(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Loose per-token stemming used for fuzzy name comparison
///
/// Unlike [`normalize_to_singular`] this touches every token.
pub fn normalize_for_match(text: &str) -> String {
    canonicalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let len = token.chars().count();
            if len > 4 && token.ends_with("ies") {
                format!("{}y", &token[..token.len() - 3])
            } else if len > 3 && token.ends_with("es") {
                token[..token.len() - 2].to_string()
            } else if len > 3 && token.ends_with('s') {
                token[..token.len() - 1].to_string()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical singular form of an item name or query fragment
///
/// Drops one leading article, collapses "pack of X"-style phrases,
/// canonicalizes, and singularizes the last token only ("aa batteries" →
/// "aa battery", "pairs of scissors" stays multi-word). The pipeline is
/// re-applied until it stops changing so that
/// `normalize_to_singular(normalize_to_singular(x)) == normalize_to_singular(x)`
/// holds for every input.
pub fn normalize_to_singular(name: &str) -> String {
    let mut current = singular_pass(name);
    loop {
        let next = singular_pass(&current);
        if next == current || next.len() >= current.len() {
            return next;
        }
        current = next;
    }
}

/// Display-friendly singular form that keeps acronym casing
///
/// `"AA Batteries"` → `"AA battery"`, `"TVs"` → `"TV"`.
pub fn normalize_to_singular_display(name: &str) -> String {
    let working = collapse_of_phrase(strip_leading_article(name));
    let original_tokens: Vec<&str> = working.split_whitespace().collect();
    let mut tokens: Vec<String> = canonicalize(&working)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    let Some(last) = tokens.len().checked_sub(1) else {
        return working.trim().to_string();
    };
    tokens[last] = singularize_token(&tokens[last], original_tokens.get(last).copied());

    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| match original_tokens.get(i) {
            Some(original) if is_upper(original) => token.to_uppercase(),
            _ => token,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn singular_pass(name: &str) -> String {
    let base = canonicalize(&collapse_of_phrase(strip_leading_article(name)));
    match base.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", singularize_token(last, None)),
        None => singularize_token(&base, None),
    }
}

fn strip_leading_article(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest))
            if LEADING_ARTICLES
                .iter()
                .any(|article| first.eq_ignore_ascii_case(article)) =>
        {
            rest.trim()
        }
        _ => trimmed,
    }
}

fn collapse_of_phrase(text: &str) -> String {
    let trimmed = text.trim();
    OF_PHRASE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| trimmed.to_string(), |m| m.as_str().trim().to_string())
}

/// Singularize one lowercase token; `original` enables acronym handling
fn singularize_token(token: &str, original: Option<&str>) -> String {
    if let Some(original) = original {
        if let Some(stem) = original.strip_suffix(['s', 'S']) {
            if stem.chars().count() >= 1 && is_upper(stem) {
                return stem.to_string();
            }
        }
    }

    let len = token.chars().count();
    if len > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..token.len() - 3]);
    }
    if SIBILANT_PLURALS.iter().any(|suffix| token.ends_with(suffix)) {
        return token[..token.len() - 2].to_string();
    }
    if len > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

/// At least one cased character, and every cased character uppercase
fn is_upper(text: &str) -> bool {
    let mut saw_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            saw_cased = true;
        }
    }
    saw_cased
}
