use std::collections::HashMap;

use serde::Serialize;

use crate::entities::keywords::KeywordCatalog;
use crate::entities::tokenizer::{tokenize, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseLabel {
    Skill,
    Education,
    Certification,
}

/// One occurrence of a catalog phrase, with the text as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub label: PhraseLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
struct Pattern {
    label: PhraseLabel,
    tokens: Vec<String>,
}

/// Case-insensitive, token-level phrase matcher over the keyword catalog.
///
/// Patterns are tokenized once at construction and bucketed by their first
/// token, so a document is scanned in a single pass.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    patterns: Vec<Pattern>,
    by_first_token: HashMap<String, Vec<usize>>,
}

impl PhraseMatcher {
    pub fn new(catalog: &KeywordCatalog) -> Self {
        let labelled = catalog
            .skills
            .iter()
            .map(|k| (PhraseLabel::Skill, k))
            .chain(catalog.education.iter().map(|k| (PhraseLabel::Education, k)))
            .chain(
                catalog
                    .certifications
                    .iter()
                    .map(|k| (PhraseLabel::Certification, k)),
            );

        let mut patterns = Vec::new();
        let mut by_first_token: HashMap<String, Vec<usize>> = HashMap::new();

        for (label, keyword) in labelled {
            let tokens: Vec<String> = tokenize(keyword.trim())
                .into_iter()
                .filter(|t| !t.is_space)
                .map(|t| t.lower)
                .collect();
            let Some(first) = tokens.first() else {
                continue;
            };
            by_first_token
                .entry(first.clone())
                .or_default()
                .push(patterns.len());
            patterns.push(Pattern { label, tokens });
        }

        Self {
            patterns,
            by_first_token,
        }
    }

    /// Returns every occurrence of every pattern, overlapping matches included,
    /// ordered by position in the text.
    pub fn find(&self, text: &str) -> Vec<PhraseMatch> {
        let doc = tokenize(text);
        let mut matches = Vec::new();

        for (i, token) in doc.iter().enumerate() {
            let Some(candidates) = self.by_first_token.get(&token.lower) else {
                continue;
            };
            for &idx in candidates {
                let pattern = &self.patterns[idx];
                if let Some(span) = span_if_matches(&doc[i..], &pattern.tokens) {
                    let (start, end) = span;
                    matches.push(PhraseMatch {
                        label: pattern.label,
                        text: text[start..end].to_string(),
                        start,
                        end,
                    });
                }
            }
        }

        matches.sort_by_key(|m| (m.start, m.end));
        matches
    }
}

fn span_if_matches(doc: &[Token], pattern: &[String]) -> Option<(usize, usize)> {
    if doc.len() < pattern.len() {
        return None;
    }
    let window = &doc[..pattern.len()];
    if window.iter().zip(pattern).all(|(t, p)| t.lower == *p) {
        Some((window[0].start, window[window.len() - 1].end))
    } else {
        None
    }
}
