//! Word tokenizer used by the phrase matcher.
//!
//! Tokens follow Unicode word boundaries (UAX #29), so punctuation such as `/`
//! or `+` stands alone and `Java` never matches inside `JavaScript`. A single
//! ASCII space between two tokens is swallowed; every other whitespace run is
//! kept as its own token so that a phrase cannot span a line break.
//!
//! UAX #29 keeps `Skills:Python` and `Python.Java` whole. Those segments are
//! split again at a colon between letters and at a period between a lowercase
//! and an uppercase letter, so compact PDF text still yields separate words.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the first character in the source text.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub lower: String,
    pub is_space: bool,
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (start, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            if segment != " " {
                tokens.push(Token {
                    start,
                    end: start + segment.len(),
                    lower: segment.to_string(),
                    is_space: true,
                });
            }
            continue;
        }

        let mut piece_start = 0;
        for infix in infix_positions(segment) {
            push_piece(&mut tokens, start + piece_start, &segment[piece_start..infix]);
            push_word(&mut tokens, start + infix, &segment[infix..infix + 1]);
            piece_start = infix + 1;
        }
        push_piece(&mut tokens, start + piece_start, &segment[piece_start..]);
    }

    tokens
}

fn push_piece(tokens: &mut Vec<Token>, start: usize, piece: &str) {
    // "Master's" -> "Master" + "'s"
    match possessive_split(piece) {
        Some(split) => {
            push_word(tokens, start, &piece[..split]);
            push_word(tokens, start + split, &piece[split..]);
        }
        None => push_word(tokens, start, piece),
    }
}

/// Byte offsets of `:` between two letters and of `.` between a lowercase
/// and an uppercase letter.
fn infix_positions(segment: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    chars
        .windows(3)
        .filter_map(|w| {
            let (prev, (at, c), next) = (w[0].1, w[1], w[2].1);
            let splits = match c {
                ':' => prev.is_alphabetic() && next.is_alphabetic(),
                '.' => prev.is_lowercase() && next.is_uppercase(),
                _ => false,
            };
            splits.then_some(at)
        })
        .collect()
}

fn push_word(tokens: &mut Vec<Token>, start: usize, word: &str) {
    tokens.push(Token {
        start,
        end: start + word.len(),
        lower: word.to_lowercase(),
        is_space: false,
    });
}

/// Byte index where a trailing possessive suffix begins, if the word has one.
fn possessive_split(word: &str) -> Option<usize> {
    for suffix in ["'s", "'S", "\u{2019}s", "\u{2019}S"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() {
                return Some(stem.len());
            }
        }
    }
    None
}
