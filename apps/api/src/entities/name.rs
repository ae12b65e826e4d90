//! Candidate name detection.
//!
//! Three tiers, first hit wins:
//! 1. a plausible name line among the first five lines,
//! 2. the person recognizer over those same lines,
//! 3. a name rebuilt from the email's local part (`jane.doe@...` -> "Jane Doe").

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::entities::patterns::find_email;
use crate::entities::recognizer::PersonRecognizer;
use crate::errors::AppError;
use crate::models::resume::NOT_FOUND;

const HEADER_LINES: usize = 5;
const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 5;

/// Substrings that mark a line as a label or heading, never a name.
const NON_NAME_MARKERS: &[&str] = &[
    "email",
    "mobile",
    "phone",
    "contact",
    "address",
    "skills",
    "curriculum vitae",
    "resume",
    "cv",
    "profile",
    "career objective",
];

fn header_lines(text: &str) -> Vec<&str> {
    text.trim().split('\n').take(HEADER_LINES).collect()
}

/// First header line that reads like a name: no digits, no heading markers,
/// and two to five words.
pub fn name_from_line_heuristics(text: &str) -> Option<String> {
    header_lines(text).into_iter().find_map(|line| {
        let clean = line.trim();
        if clean.is_empty() || clean.chars().any(is_digit) {
            return None;
        }
        let lower = clean.to_lowercase();
        if NON_NAME_MARKERS.iter().any(|marker| lower.contains(marker)) {
            return None;
        }
        let words = clean.split_whitespace().count();
        (MIN_NAME_WORDS..=MAX_NAME_WORDS)
            .contains(&words)
            .then(|| clean.to_string())
    })
}

/// Decimal digits plus the superscript, subscript and enclosed forms that
/// carry a digit value. Fractions and roman numerals do not count.
fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
        || matches!(
            c,
            '\u{00B2}' | '\u{00B3}' | '\u{00B9}'
                | '\u{2070}'
                | '\u{2074}'..='\u{2079}'
                | '\u{2080}'..='\u{2089}'
                | '\u{2460}'..='\u{2468}'
                | '\u{2474}'..='\u{247C}'
                | '\u{2488}'..='\u{2490}'
                | '\u{24EA}'
                | '\u{24F5}'..='\u{24FD}'
                | '\u{24FF}'
                | '\u{2776}'..='\u{277E}'
                | '\u{2780}'..='\u{2788}'
                | '\u{278A}'..='\u{2792}'
        )
}

/// Rebuilds a name from an email local part split on `.` and `_`.
/// A single-part local part ("jdoe") carries no usable name.
pub fn name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or(email);
    let parts: Vec<&str> = local.split(['.', '_']).collect();
    if parts.len() < 2 {
        return None;
    }
    Some(
        parts
            .iter()
            .map(|part| capitalize(part))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Runs the three tiers in order and falls back to `NOT_FOUND`.
pub async fn detect_name(
    text: &str,
    recognizer: &dyn PersonRecognizer,
) -> Result<String, AppError> {
    if let Some(name) = name_from_line_heuristics(text) {
        return Ok(name);
    }

    let header = header_lines(text).join("\n");
    if let Some(name) = recognizer.first_person(&header).await? {
        return Ok(name);
    }

    if let Some(name) = find_email(text).as_deref().and_then(name_from_email) {
        return Ok(name);
    }

    Ok(NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::entities::recognizer::CapitalizedSpanRecognizer;

    struct NoPersons;

    #[async_trait]
    impl PersonRecognizer for NoPersons {
        async fn first_person(&self, _text: &str) -> Result<Option<String>, AppError> {
            Ok(None)
        }

        fn backend(&self) -> &'static str {
            "none"
        }
    }

    #[test]
    fn test_first_plain_line_is_the_name() {
        let text = "\n  Priya Sharma  \nData Scientist\npriya@example.com";
        assert_eq!(
            name_from_line_heuristics(text).as_deref(),
            Some("Priya Sharma")
        );
    }

    #[test]
    fn test_heading_lines_are_skipped() {
        let text = "Curriculum Vitae\nMy Resume Draft\nJohn Smith";
        assert_eq!(name_from_line_heuristics(text).as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_marker_is_a_substring_match() {
        // "cv" hides inside the surname
        assert_eq!(name_from_line_heuristics("Anna Mcvey"), None);
    }

    #[test]
    fn test_lines_with_digits_or_wrong_word_count() {
        let text = "JANE\nJane Doe 2nd\nA B C D E F\nReady";
        assert_eq!(name_from_line_heuristics(text), None);
    }

    #[test]
    fn test_only_first_five_lines_are_considered() {
        let text = "x\ny\nz\nw\nv\nJane Doe";
        assert_eq!(name_from_line_heuristics(text), None);
    }

    #[test]
    fn test_only_digit_characters_reject_a_line() {
        assert_eq!(
            name_from_line_heuristics("Louis XIV \u{216B}").as_deref(),
            Some("Louis XIV \u{216B}")
        );
        assert_eq!(
            name_from_line_heuristics("Anna \u{00BD} Smith").as_deref(),
            Some("Anna \u{00BD} Smith")
        );
        assert_eq!(name_from_line_heuristics("Anna Smith\u{00B2}"), None);
        assert_eq!(name_from_line_heuristics("Anna \u{0967} Smith"), None);
    }

    #[test]
    fn test_name_from_email_parts() {
        assert_eq!(
            name_from_email("jane.DOE@example.com").as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            name_from_email("mary_ann.lee@example.com").as_deref(),
            Some("Mary Ann Lee")
        );
        assert_eq!(name_from_email("jdoe@example.com"), None);
    }

    #[tokio::test]
    async fn test_recognizer_is_second_tier() {
        let text = "RESUME OF JOHN SMITH\n+1 555 123 4567";
        let name = detect_name(text, &CapitalizedSpanRecognizer).await.unwrap();
        assert_eq!(name, "JOHN SMITH");
    }

    #[tokio::test]
    async fn test_email_is_third_tier() {
        let text = "Resume\nEmail: ravi.kumar@example.com\nPhone: 9876543210";
        let name = detect_name(text, &NoPersons).await.unwrap();
        assert_eq!(name, "Ravi Kumar");
    }

    #[tokio::test]
    async fn test_not_found() {
        let name = detect_name("resume\n12345", &NoPersons).await.unwrap();
        assert_eq!(name, NOT_FOUND);

        let name = detect_name("", &CapitalizedSpanRecognizer).await.unwrap();
        assert_eq!(name, NOT_FOUND);
    }
}
