//! Pluggable person-name recognition.
//!
//! Default: `CapitalizedSpanRecognizer` (pure Rust, deterministic, no network).
//! Optional: `LlmPersonRecognizer`, enabled via ENABLE_LLM_NAME_RECOGNITION.
//!
//! `EntityExtractor` holds an `Arc<dyn PersonRecognizer>`, chosen at startup.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::entities::prompts::{person_recognition_prompt, person_recognition_system};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Finds the first person name in a block of text.
#[async_trait]
pub trait PersonRecognizer: Send + Sync {
    async fn first_person(&self, text: &str) -> Result<Option<String>, AppError>;

    /// Short identifier surfaced in logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// CapitalizedSpanRecognizer
// ────────────────────────────────────────────────────────────────────────────

const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 4;

/// Capitalised words that head resume sections rather than name anyone.
const HEADING_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "cv",
    "profile",
    "summary",
    "objective",
    "career",
    "contact",
    "email",
    "phone",
    "mobile",
    "address",
    "skills",
    "education",
    "experience",
    "linkedin",
    "github",
    "of",
];

/// Treats the first run of 2–4 consecutive capitalised words on a line as a
/// person name. Runs longer than four words are read as titles or headlines
/// and skipped.
pub struct CapitalizedSpanRecognizer;

#[async_trait]
impl PersonRecognizer for CapitalizedSpanRecognizer {
    async fn first_person(&self, text: &str) -> Result<Option<String>, AppError> {
        Ok(capitalized_span(text))
    }

    fn backend(&self) -> &'static str {
        "capitalized_span"
    }
}

pub fn capitalized_span(text: &str) -> Option<String> {
    text.lines().find_map(capitalized_span_in_line)
}

fn capitalized_span_in_line(line: &str) -> Option<String> {
    let mut run: Vec<&str> = Vec::new();

    for raw in line.split_whitespace() {
        let word = raw.trim_end_matches([',', ';', ':', '|']);
        let ends_run = word.len() != raw.len();

        if is_name_word(word) {
            run.push(word);
        } else if let Some(name) = accept_run(&run) {
            return Some(name);
        } else {
            run.clear();
            continue;
        }

        if ends_run {
            if let Some(name) = accept_run(&run) {
                return Some(name);
            }
            run.clear();
        }
    }

    accept_run(&run)
}

fn accept_run(run: &[&str]) -> Option<String> {
    if (MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&run.len()) {
        Some(run.join(" "))
    } else {
        None
    }
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if HEADING_WORDS.contains(&word.to_lowercase().as_str()) {
        return false;
    }
    let rest = chars.as_str();
    // "J." style initial
    if rest == "." {
        return true;
    }
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_alphabetic() || c == '-' || c == '\'' || c == '\u{2019}')
}

// ────────────────────────────────────────────────────────────────────────────
// LlmPersonRecognizer
// ────────────────────────────────────────────────────────────────────────────

const PERSON_MAX_TOKENS: u32 = 256;

#[derive(Debug, Deserialize)]
struct PersonsReply {
    #[serde(default)]
    persons: Vec<String>,
}

/// Asks the LLM for person names. When the call fails the request degrades to
/// the capitalised-span heuristic instead of failing.
pub struct LlmPersonRecognizer {
    llm: LlmClient,
}

impl LlmPersonRecognizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PersonRecognizer for LlmPersonRecognizer {
    async fn first_person(&self, text: &str) -> Result<Option<String>, AppError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let reply: Result<PersonsReply, _> = self
            .llm
            .call_json(
                &person_recognition_prompt(text),
                &person_recognition_system(),
                PERSON_MAX_TOKENS,
            )
            .await;

        match reply {
            Ok(reply) => Ok(first_non_empty(reply.persons)),
            Err(e) => {
                warn!("LLM person recognition failed, using capitalized spans: {e}");
                Ok(capitalized_span(text))
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn first_non_empty(persons: Vec<String>) -> Option<String> {
    persons
        .into_iter()
        .map(|p| p.trim().to_string())
        .find(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_before_title_separator() {
        assert_eq!(
            capitalized_span("Jane Doe | Data Scientist | 555-123-4567").as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_name_after_heading_words() {
        assert_eq!(
            capitalized_span("RESUME OF JOHN SMITH").as_deref(),
            Some("JOHN SMITH")
        );
    }

    #[test]
    fn test_initials_are_part_of_the_name() {
        assert_eq!(
            capitalized_span("Contact: Mary J. Watson, 42 Elm St").as_deref(),
            Some("Mary J. Watson")
        );
    }

    #[test]
    fn test_long_title_runs_are_skipped() {
        assert_eq!(
            capitalized_span("Senior Staff Software Engineer Platform Team").as_deref(),
            None
        );
    }

    #[test]
    fn test_single_capitalised_word_is_not_a_name() {
        assert_eq!(capitalized_span("Python developer since 2019"), None);
    }

    #[test]
    fn test_later_line_is_scanned() {
        let text = "curriculum vitae 2024\nprepared for: Acme\nwith love, Ravi Kumar";
        assert_eq!(capitalized_span(text).as_deref(), Some("Ravi Kumar"));
    }

    #[test]
    fn test_hyphenated_and_apostrophe_names() {
        assert_eq!(
            capitalized_span("Jean-Luc O'Neil - 2020").as_deref(),
            Some("Jean-Luc O'Neil")
        );
    }

    #[test]
    fn test_first_non_empty_person() {
        let persons = vec!["  ".to_string(), " Jane Doe ".to_string()];
        assert_eq!(first_non_empty(persons).as_deref(), Some("Jane Doe"));
        assert_eq!(first_non_empty(vec![]), None);
    }

    #[tokio::test]
    async fn test_default_recognizer_via_trait() {
        let recognizer: Box<dyn PersonRecognizer> = Box::new(CapitalizedSpanRecognizer);
        assert_eq!(recognizer.backend(), "capitalized_span");
        let name = recognizer.first_person("Alan Turing\n").await.unwrap();
        assert_eq!(name.as_deref(), Some("Alan Turing"));
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_to_capitalized_spans() {
        // Bind then drop a listener so the port refuses connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let llm = LlmClient::new("test-key".to_string())
            .unwrap()
            .with_base_url(format!("http://{addr}/v1/messages"));
        let recognizer = LlmPersonRecognizer::new(llm);
        assert_eq!(recognizer.backend(), "llm");

        let name = recognizer
            .first_person("Curriculum Vitae\nGrace Hopper\nNew York")
            .await
            .unwrap();
        assert_eq!(name.as_deref(), Some("Grace Hopper"));
    }

    #[tokio::test]
    async fn test_llm_recognizer_skips_blank_text() {
        let llm = LlmClient::new("test-key".to_string()).unwrap();
        let recognizer = LlmPersonRecognizer::new(llm);
        assert_eq!(recognizer.first_person("  \n ").await.unwrap(), None);
    }
}
