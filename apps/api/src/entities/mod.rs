// Resume field extraction.
// Implements: contact patterns, keyword phrase matching, name detection, HTTP handlers.
// Only `recognizer::LlmPersonRecognizer` reaches the network, through llm_client.

pub mod extractor;
pub mod handlers;
pub mod keywords;
pub mod name;
pub mod patterns;
pub mod phrase_matcher;
pub mod prompts;
pub mod recognizer;
pub mod tokenizer;

pub use extractor::EntityExtractor;
pub use keywords::KeywordCatalog;
pub use recognizer::{CapitalizedSpanRecognizer, LlmPersonRecognizer, PersonRecognizer};
