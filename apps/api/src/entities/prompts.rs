// Person-name recognition prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub fn person_recognition_system() -> String {
    format!(
        "{JSON_ONLY_SYSTEM} You are a named-entity recognizer for resume headers. \
         Report only the names of people that literally appear in the input."
    )
}

pub const PERSON_RECOGNITION_PROMPT: &str = r#"List every person name that appears in the following resume header, in order of appearance.

INPUT TEXT:
{text}

OUTPUT SCHEMA (return exactly this structure):
{"persons": ["string"]}

RULES:
1. Copy names exactly as written; do not fix casing or spelling
2. Do not include job titles, company names, schools, or places
3. Return {"persons": []} if no person is named"#;

pub fn person_recognition_prompt(text: &str) -> String {
    PERSON_RECOGNITION_PROMPT.replace("{text}", text)
}
