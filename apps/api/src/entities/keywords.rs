use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "SQL",
    "Power BI",
    "Data Science",
    "DL",
    "ML",
    "DL/ML",
];

const DEFAULT_EDUCATION: &[&str] = &[
    "Bachelor",
    "Master",
    "PhD",
    "Diploma",
    "University",
    "12TH",
    "10TH",
];

const DEFAULT_CERTIFICATIONS: &[&str] = &[
    "Software Development",
    "MS Copilot For Productivity",
    "Data Analytics",
];

/// Phrase lists the matcher looks for, one list per output field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeywordCatalog {
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    #[serde(default = "default_education")]
    pub education: Vec<String>,
    #[serde(default = "default_certifications")]
    pub certifications: Vec<String>,
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            education: default_education(),
            certifications: default_certifications(),
        }
    }
}

impl KeywordCatalog {
    /// Loads a catalog from a JSON file. Lists missing from the file keep
    /// their built-in defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Keyword file '{}' is not a valid catalog", path.display()))
    }

    pub fn keyword_count(&self) -> usize {
        self.skills.len() + self.education.len() + self.certifications.len()
    }
}

fn owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_skills() -> Vec<String> {
    owned_list(DEFAULT_SKILLS)
}

fn default_education() -> Vec<String> {
    owned_list(DEFAULT_EDUCATION)
}

fn default_certifications() -> Vec<String> {
    owned_list(DEFAULT_CERTIFICATIONS)
}
