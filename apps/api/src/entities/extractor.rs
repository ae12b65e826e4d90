use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::entities::keywords::KeywordCatalog;
use crate::entities::name::detect_name;
use crate::entities::patterns::{find_email, find_mobile_number};
use crate::entities::phrase_matcher::{PhraseLabel, PhraseMatcher};
use crate::entities::recognizer::PersonRecognizer;
use crate::errors::AppError;
use crate::models::resume::ExtractedEntities;

/// Turns resume plain text into an `ExtractedEntities` record.
///
/// Built once at startup and shared across requests; holds no per-request state.
pub struct EntityExtractor {
    matcher: PhraseMatcher,
    recognizer: Arc<dyn PersonRecognizer>,
}

impl EntityExtractor {
    pub fn new(catalog: &KeywordCatalog, recognizer: Arc<dyn PersonRecognizer>) -> Self {
        Self {
            matcher: PhraseMatcher::new(catalog),
            recognizer,
        }
    }

    pub fn recognizer_backend(&self) -> &'static str {
        self.recognizer.backend()
    }

    pub async fn extract(&self, text: &str) -> Result<ExtractedEntities, AppError> {
        let name = detect_name(text, self.recognizer.as_ref()).await?;

        let mut skills = BTreeSet::new();
        let mut education = BTreeSet::new();
        let mut certifications = BTreeSet::new();

        for m in self.matcher.find(text) {
            let bucket = match m.label {
                PhraseLabel::Skill => &mut skills,
                PhraseLabel::Education => &mut education,
                PhraseLabel::Certification => &mut certifications,
            };
            bucket.insert(m.text);
        }

        let entities = ExtractedEntities {
            name,
            email: find_email(text),
            mobile_number: find_mobile_number(text),
            skills: skills.into_iter().collect(),
            education: education.into_iter().collect(),
            certifications: certifications.into_iter().collect(),
        };

        debug!(
            skills = entities.skills.len(),
            education = entities.education.len(),
            certifications = entities.certifications.len(),
            has_email = entities.email.is_some(),
            has_mobile = entities.mobile_number.is_some(),
            "Entities extracted"
        );

        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::recognizer::CapitalizedSpanRecognizer;
    use crate::models::resume::NOT_FOUND;

    const RESUME: &str = "\
Ananya Rao
Email: ananya.rao@example.com | Mobile: +91 98450 12345
Career Objective
Data analyst moving into DL/ML.

Skills
Python, SQL, Power BI, python, Machine Learning
Deep learning (coursework)

Education
Master of Science in Data Science, Pune University
12TH - Kendriya Vidyalaya

Certifications
MS Copilot For Productivity
Data Analytics (Google)";

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(&KeywordCatalog::default(), Arc::new(CapitalizedSpanRecognizer))
    }

    #[tokio::test]
    async fn test_full_resume() {
        let entities = extractor().extract(RESUME).await.unwrap();

        assert_eq!(entities.name, "Ananya Rao");
        assert_eq!(entities.email.as_deref(), Some("ananya.rao@example.com"));
        assert_eq!(entities.mobile_number.as_deref(), Some("+91 98450 12345"));
        assert_eq!(
            entities.skills,
            vec![
                "DL",
                "DL/ML",
                "Data Science",
                "Deep learning",
                "ML",
                "Machine Learning",
                "Power BI",
                "Python",
                "SQL",
                "python",
            ]
        );
        assert_eq!(entities.education, vec!["12TH", "Master", "University"]);
        assert_eq!(
            entities.certifications,
            vec!["Data Analytics", "MS Copilot For Productivity"]
        );
    }

    #[tokio::test]
    async fn test_empty_text() {
        let entities = extractor().extract("").await.unwrap();
        assert_eq!(entities.name, NOT_FOUND);
        assert_eq!(entities.email, None);
        assert_eq!(entities.mobile_number, None);
        assert!(entities.skills.is_empty());
        assert!(entities.education.is_empty());
        assert!(entities.certifications.is_empty());
    }

    #[tokio::test]
    async fn test_custom_catalog() {
        let catalog = KeywordCatalog {
            skills: vec!["Rust".to_string(), "Tokio".to_string()],
            education: vec![],
            certifications: vec![],
        };
        let extractor = EntityExtractor::new(&catalog, Arc::new(CapitalizedSpanRecognizer));
        let entities = extractor
            .extract("Rust and tokio services, Python scripts")
            .await
            .unwrap();
        assert_eq!(entities.skills, vec!["Rust", "tokio"]);
        assert_eq!(extractor.recognizer_backend(), "capitalized_span");
    }
}
