use serde::{Deserialize, Serialize};

/// Placeholder shown for any field the extractor could not fill.
pub const NOT_FOUND: &str = "Not found";

/// Fields extracted from one resume. Recomputed per request, never stored.
///
/// List fields hold each distinct matched text once, sorted by code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Mobile Number")]
    pub mobile_number: Option<String>,
    #[serde(rename = "Skills")]
    pub skills: Vec<String>,
    #[serde(rename = "Education")]
    pub education: Vec<String>,
    #[serde(rename = "Certifications")]
    pub certifications: Vec<String>,
}

/// A label/value pair ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

impl ExtractedEntities {
    /// Fields in display order. Missing values and empty lists read "Not found".
    pub fn display_fields(&self) -> Vec<DisplayField> {
        vec![
            field("Name", display_scalar(Some(&self.name))),
            field("Email", display_scalar(self.email.as_deref())),
            field("Mobile Number", display_scalar(self.mobile_number.as_deref())),
            field("Skills", display_list(&self.skills)),
            field("Education", display_list(&self.education)),
            field("Certifications", display_list(&self.certifications)),
        ]
    }

    /// One `**Label:** value` line per field.
    pub fn to_markdown(&self) -> String {
        self.display_fields()
            .iter()
            .map(|f| format!("**{}:** {}", f.label, f.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn field(label: &'static str, value: String) -> DisplayField {
    DisplayField { label, value }
}

fn display_scalar(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_FOUND.to_string(),
    }
}

fn display_list(values: &[String]) -> String {
    if values.is_empty() {
        NOT_FOUND.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractedEntities {
        ExtractedEntities {
            name: "Jane Doe".to_string(),
            email: Some("jane.doe@example.com".to_string()),
            mobile_number: None,
            skills: vec!["Python".to_string(), "SQL".to_string()],
            education: vec![],
            certifications: vec!["Data Analytics".to_string()],
        }
    }

    #[test]
    fn test_display_fields_use_placeholders() {
        let fields = sample().display_fields();
        let labels: Vec<_> = fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Name", "Email", "Mobile Number", "Skills", "Education", "Certifications"]
        );
        assert_eq!(fields[2].value, "Not found");
        assert_eq!(fields[3].value, "Python, SQL");
        assert_eq!(fields[4].value, "Not found");
    }

    #[test]
    fn test_empty_email_reads_not_found() {
        let mut entities = sample();
        entities.email = Some(String::new());
        assert_eq!(entities.display_fields()[1].value, "Not found");
    }

    #[test]
    fn test_markdown_summary() {
        let md = sample().to_markdown();
        assert!(md.starts_with("**Name:** Jane Doe\n**Email:** jane.doe@example.com\n"));
        assert!(md.ends_with("**Certifications:** Data Analytics"));
        assert_eq!(md.lines().count(), 6);
    }

    #[test]
    fn test_serializes_with_display_labels() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Name"], "Jane Doe");
        assert!(json["Mobile Number"].is_null());
        assert_eq!(json["Skills"][1], "SQL");
    }
}
