//! Contact-detail patterns. Compiled once per process.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w\.-]+?@\w+?\.\w+?\b").expect("email pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3})?[\s\-.\(]?\d{3,5}[\s\-.\)]?\d{3,5}[\s\-.\)]?\d{3,5}")
        .expect("phone pattern is valid")
});

/// A number introduced by a "Mobile" or "Phone" label.
static MOBILE_HINT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Mobile|Phone)[\s:]*([\d\s\-\+\(\)]{10,})")
        .expect("mobile hint pattern is valid")
});

const MIN_PHONE_DIGITS: usize = 10;

/// Returns the first email address in the text.
pub fn find_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// Returns the candidate's phone number.
///
/// A labelled number ("Mobile: ...", "Phone ...") wins. Otherwise the first
/// bare phone-shaped match with at least ten characters once spaces and
/// hyphens are removed.
pub fn find_mobile_number(text: &str) -> Option<String> {
    if let Some(number) = MOBILE_HINT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(2))
    {
        return Some(number.as_str().trim().to_string());
    }

    PHONE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| {
            candidate.chars().filter(|c| *c != ' ' && *c != '-').count() >= MIN_PHONE_DIGITS
        })
        .map(|candidate| candidate.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_wins() {
        let text = "Contact: jane.doe@example.com or j.doe@work.org";
        assert_eq!(find_email(text).as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_email_stops_after_first_domain_label() {
        assert_eq!(
            find_email("reach me at raj_k-99@mail.co.in today").as_deref(),
            Some("raj_k-99@mail.co")
        );
    }

    #[test]
    fn test_no_email() {
        assert_eq!(find_email("no address here @ all"), None);
    }

    #[test]
    fn test_labelled_mobile_number() {
        let text = "Jane Doe\nMobile: +91 98765 43210\nEmail: jane@x.com";
        assert_eq!(find_mobile_number(text).as_deref(), Some("+91 98765 43210"));
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let text = "PHONE (555) 123-4567";
        assert_eq!(find_mobile_number(text).as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_bare_number_fallback() {
        let text = "Reach me on 987-654-3210 after 6pm";
        assert_eq!(find_mobile_number(text).as_deref(), Some("987-654-3210"));
    }

    #[test]
    fn test_short_numbers_are_ignored() {
        assert_eq!(find_mobile_number("Roll no 123 456 789"), None);
    }

    #[test]
    fn test_no_number() {
        assert_eq!(find_mobile_number("Jane Doe, Data Scientist"), None);
    }
}
