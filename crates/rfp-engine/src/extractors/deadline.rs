// Deadline extraction for requirement paragraphs
use crate::patterns::DEADLINE_RE;

/// Extract a "by <Month> <Day>, <Year>" date phrase.
///
/// Returns the date part only, e.g. "June 30, 2025". The month word is not validated.
pub fn extract_deadline(text: &str) -> Option<String> {
    DEADLINE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_deadline() {
        assert_eq!(
            extract_deadline("Submit proposals by March 5, 2026 for review."),
            Some("March 5, 2026".to_string())
        );
        assert_eq!(
            extract_deadline("Final report due by June 30, 2025"),
            Some("June 30, 2025".to_string())
        );
        assert_eq!(extract_deadline("Submit proposals promptly."), None);
    }

    #[test]
    fn test_first_deadline_wins() {
        assert_eq!(
            extract_deadline("Draft by May 1, 2025 and final by June 1, 2025"),
            Some("May 1, 2025".to_string())
        );
    }

    #[test]
    fn test_matches_inside_longer_words() {
        // "nearby" ends in "by"; the pattern has no word boundary
        assert_eq!(
            extract_deadline("Offices nearby April 2, 2025 event"),
            Some("April 2, 2025".to_string())
        );
    }

    #[test]
    fn test_rejects_three_digit_day() {
        assert_eq!(extract_deadline("by June 300, 2025"), None);
    }
}
