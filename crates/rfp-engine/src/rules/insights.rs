// Labeled key-fact extraction
use crate::patterns::INSIGHT_PATTERNS;
use rfp_types::Insight;

/// Apply every labeled pattern to `text`, keeping the first match per label.
///
/// Labels without a match are omitted. Output follows the pattern table order, not the
/// order in which facts appear in the text.
pub fn extract_insights(text: &str) -> Vec<Insight> {
    INSIGHT_PATTERNS
        .iter()
        .filter_map(|(label, pattern)| {
            let caps = pattern.captures(text)?;
            let value = caps.get(1)?.as_str().trim();
            Some(Insight {
                label: *label,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rfp_types::InsightLabel;

    fn rendered(text: &str) -> Vec<String> {
        extract_insights(text)
            .iter()
            .map(|insight| insight.to_string())
            .collect()
    }

    #[test]
    fn test_extracts_all_labels_in_table_order() {
        let text = "Target audience: adults 25-54 in urban markets. \
                    Deadline: March 15, 2025. Budget: $250,000. \
                    Agency: Bright Media. Advertiser: Acme Foods & Co.";
        assert_eq!(
            rendered(text),
            vec![
                "Advertiser: Acme Foods & Co",
                "Agency: Bright Media",
                "Budget: $250,000.",
                "Deadline: March 15, 2025",
                "Target Demographics: adults 25-54 in urban markets",
            ]
        );
    }

    #[test]
    fn test_omits_unmatched_labels() {
        let insights = extract_insights("Budget: 1.5M for the campaign");
        assert_eq!(
            insights,
            vec![Insight {
                label: InsightLabel::Budget,
                value: "1.5M".to_string(),
            }]
        );
    }

    #[test]
    fn test_first_match_per_label() {
        assert_eq!(
            rendered("Agency: First One. Agency: Second One."),
            vec!["Agency: First One"]
        );
    }

    #[test]
    fn test_budget_accepts_currency_and_suffix() {
        assert_eq!(rendered("BUDGET €75 k total"), vec!["Budget: €75 k"]);
    }

    #[test]
    fn test_letter_classes_stay_ascii() {
        // Long s and the Kelvin sign fold to 's' and 'k' under Unicode case folding
        assert_eq!(rendered("Budget: 40\u{212A}"), vec!["Budget: 40"]);
        assert_eq!(rendered("Advertiser: Acme \u{17F}tudio"), vec!["Advertiser: Acme"]);
        assert!(extract_insights("Adverti\u{17F}er: Acme").is_empty());
    }

    #[test]
    fn test_value_may_span_lines() {
        // Whitespace inside the allowed class includes newlines
        assert_eq!(
            rendered("Advertiser:\nGlobex\nCorporation"),
            vec!["Advertiser: Globex\nCorporation"]
        );
    }

    #[test]
    fn test_empty_text_yields_no_insights() {
        assert!(extract_insights("").is_empty());
    }
}
