//! Section outlining
//!
//! Walks page lines in order and opens a new flat section whenever a line looks like a
//! heading. Non-heading lines are appended to the most recently opened section. The open
//! section is simply the last entry of the accumulator threaded through the fold, so no
//! state survives between calls.

use crate::text::lines;
use rfp_types::{PageText, Section};

/// All-caps heading
pub const PRIMARY_LEVEL: u8 = 1;
/// Colon-terminated heading
pub const SECONDARY_LEVEL: u8 = 2;

/// Lines at or above this many characters are never considered, as heading or content
pub const MAX_LINE_CHARS: usize = 100;

/// Heading level for a trimmed line, or `None` for body text.
///
/// The uppercase test runs first, so "BUDGET:" is a primary heading. Lines without any
/// cased letters (digits, punctuation) count as uppercase.
pub fn heading_level(line: &str) -> Option<u8> {
    if line.to_uppercase() == line {
        Some(PRIMARY_LEVEL)
    } else if line.ends_with(':') {
        Some(SECONDARY_LEVEL)
    } else {
        None
    }
}

// Length is measured in UTF-16 code units
fn is_candidate(line: &str) -> bool {
    !line.is_empty() && line.encode_utf16().count() < MAX_LINE_CHARS
}

fn push_line(mut sections: Vec<Section>, line: &str, page_number: u32) -> Vec<Section> {
    if !is_candidate(line) {
        return sections;
    }

    match heading_level(line) {
        Some(level) => sections.push(Section::open(line, level, page_number)),
        // Lines before the first heading are dropped
        None => {
            if let Some(current) = sections.last_mut() {
                current.content.push_str(line);
                current.content.push('\n');
            }
        }
    }

    sections
}

/// Build the flat section outline for pages in reading order
pub fn outline(pages: &[PageText]) -> Vec<Section> {
    pages.iter().fold(Vec::new(), |sections, page| {
        lines(&page.text)
            .map(str::trim)
            .fold(sections, |sections, line| {
                push_line(sections, line, page.page_number)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(number: u32, text: &str) -> PageText {
        PageText::new(number, text)
    }

    #[test]
    fn test_outline_opens_sections_on_headings() {
        let pages = vec![page(
            1,
            "INTRODUCTION\nThis project covers...\nBUDGET:\nSee attached sheet.",
        )];
        let sections = outline(&pages);

        assert_eq!(
            sections,
            vec![
                Section {
                    title: "INTRODUCTION".to_string(),
                    level: 1,
                    content: "This project covers...\n".to_string(),
                    start_page: 1,
                },
                Section {
                    title: "BUDGET:".to_string(),
                    level: 1,
                    content: "See attached sheet.\n".to_string(),
                    start_page: 1,
                },
            ]
        );
    }

    #[test]
    fn test_mixed_case_colon_line_is_secondary() {
        let sections = outline(&[page(1, "Scope of Work:\nDeliver creative assets.")]);
        assert_eq!(sections[0].level, SECONDARY_LEVEL);
        assert_eq!(sections[0].title, "Scope of Work:");
        assert_eq!(sections[0].content, "Deliver creative assets.\n");
    }

    #[test]
    fn test_lines_before_first_heading_are_dropped() {
        let sections = outline(&[page(1, "cover page text\nmore cover\nOVERVIEW\nbody")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "body\n");
    }

    #[test]
    fn test_section_continues_across_pages() {
        let pages = vec![
            page(1, "TIMELINE\nKickoff in May"),
            page(2, "Launch in June\nEvaluation Criteria:\nPrice and quality"),
        ];
        let sections = outline(&pages);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].content, "Kickoff in May\nLaunch in June\n");
        assert_eq!(sections[0].start_page, 1);
        assert_eq!(sections[1].start_page, 2);
    }

    #[test]
    fn test_long_lines_are_ignored_entirely() {
        let long_heading = "A".repeat(MAX_LINE_CHARS);
        let long_body = format!("{} tail", "word ".repeat(30));
        let text = format!("SCOPE\n{}\n{}\nshort line", long_heading, long_body);
        let sections = outline(&[page(1, &text)]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "short line\n");
    }

    #[test]
    fn test_line_length_counts_utf16_units() {
        // 50 emoji are 100 code units; 49 emoji and a colon are 99
        let emoji_line = "\u{1F4E2}".repeat(50);
        let short_line = format!("{}:", "\u{1F4E2}".repeat(49));
        let text = format!("AGENDA\n{}\n{}", emoji_line, short_line);
        let sections = outline(&[page(1, &text)]);

        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["AGENDA", short_line.as_str()]);
        assert_eq!(sections[0].content, "");
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_skipped() {
        let sections = outline(&[page(3, "   SUBMISSION   \n\n   \n  Send two copies.  ")]);
        assert_eq!(sections[0].title, "SUBMISSION");
        assert_eq!(sections[0].content, "Send two copies.\n");
        assert_eq!(sections[0].start_page, 3);
    }

    #[test]
    fn test_numeric_lines_count_as_headings() {
        assert_eq!(heading_level("2025"), Some(PRIMARY_LEVEL));
        assert_eq!(heading_level("Section 2"), None);
    }

    #[test]
    fn test_empty_pages_yield_no_sections() {
        assert!(outline(&[]).is_empty());
        assert!(outline(&[page(1, "")]).is_empty());
    }
}
