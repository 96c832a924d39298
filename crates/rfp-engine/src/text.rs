//! Line, paragraph and sentence splitting
//!
//! All splitting uses fixed delimiters: `\n` for lines, `\n\n` for paragraphs and runs of
//! `.`, `!`, `?` for sentences.

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Raw lines of a page, untrimmed and including empty ones
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Trimmed, non-empty paragraphs
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// A sentence segment together with the delimiter run that closed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Trimmed segment text, delimiters excluded
    pub text: &'a str,
    /// Segment text followed by its closing delimiters (empty at end of input)
    pub with_closing: &'a str,
}

fn is_sentence_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into sentences, dropping whitespace-only segments
pub fn sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let body_len = rest.find(is_sentence_delimiter).unwrap_or(rest.len());
        let tail = &rest[body_len..];
        let closing_len = tail
            .find(|c: char| !is_sentence_delimiter(c))
            .unwrap_or(tail.len());

        let body = &rest[..body_len];
        let trimmed = body.trim();
        if !trimmed.is_empty() {
            let leading = body.len() - body.trim_start().len();
            sentences.push(Sentence {
                text: trimmed,
                with_closing: &rest[leading..body_len + closing_len],
            });
        }

        rest = &rest[body_len + closing_len..];
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_skip_blank_blocks() {
        let text = "First block\n\n   \n\n  Second block  \n\n";
        let found: Vec<_> = paragraphs(text).collect();
        assert_eq!(found, vec!["First block", "Second block"]);
    }

    #[test]
    fn test_paragraphs_split_on_exact_double_newline() {
        // Three newlines leave a leading "\n" on the next paragraph, which trimming removes
        let found: Vec<_> = paragraphs("One\n\n\nTwo").collect();
        assert_eq!(found, vec!["One", "Two"]);
    }

    #[test]
    fn test_sentences_split_on_delimiter_runs() {
        let found: Vec<_> = sentences("Hello world... Is it? Yes!")
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(found, vec!["Hello world", "Is it", "Yes"]);
    }

    #[test]
    fn test_sentences_keep_closing_delimiters() {
        let found = sentences("  Can vendors help?!  Next");
        assert_eq!(found[0].text, "Can vendors help");
        assert_eq!(found[0].with_closing, "Can vendors help?!");
        assert_eq!(found[1].with_closing, "Next");
    }

    #[test]
    fn test_sentences_drop_whitespace_only_segments() {
        assert!(sentences("... ? !  .").is_empty());
        assert!(sentences("").is_empty());
    }

    #[test]
    fn test_lines_keep_empty_lines() {
        let found: Vec<_> = lines("A\n\nB").collect();
        assert_eq!(found, vec!["A", "", "B"]);
    }
}
