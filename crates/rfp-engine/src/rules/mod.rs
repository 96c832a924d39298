//! Ordered classification rules
//!
//! Each classifier is a fixed list of `(predicate, outcome)` rules evaluated top to bottom.
//! The first matching rule decides; later rules are never consulted.

pub mod insights;
pub mod questions;
pub mod requirements;

/// A single classification rule over lowercased text
#[derive(Clone, Copy)]
pub struct Rule<T: 'static> {
    pub matches: fn(&str) -> bool,
    pub outcome: T,
}

/// Outcome of the first rule that matches `text_lower`
pub fn first_match<T: Copy>(rules: &[Rule<T>], text_lower: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.matches)(text_lower))
        .map(|rule| rule.outcome)
}
