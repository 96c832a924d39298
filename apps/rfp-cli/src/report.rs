//! Report rendering
//!
//! The text layout follows the analysis export: a summary block, numbered questions and a
//! requirements table.

use anyhow::Context;
use rfp_engine::{executive_summary, key_sections};
use rfp_types::{AnalysisResult, Requirement};

const TABLE_HEADER: &str = "ID | Description | Page | Criticality | Deadline";
const MISSING_DEADLINE: &str = "N/A";

fn heading(title: &str, underline: char) -> [String; 2] {
    [
        title.to_string(),
        underline.to_string().repeat(title.chars().count()),
    ]
}

fn table_row(requirement: &Requirement) -> String {
    let deadline = if requirement.has_deadline() {
        requirement.deadline.as_str()
    } else {
        MISSING_DEADLINE
    };
    format!(
        "{} | {} | {} | {} | {}",
        requirement.id,
        requirement.description.replace('\n', " "),
        requirement.page_reference,
        requirement.criticality,
        deadline
    )
}

/// Human-readable report for one analyzed file
pub fn render_text(file_name: &str, result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.extend(heading(&format!("RFP Analysis: {}", file_name), '='));
    lines.push(String::new());

    lines.extend(heading("Summary", '-'));
    lines.push(result.summary.clone());
    lines.push(String::new());
    lines.push(format!("Title: {}", result.metadata.title));
    lines.push(format!("Author: {}", result.metadata.author));
    lines.push(format!("Created: {}", result.metadata.creation_date.to_rfc3339()));
    lines.push(format!("Pages: {}", result.metadata.page_count));
    lines.push(String::new());

    lines.extend(heading("Key Insights", '-'));
    if result.insights.is_empty() {
        lines.push("None found".to_string());
    }
    lines.extend(result.insights.iter().map(|insight| format!("- {}", insight)));
    lines.push(String::new());

    lines.extend(heading("Executive Summary", '-'));
    lines.push(executive_summary(&key_sections(&result.text)).trim_end().to_string());
    lines.push(String::new());

    lines.extend(heading("Extracted Questions", '-'));
    if result.questions.is_empty() {
        lines.push("None found".to_string());
    }
    lines.extend(
        result
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| format!("{}. {}", index + 1, question)),
    );
    lines.push(String::new());

    lines.extend(heading("Requirements", '-'));
    lines.push(TABLE_HEADER.to_string());
    lines.extend(result.requirements.iter().map(table_row));

    lines.join("\n")
}

/// Serialized analysis result
pub fn render_json(result: &AnalysisResult, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    json.context("Failed to serialize analysis result")
}
