//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use pawspace_domain::{Assessment, Severity, Violation};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an assessment for a candidate of the given kind.
    pub fn format_assessment(&self, kind: &str, assessment: &Assessment) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "kind": kind,
                    "approved": assessment.approved,
                    "score": assessment.score,
                    "concerns": assessment.concerns,
                    "recommendations": assessment.recommendations,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{} {}",
                if assessment.approved { "approved" } else { "rejected" },
                assessment.score
            )),
            OutputFormat::Table => Ok(self.assessment_table(kind, assessment)),
        }
    }

    fn assessment_table(&self, kind: &str, assessment: &Assessment) -> String {
        let verdict = if assessment.approved {
            self.success(&format!("{} approved (score {}/100)", capitalize(kind), assessment.score))
        } else {
            self.error(&format!("{} rejected (score {}/100)", capitalize(kind), assessment.score))
        };

        let rows = assessment.concerns.len().max(assessment.recommendations.len());
        if rows == 0 {
            return format!("{}\n{}", verdict, self.info("No concerns raised."));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Concern", "Recommendation"]);
        for i in 0..rows {
            builder.push_record([
                (i + 1).to_string(),
                assessment.concerns.get(i).cloned().unwrap_or_default(),
                assessment.recommendations.get(i).cloned().unwrap_or_default(),
            ]);
        }

        format!("{}\n{}", verdict, self.table(builder))
    }

    /// Format rule violations.
    pub fn format_violations(&self, violations: &[Violation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let items: Vec<serde_json::Value> = violations
                    .iter()
                    .map(|v| {
                        serde_json::json!({
                            "rule": v.rule.as_str(),
                            "severity": v.severity.as_str(),
                            "deduction": v.deduction,
                            "violation": v.violation,
                            "recommendation": v.recommendation,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Quiet => Ok(violations
                .iter()
                .map(|v| v.rule.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if violations.is_empty() {
                    return Ok(self.success("No rule violations."));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rule", "Severity", "Deduction", "Violation", "Recommendation"]);
                for v in violations {
                    builder.push_record([
                        v.rule.to_string(),
                        self.severity(v.severity),
                        format!("-{}", v.deduction),
                        v.violation.clone(),
                        v.recommendation.clone(),
                    ]);
                }

                let total: u32 = violations.iter().map(|v| u32::from(v.deduction)).sum();
                Ok(format!(
                    "{}\n{}",
                    self.table(builder),
                    self.warning(&format!("Total deduction: {} points", total))
                ))
            }
        }
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Critical => "red",
            Severity::Major => "yellow",
            Severity::Minor => "cyan",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
