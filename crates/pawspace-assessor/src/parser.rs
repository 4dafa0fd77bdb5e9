//! Parse advisory free text into a provisional report
//!
//! Parsing is total: anything that does not match degrades to the default
//! (score 0, empty lists, no approval hint).

use pawspace_domain::MAX_SCORE;
use tracing::debug;

const LIST_MARKERS: [char; 3] = ['-', '*', '•'];

/// Provisional, non-authoritative reading of an advisory response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisoryReport {
    /// Advisory score in `0..=100`
    pub score: u8,

    /// List items mentioning a concern, marker stripped
    pub concerns: Vec<String>,

    /// List items mentioning a recommendation, marker stripped
    pub recommendations: Vec<String>,

    /// Whether the text claimed `approved: true`; never used for the decision
    pub approved_hint: bool,
}

/// Parse an advisory response
///
/// # Examples
///
/// ```
/// use pawspace_assessor::parse_advisory_response;
///
/// let report = parse_advisory_response(
///     "Overall score (0-100): 85\n- Concern: no shade\n- Recommend adding a canopy",
/// );
/// assert_eq!(report.score, 85);
/// assert_eq!(report.concerns, vec!["Concern: no shade".to_string()]);
/// assert_eq!(report.recommendations.len(), 1);
/// ```
pub fn parse_advisory_response(response: &str) -> AdvisoryReport {
    let mut report = AdvisoryReport {
        score: extract_score(response).unwrap_or(0),
        approved_hint: response.to_lowercase().contains("approved: true"),
        ..AdvisoryReport::default()
    };

    for line in response.lines() {
        let Some(item) = strip_list_marker(line) else {
            continue;
        };
        let lower = item.to_lowercase();
        if lower.contains("concern") {
            report.concerns.push(item.to_string());
        }
        if lower.contains("recommend") {
            report.recommendations.push(item.to_string());
        }
    }

    debug!(
        "Parsed advisory: score {}, {} concerns, {} recommendations",
        report.score,
        report.concerns.len(),
        report.recommendations.len()
    );

    report
}

/// Text after a leading list marker, if the line has one
fn strip_list_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix(LIST_MARKERS)?;
    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}

/// First usable score on any line mentioning "score"
fn extract_score(response: &str) -> Option<u8> {
    response.lines().find_map(score_in_line)
}

fn score_in_line(line: &str) -> Option<u8> {
    let lower = line.to_ascii_lowercase();
    let at = lower.find("score")?;
    let after = &lower[at + "score".len()..];

    // Prefer the value after the separator so "score (0-100): 85" reads 85
    let value = after
        .find([':', '='])
        .and_then(|sep| first_integer(&after[sep + 1..]))
        .or_else(|| first_integer(after))?;

    Some(value.min(u64::from(MAX_SCORE)) as u8)
}

fn first_integer(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    // Negative values floor at zero
    if text[..start].trim_end().ends_with('-') {
        return Some(0);
    }
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    // Overlong runs saturate and are clamped by the caller
    Some(digits.parse().unwrap_or(u64::MAX))
}
