//! Bounded in-memory record of recent assessments
//!
//! Owned by the caller. Nothing in the assessor writes here on its own.

use crate::Evaluation;
use pawspace_domain::{Assessment, Violation};
use std::collections::VecDeque;

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// One recorded assessment
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Candidate kind ("space" or "booking")
    pub kind: &'static str,

    /// Final assessment
    pub assessment: Assessment,

    /// Rule violations behind the assessment
    pub violations: Vec<Violation>,
}

/// Ring buffer of recent assessments with running totals
#[derive(Debug, Clone)]
pub struct AssessmentHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    approved: u64,
    rejected: u64,
    safe_failures: u64,
}

impl AssessmentHistory {
    /// Create a history keeping at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            approved: 0,
            rejected: 0,
            safe_failures: 0,
        }
    }

    /// Record an evaluation, evicting the oldest entry when full
    pub fn record(&mut self, kind: &'static str, evaluation: &Evaluation) {
        let assessment = &evaluation.assessment;
        if assessment.is_safe_failure() {
            self.safe_failures += 1;
        } else if assessment.approved {
            self.approved += 1;
        } else {
            self.rejected += 1;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            kind,
            assessment: assessment.clone(),
            violations: evaluation.violations.clone(),
        });
    }

    /// Entries from oldest to newest
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Approved assessments recorded since creation
    pub fn approved_count(&self) -> u64 {
        self.approved
    }

    /// Rejected assessments (excluding safe failures) since creation
    pub fn rejected_count(&self) -> u64 {
        self.rejected
    }

    /// Safe failures recorded since creation
    pub fn safe_failure_count(&self) -> u64 {
        self.safe_failures
    }

    /// Drop retained entries; counters are kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// One-line totals for logs
    pub fn summary(&self) -> String {
        let total = self.approved + self.rejected + self.safe_failures;
        format!(
            "{} assessments: {} approved, {} rejected, {} technical failures ({} retained)",
            total,
            self.approved,
            self.rejected,
            self.safe_failures,
            self.entries.len()
        )
    }
}

impl Default for AssessmentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
