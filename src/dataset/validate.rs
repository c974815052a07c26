//! Advisory consistency checks over a loaded document.
//!
//! The analyzer trusts its input, so nothing here is fatal. Callers log the
//! findings and carry on.

use std::collections::HashSet;

use super::tradition::TraditionsDocument;

/// Inclusive range for complexity scores.
pub const COMPLEXITY_RANGE: (i32, i32) = (1, 5);
/// Inclusive range for effectiveness scores (0 = no evidence).
pub const EFFECTIVENESS_RANGE: (i32, i32) = (0, 5);

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Schema invariant violations.
    pub errors: Vec<String>,
    /// Dangling lineage references and similar soft issues.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Check id uniqueness, score ranges and lineage references.
pub fn validate(doc: &TraditionsDocument) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen = HashSet::new();

    for t in &doc.traditions {
        if t.id.trim().is_empty() {
            report.errors.push(format!("record '{}' has an empty id", t.name));
        } else if !seen.insert(t.id.as_str()) {
            report.errors.push(format!("duplicate id '{}'", t.id));
        }

        if let Some(profile) = &t.complexity_profile {
            for (dim, value) in profile.scores() {
                if value < COMPLEXITY_RANGE.0 || value > COMPLEXITY_RANGE.1 {
                    report
                        .errors
                        .push(format!("{}: complexity {} out of range ({})", t.id, dim, value));
                }
            }
        }

        if let Some(eff) = &t.effectiveness {
            for (dim, value) in eff.scores() {
                if value < EFFECTIVENESS_RANGE.0 || value > EFFECTIVENESS_RANGE.1 {
                    report
                        .errors
                        .push(format!("{}: effectiveness {} out of range ({})", t.id, dim, value));
                }
            }
        }
    }

    let ids: HashSet<&str> = doc.traditions.iter().map(|t| t.id.as_str()).collect();
    for t in &doc.traditions {
        for parent in &t.parent_traditions {
            if !ids.contains(parent.as_str()) {
                report
                    .warnings
                    .push(format!("{}: unknown parent tradition '{}'", t.id, parent));
            }
        }
    }

    report
}
