//! # Gap Detector
//!
//! Evaluates a fixed rule list against the compliance record to produce
//! human-readable findings. Rules are independent: a record can trigger any
//! subset, including none or all six, and every applicable rule is reported
//! — evaluation never short-circuits.
//!
//! ## Ordering
//!
//! Findings come back in fixed rule order, not severity order. The
//! [`GapCategory`] variant order matches the rule order, so sorting by
//! category reproduces rule order.

use serde::{Deserialize, Serialize};

use pqa_core::ComplianceRecord;

use crate::faculty::FacultyAlignment;

/// The compliance area a gap finding belongs to. Variant order is the rule
/// evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    /// Government certification is missing.
    Institutional,
    /// Governance-body approval is not on file.
    Governance,
    /// No real accreditation standing.
    Accreditation,
    /// Faculty qualification alignment is incomplete.
    Faculty,
    /// Curriculum revision not noted by the regulator.
    Curriculum,
    /// No graduation outcomes encoded.
    Outcomes,
}

impl std::fmt::Display for GapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Institutional => "Institutional",
            Self::Governance => "Governance",
            Self::Accreditation => "Accreditation",
            Self::Faculty => "Faculty",
            Self::Curriculum => "Curriculum",
            Self::Outcomes => "Outcomes",
        };
        f.write_str(s)
    }
}

/// One human-readable compliance gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapFinding {
    /// The compliance area.
    pub category: GapCategory,
    /// Statement of the unmet condition, ready for display.
    pub message: String,
}

/// Evaluate all six gap rules against the record, in fixed order.
///
/// Takes the already-computed [`FacultyAlignment`] so the faculty rule and
/// the faculty pillar score report from the same numbers.
pub fn detect_gaps(record: &ComplianceRecord, alignment: &FacultyAlignment) -> Vec<GapFinding> {
    let mut findings = Vec::new();

    if !record.regulatory.status.is_certified() {
        findings.push(GapFinding {
            category: GapCategory::Institutional,
            message: "Program does not hold a government certificate of program compliance."
                .to_string(),
        });
    }

    if record.regulatory.governance_approval.is_none() {
        findings.push(GapFinding {
            category: GapCategory::Governance,
            message: "No governance-body approval document is on file for this program."
                .to_string(),
        });
    }

    let accredited = record
        .latest_milestone()
        .is_some_and(|m| m.grants_accreditation());
    if !accredited {
        findings.push(GapFinding {
            category: GapCategory::Accreditation,
            message: "Program has no accreditation standing beyond the non-accredited level."
                .to_string(),
        });
    }

    if alignment.alignment_rate < 1.0 {
        let unaligned = alignment.total_count - alignment.aligned_count;
        let percent = (alignment.alignment_rate * 100.0).round();
        findings.push(GapFinding {
            category: GapCategory::Faculty,
            message: format!(
                "{unaligned} member(s) do not meet the qualification standard for their \
                 teaching assignment ({percent:.0}% aligned)."
            ),
        });
    }

    if !record.curriculum.noted_by_regulator {
        findings.push(GapFinding {
            category: GapCategory::Curriculum,
            message: "The current curriculum revision has not been noted by the regulator."
                .to_string(),
        });
    }

    if record.graduation_records.is_empty() {
        findings.push(GapFinding {
            category: GapCategory::Outcomes,
            message: "No graduation records have been encoded for this academic year."
                .to_string(),
        });
    }

    findings
}
