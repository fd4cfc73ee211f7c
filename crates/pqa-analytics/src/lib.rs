//! # pqa-analytics — Compliance Maturity Scoring & Gap-Analysis Engine
//!
//! Derives an auditable maturity judgment from a program's compliance
//! record: per-pillar scores, an overall weighted index, faculty alignment
//! statistics with per-specialization coverage, outcome trend aggregates,
//! and an ordered list of compliance gaps.
//!
//! ## Data Flow
//!
//! ```text
//! ComplianceRecord ──▶ { pillars, faculty, outcomes, gaps } ──▶ MaturityReport
//! ```
//!
//! One-way and pure: no component mutates the input record, and every
//! derived structure is recomputed on each invocation. There is no caching,
//! no I/O, and no shared mutable state — the engine may be called from
//! multiple threads on independent records with no synchronization.
//!
//! ## Failure Semantics
//!
//! [`analyze`] never fails. Missing or incomplete data degrades to the safe
//! default for its calculator (0, empty, `Gap`), so the worst case for a
//! completely empty record is the all-zero, all-gaps report — not an error.

pub mod faculty;
pub mod gaps;
pub mod outcomes;
pub mod pillars;
pub mod report;

// Re-export primary types.
pub use faculty::{analyze_roster, CoverageStatus, FacultyAlignment};
pub use gaps::{detect_gaps, GapCategory, GapFinding};
pub use outcomes::{aggregate_outcomes, OutcomeSummary, TrendPoint};
pub use pillars::{pillar_scores, score_pillar};
pub use report::{MaturityBand, MaturityReport};

use pqa_core::{ComplianceRecord, SpecializationTrack};

/// Run the full maturity analysis for one compliance record.
///
/// This is the primary entry point. It:
/// 1. Analyzes the faculty roster against the specialization catalog.
/// 2. Scores all five pillars (the faculty pillar reuses the roster
///    analysis, so score and gap message report from the same numbers).
/// 3. Aggregates outcome data.
/// 4. Evaluates the gap rules.
/// 5. Sums the pillar scores, rounds half-up, and assembles the report.
///
/// Deterministic: two calls on an identical record and catalog yield
/// identical reports.
pub fn analyze(record: &ComplianceRecord, catalog: &[SpecializationTrack]) -> MaturityReport {
    let faculty = analyze_roster(&record.faculty_roster, catalog);
    let pillar_scores = pillars::pillar_scores(record, &faculty);
    let outcomes = aggregate_outcomes(record);
    let gaps = detect_gaps(record, &faculty);

    let total: f64 = pillar_scores.values().sum();
    // Each pillar is in [0, 20]; the sum is in [0, 100] before rounding.
    let overall_score = total.round() as u8;
    let band = MaturityBand::for_score(overall_score);
    let specialization_coverage = faculty.coverage();

    tracing::debug!(
        program = %record.program_id,
        academic_year = %record.academic_year,
        overall_score,
        gap_count = gaps.len(),
        "maturity analysis complete"
    );

    MaturityReport {
        overall_score,
        band,
        pillar_scores,
        faculty,
        specialization_coverage,
        outcomes,
        gaps,
    }
}
