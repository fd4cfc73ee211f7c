//! # Pillar Score Calculators
//!
//! Five independent pure rules, one per [`Pillar`], each mapping a slice of
//! the compliance record to a score in `[0, PILLAR_WEIGHT]`. Dispatch is an
//! exhaustive `match` — adding a pillar variant is a compile error until a
//! scoring rule exists for it.
//!
//! ## Degradation policy
//!
//! Absent sub-objects are the worst input for their pillar: no milestones,
//! a blank roster, or missing curriculum data score 0. There is no error
//! path — every rule is total over the record domain.

use std::collections::BTreeMap;

use pqa_core::{
    ComplianceRecord, CurriculumState, Pillar, RegulatoryCompliance, RegulatoryStatus,
    PILLAR_WEIGHT,
};

use crate::faculty::FacultyAlignment;

/// Score every pillar, keyed in canonical pillar order.
pub fn pillar_scores(
    record: &ComplianceRecord,
    alignment: &FacultyAlignment,
) -> BTreeMap<Pillar, f64> {
    Pillar::all_pillars()
        .iter()
        .map(|p| (*p, score_pillar(record, alignment, *p)))
        .collect()
}

/// Score a single pillar. Always in `[0, PILLAR_WEIGHT]`.
pub fn score_pillar(record: &ComplianceRecord, alignment: &FacultyAlignment, pillar: Pillar) -> f64 {
    match pillar {
        Pillar::Regulatory => score_regulatory(&record.regulatory),
        Pillar::Accreditation => score_accreditation(record),
        Pillar::Faculty => score_faculty(alignment),
        Pillar::Curriculum => score_curriculum(&record.curriculum),
        Pillar::Outcomes => score_outcomes(record),
    }
}

/// Full weight for a held certificate, half for an application in progress,
/// zero otherwise.
fn score_regulatory(regulatory: &RegulatoryCompliance) -> f64 {
    match regulatory.status {
        RegulatoryStatus::WithCertificate => PILLAR_WEIGHT,
        RegulatoryStatus::InProgress => PILLAR_WEIGHT / 2.0,
        RegulatoryStatus::NotCertified => 0.0,
    }
}

/// Full weight iff the most recent milestone grants real accreditation
/// standing; zero otherwise.
///
/// Deliberately binary: the milestone's lifecycle stage (to-be-assigned,
/// undergoing, completed, current) does not scale the score, even though
/// the data model tracks it. Whether graduated credit by lifecycle stage
/// was intended is an open product question — until that is clarified, the
/// rule stays binary rather than guessing a scheme.
fn score_accreditation(record: &ComplianceRecord) -> f64 {
    match record.latest_milestone() {
        Some(m) if m.grants_accreditation() => PILLAR_WEIGHT,
        _ => 0.0,
    }
}

/// The alignment fraction scaled to the pillar weight — the one continuous
/// pillar.
fn score_faculty(alignment: &FacultyAlignment) -> f64 {
    alignment.alignment_rate * PILLAR_WEIGHT
}

/// Full weight when the curriculum is both regulator-noted and backed by a
/// reference document, half when exactly one holds, zero when neither.
fn score_curriculum(curriculum: &CurriculumState) -> f64 {
    let has_document = curriculum.reference_document.is_some();
    match (has_document, curriculum.noted_by_regulator) {
        (true, true) => PILLAR_WEIGHT,
        (true, false) | (false, true) => PILLAR_WEIGHT / 2.0,
        (false, false) => 0.0,
    }
}

/// Presence-only: full weight when any graduation or tracer record exists,
/// zero otherwise. Not volume-weighted.
fn score_outcomes(record: &ComplianceRecord) -> f64 {
    if record.graduation_records.is_empty() && record.tracer_records.is_empty() {
        0.0
    } else {
        PILLAR_WEIGHT
    }
}
