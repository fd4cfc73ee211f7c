//! # Compliance Record Data Model
//!
//! The `ComplianceRecord` is the unit of analysis for the maturity engine:
//! one fully-assembled snapshot per program per academic year, supplied by
//! the persistence layer. The engine only ever reads it — every derived
//! structure is recomputed from this snapshot on every invocation.
//!
//! ## Sentinels as named constants
//!
//! The portal's free-form fields reserve two magic strings: the
//! accreditation level that means "no real accreditation", and the bucket
//! that collects faculty members without a catalog-backed specialization.
//! Both live here as constants so each check is a single comparison, not a
//! string literal scattered across the codebase.

use serde::{Deserialize, Serialize};

use crate::identity::{AcademicYear, ProgramId, RecordId, SpecializationId};

/// Accreditation level sentinel meaning "no real accreditation".
///
/// A milestone at this level exists as a row in the portal but grants no
/// accreditation standing.
pub const NON_ACCREDITED_LEVEL: &str = "Non Accredited";

/// Reserved specialization bucket for members without a catalog-backed
/// assignment (unassigned, or assigned to a track later removed from the
/// catalog).
pub const GENERAL_TRACK: &str = "General";

// ─── Regulatory ──────────────────────────────────────────────────────

/// Government certification state of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryStatus {
    /// The program holds a government certificate/permit.
    WithCertificate,
    /// Certification application is in progress.
    InProgress,
    /// No certification and none in progress.
    NotCertified,
}

impl RegulatoryStatus {
    /// Whether the program is fully certified.
    pub fn is_certified(&self) -> bool {
        matches!(self, Self::WithCertificate)
    }
}

impl std::fmt::Display for RegulatoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::WithCertificate => "WITH_CERTIFICATE",
            Self::InProgress => "IN_PROGRESS",
            Self::NotCertified => "NOT_CERTIFIED",
        };
        f.write_str(s)
    }
}

/// Regulatory compliance slice of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryCompliance {
    /// Certification state.
    pub status: RegulatoryStatus,
    /// Reference to the governance-body approval document, if filed.
    pub governance_approval: Option<String>,
}

impl Default for RegulatoryCompliance {
    fn default() -> Self {
        Self {
            status: RegulatoryStatus::NotCertified,
            governance_approval: None,
        }
    }
}

// ─── Accreditation ───────────────────────────────────────────────────

/// Lifecycle stage of an accreditation milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneLifecycle {
    /// Milestone created but no survey visit scheduled yet.
    ToBeAssigned,
    /// Survey/accreditation process underway.
    Undergoing,
    /// Process completed; award superseded by a later milestone.
    Completed,
    /// The currently held accreditation award.
    Current,
}

impl std::fmt::Display for MilestoneLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ToBeAssigned => "TO_BE_ASSIGNED",
            Self::Undergoing => "UNDERGOING",
            Self::Completed => "COMPLETED",
            Self::Current => "CURRENT",
        };
        f.write_str(s)
    }
}

/// One entry in the program's ordered accreditation history.
///
/// `level` is the accrediting body's free-form rank string (e.g.
/// `"Level II Re-accredited"`). The reserved [`NON_ACCREDITED_LEVEL`] value
/// records a milestone that grants no standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccreditationMilestone {
    /// Accreditation level/rank awarded or targeted.
    pub level: String,
    /// Lifecycle stage of this milestone.
    pub lifecycle: MilestoneLifecycle,
    /// Reference to the accreditation certificate document, if uploaded.
    pub certificate: Option<String>,
}

impl AccreditationMilestone {
    /// Whether this milestone grants real accreditation standing.
    ///
    /// True iff the level is non-blank and not the [`NON_ACCREDITED_LEVEL`]
    /// sentinel. This is the single place that comparison happens.
    pub fn grants_accreditation(&self) -> bool {
        let level = self.level.trim();
        !level.is_empty() && level != NON_ACCREDITED_LEVEL
    }
}

// ─── Faculty ─────────────────────────────────────────────────────────

/// Qualification alignment of a faculty member's credentials against the
/// standard for their teaching assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentTag {
    /// Credentials meet the qualification standard.
    Aligned,
    /// Credentials do not meet the standard.
    NotAligned,
    /// The standard does not apply (e.g., administrative-only load).
    NotApplicable,
}

impl AlignmentTag {
    /// Whether this tag counts toward the aligned-faculty tally.
    ///
    /// Only `Aligned` counts — `NotApplicable` is neither aligned nor a
    /// deficiency, but it still occupies a roster slot.
    pub fn is_aligned(&self) -> bool {
        matches!(self, Self::Aligned)
    }
}

/// A person on the program's faculty roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Full name as entered in the portal.
    pub name: String,
    /// Qualification alignment tag.
    pub alignment: AlignmentTag,
    /// Specialization track assignment, if any. An assignment that does not
    /// match the program's catalog collapses into the General bucket.
    pub specialization: Option<SpecializationId>,
}

impl FacultyMember {
    /// Convenience constructor for a member with no specialization.
    pub fn new(name: impl Into<String>, alignment: AlignmentTag) -> Self {
        Self {
            name: name.into(),
            alignment,
            specialization: None,
        }
    }
}

/// The program's faculty roster.
///
/// Dean and program chair are expected on a complete record; the associate
/// dean exists only where the institution has one (its presence is itself
/// data). A blank roster is valid input and degrades to zero counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacultyRoster {
    /// College dean.
    pub dean: Option<FacultyMember>,
    /// Associate dean, where the institution has one.
    pub associate_dean: Option<FacultyMember>,
    /// Program chair.
    pub program_chair: Option<FacultyMember>,
    /// Remaining faculty members.
    pub members: Vec<FacultyMember>,
}

impl FacultyRoster {
    /// Iterate the leadership entries that are present, in roster order
    /// (dean, associate dean, program chair).
    pub fn leadership(&self) -> impl Iterator<Item = &FacultyMember> {
        self.dean
            .iter()
            .chain(self.associate_dean.iter())
            .chain(self.program_chair.iter())
    }

    /// Iterate every person on the roster: leadership first, then members.
    pub fn everyone(&self) -> impl Iterator<Item = &FacultyMember> {
        self.leadership().chain(self.members.iter())
    }
}

// ─── Curriculum ──────────────────────────────────────────────────────

/// Curriculum registry slice of the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurriculumState {
    /// Revision identifier of the curriculum in force (e.g., `"2022 rev."`).
    pub revision: Option<String>,
    /// Whether the regulator has formally noted this revision.
    pub noted_by_regulator: bool,
    /// Reference to the curriculum document, if uploaded.
    pub reference_document: Option<String>,
}

// ─── Outcomes ────────────────────────────────────────────────────────

/// Academic term within a year. `Ord` follows chronological order within an
/// academic year, which is what "chronologically sorted" means for the
/// `(year, term)` trend key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// First semester.
    First,
    /// Second semester.
    Second,
    /// Summer/midyear term.
    Summer,
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::First => "1st Semester",
            Self::Second => "2nd Semester",
            Self::Summer => "Summer",
        };
        f.write_str(s)
    }
}

/// Graduates produced in one `(year, term)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationRecord {
    /// Calendar year of graduation.
    pub year: u16,
    /// Term of graduation.
    pub term: Term,
    /// Number of graduates.
    pub graduate_count: u32,
}

/// Tracer-study results for one `(year, term)` cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracerRecord {
    /// Calendar year of the traced cohort.
    pub year: u16,
    /// Term of the traced cohort.
    pub term: Term,
    /// Cohort size.
    pub total_graduates: u32,
    /// Graduates the tracer study reached.
    pub traced_count: u32,
    /// Employment rate among traced graduates, as a percentage.
    pub employment_rate: f64,
}

/// Licensure-exam results for one examination period.
///
/// The three `*_pass_rate` fields are derived percentages. Storage copies
/// are not trusted: [`LicensureExamRecord::recomputed`] re-derives them from
/// the raw counts on every read, so stale stored values self-correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicensureExamRecord {
    /// Examination period label (e.g., `"May 2024"`). Insertion order of
    /// records defines recency; there is no date parse of this label.
    pub exam_period: String,
    /// First-time takers.
    pub first_taker_count: u32,
    /// First-time takers who passed.
    pub first_taker_passed: u32,
    /// Repeat takers.
    pub retaker_count: u32,
    /// Repeat takers who passed.
    pub retaker_passed: u32,
    /// National pass rate for the same period, as a percentage.
    pub national_pass_rate: f64,
    /// Derived: first-taker pass percentage.
    pub first_taker_pass_rate: f64,
    /// Derived: retaker pass percentage.
    pub retaker_pass_rate: f64,
    /// Derived: overall pass percentage across both taker groups.
    pub overall_pass_rate: f64,
}

impl LicensureExamRecord {
    /// Return a copy with the three derived pass rates re-derived from the
    /// raw counts.
    ///
    /// Each rate is `passed / total × 100`, rounded half-up to 2 decimals,
    /// and 0.0 whenever the denominator is 0 — never NaN.
    pub fn recomputed(&self) -> Self {
        let mut rec = self.clone();
        rec.first_taker_pass_rate = pass_rate(self.first_taker_passed, self.first_taker_count);
        rec.retaker_pass_rate = pass_rate(self.retaker_passed, self.retaker_count);
        rec.overall_pass_rate = pass_rate(
            self.first_taker_passed + self.retaker_passed,
            self.first_taker_count + self.retaker_count,
        );
        rec
    }
}

/// `passed / total` as a percentage rounded to 2 decimals; 0.0 when
/// `total == 0`.
fn pass_rate(passed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(f64::from(passed) / f64::from(total) * 100.0)
}

/// Round half-up to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ─── Specialization Catalog ──────────────────────────────────────────

/// A named specialization track offered by the program.
///
/// The catalog is maintained separately from any one record and supplied
/// alongside it at analysis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationTrack {
    /// Track identifier, matched exactly against member assignments.
    pub id: SpecializationId,
    /// Human-readable track name.
    pub name: String,
}

// ─── Compliance Record ───────────────────────────────────────────────

/// A fully-assembled compliance snapshot for one program in one academic
/// year.
///
/// Assembled by the persistence layer whenever any compliance module is
/// edited; the analytics engine reads it whole and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// Record identity assigned by the persistence layer.
    pub record_id: RecordId,
    /// The program this record belongs to.
    pub program_id: ProgramId,
    /// The academic year this record covers.
    pub academic_year: AcademicYear,
    /// Government certification slice.
    pub regulatory: RegulatoryCompliance,
    /// Ordered accreditation history, oldest first.
    pub accreditation_milestones: Vec<AccreditationMilestone>,
    /// Faculty roster.
    pub faculty_roster: FacultyRoster,
    /// Curriculum registry slice.
    pub curriculum: CurriculumState,
    /// Graduation counts per `(year, term)`.
    pub graduation_records: Vec<GraduationRecord>,
    /// Tracer-study results per `(year, term)`.
    pub tracer_records: Vec<TracerRecord>,
    /// Licensure-exam results, oldest first (insertion order is recency).
    pub licensure_exam_records: Vec<LicensureExamRecord>,
}

impl ComplianceRecord {
    /// Create an empty record for a program and academic year.
    ///
    /// Every compliance slice starts at its safe default: not certified, no
    /// milestones, blank roster, blank curriculum, no outcome data.
    pub fn new(record_id: RecordId, program_id: ProgramId, academic_year: AcademicYear) -> Self {
        Self {
            record_id,
            program_id,
            academic_year,
            regulatory: RegulatoryCompliance::default(),
            accreditation_milestones: Vec::new(),
            faculty_roster: FacultyRoster::default(),
            curriculum: CurriculumState::default(),
            graduation_records: Vec::new(),
            tracer_records: Vec::new(),
            licensure_exam_records: Vec::new(),
        }
    }

    /// The most recent accreditation milestone, if any exist.
    pub fn latest_milestone(&self) -> Option<&AccreditationMilestone> {
        self.accreditation_milestones.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam(ft: u32, ftp: u32, rt: u32, rtp: u32) -> LicensureExamRecord {
        LicensureExamRecord {
            exam_period: "May 2024".to_string(),
            first_taker_count: ft,
            first_taker_passed: ftp,
            retaker_count: rt,
            retaker_passed: rtp,
            national_pass_rate: 0.0,
            first_taker_pass_rate: 0.0,
            retaker_pass_rate: 0.0,
            overall_pass_rate: 0.0,
        }
    }

    // ── Derived rate recomputation ───────────────────────────────────

    #[test]
    fn test_recomputed_rates() {
        let rec = exam(50, 40, 10, 4).recomputed();
        assert_eq!(rec.first_taker_pass_rate, 80.0);
        assert_eq!(rec.retaker_pass_rate, 40.0);
        assert_eq!(rec.overall_pass_rate, 73.33);
    }

    #[test]
    fn test_recomputed_zero_denominators() {
        let rec = exam(0, 0, 0, 0).recomputed();
        assert_eq!(rec.first_taker_pass_rate, 0.0);
        assert_eq!(rec.retaker_pass_rate, 0.0);
        assert_eq!(rec.overall_pass_rate, 0.0);
    }

    #[test]
    fn test_recomputed_overrides_stale_storage() {
        let mut stale = exam(100, 50, 0, 0);
        stale.first_taker_pass_rate = 99.0;
        stale.overall_pass_rate = 99.0;
        let rec = stale.recomputed();
        assert_eq!(rec.first_taker_pass_rate, 50.0);
        assert_eq!(rec.overall_pass_rate, 50.0);
    }

    #[test]
    fn test_round2_half_up() {
        // Exactly-representable midpoints round up, not to even.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(73.334), 73.33);
        assert_eq!(round2(0.005), 0.01);
    }

    // ── Sentinel handling ────────────────────────────────────────────

    #[test]
    fn test_grants_accreditation() {
        let real = AccreditationMilestone {
            level: "Level II Re-accredited".to_string(),
            lifecycle: MilestoneLifecycle::Current,
            certificate: None,
        };
        assert!(real.grants_accreditation());

        let sentinel = AccreditationMilestone {
            level: NON_ACCREDITED_LEVEL.to_string(),
            lifecycle: MilestoneLifecycle::Current,
            certificate: None,
        };
        assert!(!sentinel.grants_accreditation());

        let blank = AccreditationMilestone {
            level: "   ".to_string(),
            lifecycle: MilestoneLifecycle::ToBeAssigned,
            certificate: None,
        };
        assert!(!blank.grants_accreditation());
    }

    // ── Roster iteration ─────────────────────────────────────────────

    #[test]
    fn test_roster_leadership_presence() {
        let roster = FacultyRoster {
            dean: Some(FacultyMember::new("Dean A", AlignmentTag::Aligned)),
            associate_dean: None,
            program_chair: Some(FacultyMember::new("Chair B", AlignmentTag::NotAligned)),
            members: vec![FacultyMember::new("Member C", AlignmentTag::Aligned)],
        };
        assert_eq!(roster.leadership().count(), 2);
        assert_eq!(roster.everyone().count(), 3);

        let blank = FacultyRoster::default();
        assert_eq!(blank.everyone().count(), 0);
    }

    // ── Term ordering ────────────────────────────────────────────────

    #[test]
    fn test_term_chronological_order() {
        assert!(Term::First < Term::Second);
        assert!(Term::Second < Term::Summer);
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_record_serde_roundtrip() {
        let record = ComplianceRecord::new(
            crate::identity::RecordId::new(),
            crate::identity::ProgramId::new("bs-architecture").unwrap(),
            crate::identity::AcademicYear::parse("2024-2025").unwrap(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ComplianceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RegulatoryStatus::WithCertificate.to_string(), "WITH_CERTIFICATE");
        assert_eq!(MilestoneLifecycle::Undergoing.to_string(), "UNDERGOING");
        assert_eq!(Term::First.to_string(), "1st Semester");
    }
}
