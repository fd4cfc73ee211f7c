//! # pqa-core — Foundational Types for the PQA Portal
//!
//! This crate is the bedrock of the Program Quality Assurance stack. It
//! defines the compliance record data model and the type-system primitives
//! that enforce correctness guarantees at compile time. Every other crate in
//! the workspace depends on `pqa-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ProgramId`,
//!    `SpecializationId`, `AcademicYear`, `RecordId` — all newtypes with
//!    validated constructors. No bare strings for identifiers.
//!
//! 2. **Single `Pillar` enum.** One definition, five variants, exhaustive
//!    `match` everywhere. Adding a pillar forces every consumer to handle it.
//!
//! 3. **Sentinels as named constants.** `NON_ACCREDITED_LEVEL` and
//!    `GENERAL_TRACK` are defined once; the "is this the sentinel" check is
//!    a single comparison behind a helper, never a scattered string literal.
//!
//! 4. **Derived values are recomputed, not trusted.** Stored pass rates on
//!    `LicensureExamRecord` are re-derived from the raw counts on every read.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pqa-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod pillar;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use error::PqaError;
pub use identity::{AcademicYear, ProgramId, RecordId, SpecializationId};
pub use pillar::{Pillar, PILLAR_COUNT, PILLAR_WEIGHT};
pub use record::{
    AccreditationMilestone, AlignmentTag, ComplianceRecord, CurriculumState, FacultyMember,
    FacultyRoster, GraduationRecord, LicensureExamRecord, MilestoneLifecycle,
    RegulatoryCompliance, RegulatoryStatus, SpecializationTrack, Term, TracerRecord,
    GENERAL_TRACK, NON_ACCREDITED_LEVEL,
};
