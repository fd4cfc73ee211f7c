//! # Faculty Alignment Analyzer
//!
//! Aggregates the faculty roster into qualification-alignment statistics and
//! partitions the open member list by specialization track.
//!
//! ## Invariant
//!
//! A member whose specialization assignment no longer matches the program's
//! catalog (a stale assignment to a removed track) collapses into the
//! reserved General bucket. Stale assignments are warned and kept, never
//! dropped and never an error — the analysis is total over any roster.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use pqa_core::{FacultyMember, FacultyRoster, SpecializationTrack, GENERAL_TRACK};

/// Whether a specialization bucket has at least one aligned member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// At least one aligned member teaches in this track.
    Covered,
    /// No aligned member in this track.
    Gap,
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Covered => "covered",
            Self::Gap => "gap",
        };
        f.write_str(s)
    }
}

/// Alignment statistics and specialization partition for one roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyAlignment {
    /// Every person on the roster: leadership entries that are present,
    /// plus all open members.
    pub total_count: u32,
    /// Roster entries tagged `Aligned`.
    pub aligned_count: u32,
    /// `aligned_count / total_count` as a fraction in `[0, 1]`;
    /// 0.0 for an empty roster.
    pub alignment_rate: f64,
    /// Open members partitioned by specialization track id, with the
    /// reserved [`GENERAL_TRACK`] bucket collecting unassigned and stale
    /// assignments. Every catalog track gets a bucket, even when empty.
    pub buckets: BTreeMap<String, Vec<FacultyMember>>,
}

impl FacultyAlignment {
    /// Per-bucket coverage: a bucket with at least one aligned member is
    /// covered; anything else (including an empty bucket) is a gap.
    pub fn coverage(&self) -> BTreeMap<String, CoverageStatus> {
        self.buckets
            .iter()
            .map(|(track, members)| {
                let covered = members.iter().any(|m| m.alignment.is_aligned());
                let status = if covered {
                    CoverageStatus::Covered
                } else {
                    CoverageStatus::Gap
                };
                (track.clone(), status)
            })
            .collect()
    }
}

/// Analyze a faculty roster against the program's specialization catalog.
///
/// Counts the dean and program chair whenever present, the associate dean
/// only where the record carries one (its presence is itself data), and
/// every open member. A person counts as aligned iff their tag is `Aligned`
/// — `NotApplicable` occupies a roster slot without counting either way.
///
/// Pure read: neither input is mutated, and two calls on identical inputs
/// produce identical output (the partition is a `BTreeMap`, so iteration
/// and serialization order are deterministic).
pub fn analyze_roster(
    roster: &FacultyRoster,
    catalog: &[SpecializationTrack],
) -> FacultyAlignment {
    let mut total_count = 0u32;
    let mut aligned_count = 0u32;
    for person in roster.everyone() {
        total_count += 1;
        if person.alignment.is_aligned() {
            aligned_count += 1;
        }
    }
    let alignment_rate = if total_count == 0 {
        0.0
    } else {
        f64::from(aligned_count) / f64::from(total_count)
    };

    let catalog_ids: BTreeSet<&str> = catalog.iter().map(|t| t.id.as_str()).collect();

    let mut buckets: BTreeMap<String, Vec<FacultyMember>> = BTreeMap::new();
    for track in catalog {
        buckets.entry(track.id.as_str().to_string()).or_default();
    }
    buckets.entry(GENERAL_TRACK.to_string()).or_default();

    for member in &roster.members {
        let bucket = match &member.specialization {
            Some(id) if catalog_ids.contains(id.as_str()) => id.as_str().to_string(),
            Some(id) => {
                tracing::warn!(
                    member = %member.name,
                    assignment = %id,
                    "specialization assignment not in catalog; collapsing into General"
                );
                GENERAL_TRACK.to_string()
            }
            None => GENERAL_TRACK.to_string(),
        };
        buckets.entry(bucket).or_default().push(member.clone());
    }

    FacultyAlignment {
        total_count,
        aligned_count,
        alignment_rate,
        buckets,
    }
}
