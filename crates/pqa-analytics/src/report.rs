//! # Maturity Report
//!
//! The single assembled artifact the engine hands to the presentation
//! layer. No partial results are exposed — the composer either produces a
//! whole report or (for a completely empty record) the well-defined
//! all-zero, all-gaps report. It carries no identity or versioning; every
//! call produces a fresh value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pqa_core::Pillar;

use crate::faculty::{CoverageStatus, FacultyAlignment};
use crate::gaps::GapFinding;
use crate::outcomes::OutcomeSummary;

/// Dashboard band for the overall maturity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityBand {
    /// Index 0–39.
    Emerging,
    /// Index 40–69.
    Developing,
    /// Index 70–89.
    Established,
    /// Index 90–100.
    Mature,
}

impl MaturityBand {
    /// Band for an overall score in `[0, 100]`.
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=39 => Self::Emerging,
            40..=69 => Self::Developing,
            70..=89 => Self::Established,
            _ => Self::Mature,
        }
    }
}

impl std::fmt::Display for MaturityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Mature => "Mature",
        };
        f.write_str(s)
    }
}

/// The assembled analytics result for one compliance record.
///
/// All mappings are `BTreeMap`, so serialization order is deterministic —
/// two calls on an identical record produce byte-for-byte identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityReport {
    /// Weighted maturity index in `[0, 100]`: the five pillar scores
    /// summed and rounded half-up to the nearest integer.
    pub overall_score: u8,
    /// Presentation band for the overall index.
    pub band: MaturityBand,
    /// Per-pillar scores, each in `[0, 20]`, keyed in canonical order.
    pub pillar_scores: BTreeMap<Pillar, f64>,
    /// Faculty alignment statistics and specialization partition.
    pub faculty: FacultyAlignment,
    /// Per-bucket coverage derived from the faculty partition.
    pub specialization_coverage: BTreeMap<String, CoverageStatus>,
    /// Outcome trend series and latest licensure snapshot.
    pub outcomes: OutcomeSummary,
    /// Gap findings in fixed rule order.
    pub gaps: Vec<GapFinding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(MaturityBand::for_score(0), MaturityBand::Emerging);
        assert_eq!(MaturityBand::for_score(39), MaturityBand::Emerging);
        assert_eq!(MaturityBand::for_score(40), MaturityBand::Developing);
        assert_eq!(MaturityBand::for_score(69), MaturityBand::Developing);
        assert_eq!(MaturityBand::for_score(70), MaturityBand::Established);
        assert_eq!(MaturityBand::for_score(89), MaturityBand::Established);
        assert_eq!(MaturityBand::for_score(90), MaturityBand::Mature);
        assert_eq!(MaturityBand::for_score(100), MaturityBand::Mature);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(MaturityBand::Emerging.to_string(), "Emerging");
        assert_eq!(MaturityBand::Mature.to_string(), "Mature");
    }
}
