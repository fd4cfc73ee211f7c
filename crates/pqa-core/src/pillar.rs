//! # Compliance Pillar — Single Source of Truth
//!
//! Defines the `Pillar` enum with all five maturity pillars. This is the ONE
//! definition used across the entire stack. Every `match` on `Pillar` must be
//! exhaustive — adding a new pillar forces every consumer to handle it at
//! compile time.
//!
//! ## Invariant
//!
//! A single enum prevents the pillar mismatch defect class where the scoring
//! engine and the dashboard each carry their own pillar list and silently
//! disagree. Rust's exhaustive match requirement makes silent pillar omission
//! impossible.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PqaError;

/// The five compliance maturity pillars.
///
/// Each pillar is an independent compliance dimension scored out of
/// [`PILLAR_WEIGHT`]; the overall maturity index is the sum over all five,
/// in `[0, 100]`.
///
/// Variant order is the canonical presentation order. `Ord` follows variant
/// order, so a `BTreeMap<Pillar, _>` iterates pillars canonically.
///
/// # Pillars
///
/// | # | Pillar | Scored from |
/// |---|--------|-------------|
/// | 1 | Regulatory | Certification status |
/// | 2 | Accreditation | Latest accreditation milestone |
/// | 3 | Faculty | Qualification alignment rate |
/// | 4 | Curriculum | Regulator notation + reference document |
/// | 5 | Outcomes | Presence of graduation/tracer data |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    /// Regulatory certification (government permit/certificate status).
    Regulatory,
    /// Accreditation standing (milestone level reached).
    Accreditation,
    /// Faculty qualification alignment.
    Faculty,
    /// Curriculum currency (regulator-noted revision with reference document).
    Curriculum,
    /// Program outcomes (graduation and tracer evidence).
    Outcomes,
}

/// Total number of maturity pillars. Used for compile-time assertions.
pub const PILLAR_COUNT: usize = 5;

/// Maximum score of a single pillar. All five pillars are weighted equally,
/// so the composed maturity index tops out at `PILLAR_COUNT × PILLAR_WEIGHT`.
pub const PILLAR_WEIGHT: f64 = 20.0;

impl Pillar {
    /// Returns all five pillars in canonical order.
    pub fn all_pillars() -> &'static [Pillar] {
        &[
            Self::Regulatory,
            Self::Accreditation,
            Self::Faculty,
            Self::Curriculum,
            Self::Outcomes,
        ]
    }

    /// Returns the snake_case string identifier for this pillar.
    ///
    /// This must match the serde serialization format — the dashboard keys
    /// its pillar widgets by these identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regulatory => "regulatory",
            Self::Accreditation => "accreditation",
            Self::Faculty => "faculty",
            Self::Curriculum => "curriculum",
            Self::Outcomes => "outcomes",
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = PqaError;

    /// Parse a pillar from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`Pillar::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regulatory" => Ok(Self::Regulatory),
            "accreditation" => Ok(Self::Accreditation),
            "faculty" => Ok(Self::Faculty),
            "curriculum" => Ok(Self::Curriculum),
            "outcomes" => Ok(Self::Outcomes),
            other => Err(PqaError::Parse(format!("unknown pillar: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pillars_count() {
        assert_eq!(Pillar::all_pillars().len(), PILLAR_COUNT);
        assert_eq!(Pillar::all_pillars().len(), 5);
    }

    #[test]
    fn test_all_pillars_unique() {
        let pillars = Pillar::all_pillars();
        let mut seen = std::collections::HashSet::new();
        for p in pillars {
            assert!(seen.insert(p), "Duplicate pillar: {p}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for pillar in Pillar::all_pillars() {
            let s = pillar.as_str();
            let parsed: Pillar = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*pillar, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("nonexistent".parse::<Pillar>().is_err());
        assert!("Regulatory".parse::<Pillar>().is_err()); // case-sensitive
        assert!("".parse::<Pillar>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for pillar in Pillar::all_pillars() {
            let json = serde_json::to_string(pillar).unwrap();
            let expected = format!("\"{}\"", pillar.as_str());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn test_ord_follows_canonical_order() {
        let pillars = Pillar::all_pillars();
        for window in pillars.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_exhaustive_match_compiles() {
        // This test ensures that adding a new pillar variant causes a
        // compile error here, forcing the developer to update all match arms.
        fn pillar_description(p: &Pillar) -> &'static str {
            match p {
                Pillar::Regulatory => "Regulatory certification",
                Pillar::Accreditation => "Accreditation standing",
                Pillar::Faculty => "Faculty alignment",
                Pillar::Curriculum => "Curriculum currency",
                Pillar::Outcomes => "Program outcomes",
            }
        }
        for p in Pillar::all_pillars() {
            assert!(!pillar_description(p).is_empty());
        }
    }
}
