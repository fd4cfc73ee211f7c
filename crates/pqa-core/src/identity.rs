//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the PQA stack. These
//! prevent accidental identifier confusion — you cannot pass a `ProgramId`
//! where a `SpecializationId` is expected.
//!
//! String-backed identifiers use validated constructors: no bare strings
//! for identifiers, and no way to construct an empty one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PqaError;

/// Unique identifier for a compliance record (one per program per academic year).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generate a new random record identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record:{}", self.0)
    }
}

/// Identifier for an academic program (e.g., `"bs-architecture"`).
///
/// Trimmed and lowercased at construction; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(String);

impl ProgramId {
    /// Create a program identifier, normalizing to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`PqaError::InvalidIdentifier`] if the input is empty or
    /// whitespace-only.
    pub fn new(raw: &str) -> Result<Self, PqaError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(PqaError::InvalidIdentifier(
                "program id must be non-empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// Access the normalized identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a specialization track within a program's catalog.
///
/// Trimmed at construction; never empty. Case is preserved — catalog entries
/// are matched exactly, and an assignment that no longer matches any catalog
/// entry collapses into the General bucket downstream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpecializationId(String);

impl SpecializationId {
    /// Create a specialization identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PqaError::InvalidIdentifier`] if the input is empty or
    /// whitespace-only.
    pub fn new(raw: &str) -> Result<Self, PqaError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PqaError::InvalidIdentifier(
                "specialization id must be non-empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpecializationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated academic year span in `YYYY-YYYY` form (e.g., `"2024-2025"`).
///
/// The two years must be consecutive. This is the record's temporal key —
/// the portal files one compliance record per program per academic year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AcademicYear(String);

impl AcademicYear {
    /// Parse an academic year from `YYYY-YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns [`PqaError::Validation`] if the input is not two dash-separated
    /// four-digit years, or the years are not consecutive.
    pub fn parse(raw: &str) -> Result<Self, PqaError> {
        let s = raw.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            PqaError::Validation(format!("academic year must be YYYY-YYYY, got: {s:?}"))
        })?;
        if start.len() != 4 || end.len() != 4 {
            return Err(PqaError::Validation(format!(
                "academic year must use four-digit years, got: {s:?}"
            )));
        }
        let start_year: u16 = start
            .parse()
            .map_err(|_| PqaError::Validation(format!("invalid start year in {s:?}")))?;
        let end_year: u16 = end
            .parse()
            .map_err(|_| PqaError::Validation(format!("invalid end year in {s:?}")))?;
        if end_year != start_year + 1 {
            return Err(PqaError::Validation(format!(
                "academic year must span consecutive years, got: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The first calendar year of the span.
    pub fn start_year(&self) -> u16 {
        // Validated at construction; the first four chars are digits.
        self.0[..4].parse().unwrap_or(0)
    }

    /// Access the `YYYY-YYYY` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_unique() {
        assert_ne!(RecordId::new(), RecordId::new());
    }

    #[test]
    fn test_program_id_normalizes() {
        let id = ProgramId::new("  BS-Architecture ").unwrap();
        assert_eq!(id.as_str(), "bs-architecture");
    }

    #[test]
    fn test_program_id_rejects_empty() {
        assert!(ProgramId::new("").is_err());
        assert!(ProgramId::new("   ").is_err());
    }

    #[test]
    fn test_specialization_id_preserves_case() {
        let id = SpecializationId::new(" Structural Design ").unwrap();
        assert_eq!(id.as_str(), "Structural Design");
    }

    #[test]
    fn test_academic_year_parse() {
        let ay = AcademicYear::parse("2024-2025").unwrap();
        assert_eq!(ay.as_str(), "2024-2025");
        assert_eq!(ay.start_year(), 2024);
    }

    #[test]
    fn test_academic_year_rejects_malformed() {
        assert!(AcademicYear::parse("2024").is_err());
        assert!(AcademicYear::parse("2024-2026").is_err());
        assert!(AcademicYear::parse("24-25").is_err());
        assert!(AcademicYear::parse("abcd-efgh").is_err());
    }

    #[test]
    fn test_display_forms() {
        let id = ProgramId::new("bsn").unwrap();
        assert_eq!(id.to_string(), "bsn");
        let ay = AcademicYear::parse("2023-2024").unwrap();
        assert_eq!(ay.to_string(), "2023-2024");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ProgramId::new("bs-accountancy").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ProgramId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
