//! # Outcome Aggregator
//!
//! Reduces graduation, tracer-study, and licensure-exam records into the
//! trend series and snapshots the dashboard charts.
//!
//! ## Recompute, don't trust
//!
//! Licensure records carry stored pass rates, but stored derived values are
//! never reported as-is: every entry is re-derived from its raw counts via
//! [`LicensureExamRecord::recomputed`] before it leaves this module, so
//! stale storage self-corrects on every read.

use serde::{Deserialize, Serialize};

use pqa_core::{ComplianceRecord, LicensureExamRecord, Term};

/// One point in the graduation/employment trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar year of the cohort.
    pub year: u16,
    /// Term of the cohort.
    pub term: Term,
    /// Graduates in that `(year, term)`.
    pub graduates: u32,
    /// Employment rate from the matching tracer record, as a percentage;
    /// 0.0 when no tracer record matches the `(year, term)`.
    pub employment_rate: f64,
}

/// Aggregated outcome data for one compliance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Graduation/employment trend, chronologically sorted by `(year, term)`.
    /// One point per graduation record.
    pub trend: Vec<TrendPoint>,
    /// Every licensure entry with pass rates re-derived from raw counts,
    /// in input order. The dashboard charts this series against the
    /// national pass rate.
    pub licensure_history: Vec<LicensureExamRecord>,
    /// The most recent licensure entry (last in input order — insertion
    /// order defines recency, there is no date parse of the period label).
    pub latest_licensure: Option<LicensureExamRecord>,
}

/// Aggregate a record's outcome data. Pure read.
pub fn aggregate_outcomes(record: &ComplianceRecord) -> OutcomeSummary {
    let mut trend: Vec<TrendPoint> = record
        .graduation_records
        .iter()
        .map(|grad| {
            let employment_rate = record
                .tracer_records
                .iter()
                .find(|t| t.year == grad.year && t.term == grad.term)
                .map_or(0.0, |t| t.employment_rate);
            TrendPoint {
                year: grad.year,
                term: grad.term,
                graduates: grad.graduate_count,
                employment_rate,
            }
        })
        .collect();
    // Stable sort: duplicate (year, term) rows keep their input order.
    trend.sort_by_key(|point| (point.year, point.term));

    let licensure_history: Vec<LicensureExamRecord> = record
        .licensure_exam_records
        .iter()
        .map(LicensureExamRecord::recomputed)
        .collect();
    let latest_licensure = licensure_history.last().cloned();

    OutcomeSummary {
        trend,
        licensure_history,
        latest_licensure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqa_core::{AcademicYear, GraduationRecord, ProgramId, RecordId, TracerRecord};

    fn record_with_outcomes() -> ComplianceRecord {
        let mut record = ComplianceRecord::new(
            RecordId::new(),
            ProgramId::new("bs-accountancy").unwrap(),
            AcademicYear::parse("2024-2025").unwrap(),
        );
        record.graduation_records = vec![
            GraduationRecord { year: 2024, term: Term::Second, graduate_count: 85 },
            GraduationRecord { year: 2023, term: Term::Second, graduate_count: 70 },
            GraduationRecord { year: 2024, term: Term::First, graduate_count: 12 },
        ];
        record.tracer_records = vec![TracerRecord {
            year: 2023,
            term: Term::Second,
            total_graduates: 70,
            traced_count: 55,
            employment_rate: 87.5,
        }];
        record
    }

    #[test]
    fn test_trend_sorted_chronologically() {
        let summary = aggregate_outcomes(&record_with_outcomes());
        let keys: Vec<(u16, Term)> = summary.trend.iter().map(|p| (p.year, p.term)).collect();
        assert_eq!(
            keys,
            vec![(2023, Term::Second), (2024, Term::First), (2024, Term::Second)]
        );
    }

    #[test]
    fn test_trend_joins_tracer_by_year_and_term() {
        let summary = aggregate_outcomes(&record_with_outcomes());
        assert_eq!(summary.trend[0].employment_rate, 87.5);
        // No tracer match defaults to 0.0, not an error.
        assert_eq!(summary.trend[1].employment_rate, 0.0);
        assert_eq!(summary.trend[2].employment_rate, 0.0);
    }

    #[test]
    fn test_empty_record_yields_empty_summary() {
        let record = ComplianceRecord::new(
            RecordId::new(),
            ProgramId::new("bsn").unwrap(),
            AcademicYear::parse("2024-2025").unwrap(),
        );
        let summary = aggregate_outcomes(&record);
        assert!(summary.trend.is_empty());
        assert!(summary.licensure_history.is_empty());
        assert!(summary.latest_licensure.is_none());
    }

    #[test]
    fn test_latest_licensure_is_last_in_input_order() {
        let mut record = record_with_outcomes();
        let mut first = LicensureExamRecord {
            exam_period: "May 2023".to_string(),
            first_taker_count: 40,
            first_taker_passed: 30,
            retaker_count: 5,
            retaker_passed: 2,
            national_pass_rate: 60.0,
            first_taker_pass_rate: 0.0,
            retaker_pass_rate: 0.0,
            overall_pass_rate: 0.0,
        };
        let mut latest = first.clone();
        latest.exam_period = "May 2024".to_string();
        latest.first_taker_count = 50;
        latest.first_taker_passed = 40;
        latest.retaker_count = 10;
        latest.retaker_passed = 4;
        // Stale stored rates must be overwritten on read.
        first.first_taker_pass_rate = 1.0;
        latest.overall_pass_rate = 99.9;
        record.licensure_exam_records = vec![first, latest];

        let summary = aggregate_outcomes(&record);
        let snapshot = summary.latest_licensure.unwrap();
        assert_eq!(snapshot.exam_period, "May 2024");
        assert_eq!(snapshot.first_taker_pass_rate, 80.0);
        assert_eq!(snapshot.retaker_pass_rate, 40.0);
        assert_eq!(snapshot.overall_pass_rate, 73.33);

        assert_eq!(summary.licensure_history.len(), 2);
        assert_eq!(summary.licensure_history[0].first_taker_pass_rate, 75.0);
    }
}
