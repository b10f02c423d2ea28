//! Aggregation engine: attendance summaries, dashboard KPIs, and the
//! per-organization frequency report.
//!
//! Everything here is a pure computation over rows already fetched from the
//! store; persistence of the results is the repository's job.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{
    ActionItem, ActionStatus, AttendanceRecord, ComplianceItem, Meeting, TrainingSession,
    TrainingStatus,
};

/// Round to two decimal places, the precision attendance and compliance
/// percentages are stored and reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Minimum present count for a meeting to be procedurally valid:
/// majority of the expected count, rounded up.
pub fn quorum_threshold(expected_count: i64) -> i64 {
    (expected_count + 1) / 2
}

/// Derived attendance fields of a meeting, computed from a present count
/// and the meeting's expected count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub present_count: i64,
    pub expected_count: i64,
    pub attendance_rate: f64,
    pub quorum_reached: bool,
}

impl AttendanceSummary {
    /// An expected count of zero yields a 0.00 rate and no quorum rather
    /// than a division by zero or a vacuously reached quorum.
    pub fn compute(present_count: i64, expected_count: i64) -> Self {
        let (attendance_rate, quorum_reached) = if expected_count > 0 {
            (
                round2(present_count as f64 / expected_count as f64 * 100.0),
                present_count >= quorum_threshold(expected_count),
            )
        } else {
            (0.0, false)
        };
        Self {
            present_count,
            expected_count,
            attendance_rate,
            quorum_reached,
        }
    }

    /// Summary for a fresh entry set against a meeting's expected count.
    pub fn from_marks(present_flags: impl IntoIterator<Item = bool>, expected_count: i64) -> Self {
        let present_count = present_flags.into_iter().filter(|p| *p).count() as i64;
        Self::compute(present_count, expected_count)
    }
}

/// System-wide summary numbers for the executive dashboard. Recomputed on
/// demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardKpis {
    /// Mean of the meetings' stored attendance rates, two decimals.
    pub overall_attendance_rate: f64,
    pub actions_in_progress: u64,
    pub trainings_held: u64,
    /// Mean of compliance item progress, two decimals.
    pub overall_compliance: f64,
}

pub fn compute_kpis(
    meetings: &[Meeting],
    actions: &[ActionItem],
    trainings: &[TrainingSession],
    compliance: &[ComplianceItem],
) -> DashboardKpis {
    let overall_attendance_rate = if meetings.is_empty() {
        0.0
    } else {
        round2(meetings.iter().map(|m| m.attendance_rate).sum::<f64>() / meetings.len() as f64)
    };

    let actions_in_progress = actions
        .iter()
        .filter(|a| a.status == ActionStatus::InProgress)
        .count() as u64;

    let trainings_held = trainings
        .iter()
        .filter(|t| t.status == TrainingStatus::Held)
        .count() as u64;

    let overall_compliance = if compliance.is_empty() {
        0.0
    } else {
        round2(compliance.iter().map(|c| c.progress as f64).sum::<f64>() / compliance.len() as f64)
    };

    DashboardKpis {
        overall_attendance_rate,
        actions_in_progress,
        trainings_held,
        overall_compliance,
    }
}

/// Lifetime attendance tally for one organization. Only organizations with
/// at least one attendance record appear in a report; callers reconcile
/// against the full roster when zero-filling is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrganizationTally {
    pub organization_id: i64,
    pub presences: u64,
    pub recorded: u64,
}

/// One point of the attendance-rate trend line, projected straight from a
/// meeting row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    pub by_organization: Vec<OrganizationTally>,
    pub rate_series: Vec<RatePoint>,
}

pub fn frequency_report(records: &[AttendanceRecord], meetings: &[Meeting]) -> FrequencyReport {
    let mut tallies: BTreeMap<i64, OrganizationTally> = BTreeMap::new();
    for record in records {
        let tally = tallies
            .entry(record.organization_id)
            .or_insert(OrganizationTally {
                organization_id: record.organization_id,
                presences: 0,
                recorded: 0,
            });
        tally.recorded += 1;
        if record.present {
            tally.presences += 1;
        }
    }

    let mut rate_series: Vec<RatePoint> = meetings
        .iter()
        .map(|m| RatePoint {
            date: m.date,
            attendance_rate: m.attendance_rate,
        })
        .collect();
    rate_series.sort_by_key(|p| p.date);

    FrequencyReport {
        by_organization: tallies.into_values().collect(),
        rate_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MeetingKind, RepresentativeKind, SessionFormat};
    use chrono::Utc;

    fn meeting(id: i64, date: &str, rate: f64) -> Meeting {
        let now = Utc::now();
        Meeting {
            id,
            number: id,
            date: date.parse().unwrap(),
            kind: MeetingKind::Ordinary,
            venue: None,
            format: SessionFormat::InPerson,
            agenda: None,
            minutes: None,
            expected_count: 11,
            present_count: 0,
            attendance_rate: rate,
            quorum_reached: false,
            created: now,
            updated: now,
        }
    }

    fn record(meeting_id: i64, organization_id: i64, present: bool) -> AttendanceRecord {
        let now = Utc::now();
        AttendanceRecord {
            id: 0,
            meeting_id,
            organization_id,
            present,
            representative: RepresentativeKind::Primary,
            justification: None,
            created: now,
            updated: now,
        }
    }

    #[test]
    fn test_eight_of_eleven_reaches_quorum() {
        let summary = AttendanceSummary::compute(8, 11);
        assert_eq!(summary.attendance_rate, 72.73);
        assert!(summary.quorum_reached);
    }

    #[test]
    fn test_five_of_eleven_misses_quorum() {
        let summary = AttendanceSummary::compute(5, 11);
        assert_eq!(summary.attendance_rate, 45.45);
        assert!(!summary.quorum_reached);
    }

    #[test]
    fn test_quorum_threshold_rounds_up() {
        assert_eq!(quorum_threshold(11), 6);
        assert_eq!(quorum_threshold(10), 5);
        assert_eq!(quorum_threshold(1), 1);
    }

    #[test]
    fn test_quorum_boundary_exact() {
        assert!(AttendanceSummary::compute(6, 11).quorum_reached);
        assert!(!AttendanceSummary::compute(5, 11).quorum_reached);
        assert!(AttendanceSummary::compute(5, 10).quorum_reached);
    }

    #[test]
    fn test_full_and_empty_attendance() {
        let full = AttendanceSummary::compute(11, 11);
        assert_eq!(full.attendance_rate, 100.0);
        assert!(full.quorum_reached);

        let empty = AttendanceSummary::compute(0, 11);
        assert_eq!(empty.attendance_rate, 0.0);
        assert!(!empty.quorum_reached);
    }

    #[test]
    fn test_zero_expected_count() {
        let summary = AttendanceSummary::compute(0, 0);
        assert_eq!(summary.attendance_rate, 0.0);
        assert!(!summary.quorum_reached);
    }

    #[test]
    fn test_from_marks_counts_present_flags() {
        let marks = [true, true, false, true, false];
        let summary = AttendanceSummary::from_marks(marks, 5);
        assert_eq!(summary.present_count, 3);
        assert_eq!(summary.attendance_rate, 60.0);
        assert!(summary.quorum_reached);
    }

    #[test]
    fn test_kpis_over_empty_collections() {
        let kpis = compute_kpis(&[], &[], &[], &[]);
        assert_eq!(kpis.overall_attendance_rate, 0.0);
        assert_eq!(kpis.actions_in_progress, 0);
        assert_eq!(kpis.trainings_held, 0);
        assert_eq!(kpis.overall_compliance, 0.0);
    }

    #[test]
    fn test_overall_rate_is_mean_of_stored_rates() {
        // Stored rates are used as-is, not recomputed from raw rows.
        let meetings = vec![
            meeting(1, "2025-02-10", 72.73),
            meeting(2, "2025-03-10", 45.45),
            meeting(3, "2025-04-14", 100.0),
        ];
        let kpis = compute_kpis(&meetings, &[], &[], &[]);
        assert_eq!(kpis.overall_attendance_rate, round2((72.73 + 45.45 + 100.0) / 3.0));
    }

    #[test]
    fn test_frequency_tally_two_of_three() {
        let records = vec![record(1, 4, true), record(2, 4, true), record(3, 4, false)];
        let report = frequency_report(&records, &[]);
        assert_eq!(report.by_organization.len(), 1);
        let tally = &report.by_organization[0];
        assert_eq!(tally.organization_id, 4);
        assert_eq!(tally.presences, 2);
        assert_eq!(tally.recorded, 3);
    }

    #[test]
    fn test_frequency_skips_unrecorded_organizations() {
        let records = vec![record(1, 2, true)];
        let report = frequency_report(&records, &[]);
        assert_eq!(report.by_organization.len(), 1);
        assert!(
            report
                .by_organization
                .iter()
                .all(|t| t.organization_id == 2)
        );
    }

    #[test]
    fn test_rate_series_ascending_by_date() {
        let meetings = vec![
            meeting(2, "2025-03-10", 45.45),
            meeting(1, "2025-02-10", 72.73),
            meeting(3, "2025-04-14", 90.91),
        ];
        let report = frequency_report(&[], &meetings);
        let dates: Vec<String> = report
            .rate_series
            .iter()
            .map(|p| p.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-02-10", "2025-03-10", "2025-04-14"]);
        assert_eq!(report.rate_series[0].attendance_rate, 72.73);
    }
}
