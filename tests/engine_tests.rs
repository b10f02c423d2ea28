//! Scenario tests for the aggregation engine against an in-memory store.

use plenum::error::PlenumError;
use plenum::model::{
    ActionStatus, AttendanceEntry, MeetingKind, NewActionItem, NewComplianceItem, NewMeeting,
    NewOrganization, NewTrainingSession, RepresentativeKind, SessionFormat, TrainingPatch,
    TrainingStatus,
};
use plenum::storage::{Repository, Store};

const ROSTER: [&str; 11] = [
    "SED", "INF", "FAZ", "PLA", "CUL", "SAU", "AGR", "MAM", "CTI", "ADM", "DES",
];

/// Repository over an in-memory store seeded with the 11-member roster of
/// the reference deployment.
fn seeded_repo() -> Repository {
    let repo = Repository::new(Store::open_in_memory().unwrap());
    for (i, code) in ROSTER.iter().enumerate() {
        repo.add_organization(&NewOrganization {
            code: code.to_string(),
            name: format!("Secretariat {code}"),
            rank: (i + 1) as i64,
        })
        .unwrap();
    }
    repo
}

fn create_meeting(repo: &Repository, number: i64, date: &str) -> i64 {
    repo.create_meeting(&NewMeeting {
        number,
        date: date.parse().unwrap(),
        kind: MeetingKind::Ordinary,
        venue: None,
        format: SessionFormat::InPerson,
        agenda: None,
        expected_count: None,
    })
    .unwrap()
    .id
}

/// Full-roster entry set with the first `present` organizations marked
/// present.
fn entries_with_present(repo: &Repository, present: usize) -> Vec<AttendanceEntry> {
    repo.organizations()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, org)| AttendanceEntry {
            organization_id: org.id,
            present: i < present,
            representative: RepresentativeKind::Primary,
        })
        .collect()
}

#[test]
fn eight_of_eleven_present_reaches_quorum() {
    let repo = seeded_repo();
    let meeting_id = create_meeting(&repo, 1, "2025-02-10");

    let meeting = repo
        .replace_attendance(meeting_id, &entries_with_present(&repo, 8))
        .unwrap();

    assert_eq!(meeting.expected_count, 11);
    assert_eq!(meeting.present_count, 8);
    assert_eq!(meeting.attendance_rate, 72.73);
    assert!(meeting.quorum_reached);
}

#[test]
fn five_of_eleven_present_misses_quorum() {
    let repo = seeded_repo();
    let meeting_id = create_meeting(&repo, 1, "2025-02-10");

    let meeting = repo
        .replace_attendance(meeting_id, &entries_with_present(&repo, 5))
        .unwrap();

    assert_eq!(meeting.attendance_rate, 45.45);
    assert!(!meeting.quorum_reached);
}

#[test]
fn replace_is_idempotent_no_residue() {
    let repo = seeded_repo();
    let meeting_id = create_meeting(&repo, 1, "2025-02-10");

    repo.replace_attendance(meeting_id, &entries_with_present(&repo, 8))
        .unwrap();
    let second: Vec<AttendanceEntry> = repo
        .organizations()
        .unwrap()
        .iter()
        .map(|org| AttendanceEntry {
            organization_id: org.id,
            present: org.code == "CUL",
            representative: RepresentativeKind::Alternate,
        })
        .collect();
    repo.replace_attendance(meeting_id, &second).unwrap();

    let records = repo.attendance_for_meeting(meeting_id).unwrap();
    assert_eq!(records.len(), 11);
    assert_eq!(records.iter().filter(|r| r.present).count(), 1);
    assert!(
        records
            .iter()
            .all(|r| r.representative == RepresentativeKind::Alternate)
    );

    let meeting = repo.meeting(meeting_id).unwrap();
    assert_eq!(meeting.present_count, 1);
    assert_eq!(meeting.attendance_rate, 9.09);
    assert!(!meeting.quorum_reached);
}

#[test]
fn register_for_missing_meeting_is_not_found() {
    let repo = seeded_repo();
    let err = repo
        .replace_attendance(42, &entries_with_present(&repo, 3))
        .unwrap_err();
    assert!(matches!(err, PlenumError::NotFound(_)));
}

#[test]
fn partial_roster_is_a_validation_error() {
    let repo = seeded_repo();
    let meeting_id = create_meeting(&repo, 1, "2025-02-10");

    let mut entries = entries_with_present(&repo, 3);
    entries.truncate(9);
    let err = repo.replace_attendance(meeting_id, &entries).unwrap_err();
    assert!(matches!(err, PlenumError::Validation(_)));

    // Nothing was written: the meeting still has no attendance
    assert!(repo.attendance_for_meeting(meeting_id).unwrap().is_empty());
}

#[test]
fn deleting_meeting_removes_attendance_rows() {
    let repo = seeded_repo();
    let meeting_id = create_meeting(&repo, 1, "2025-02-10");
    repo.replace_attendance(meeting_id, &entries_with_present(&repo, 8))
        .unwrap();

    repo.delete_meeting(meeting_id).unwrap();

    assert!(matches!(
        repo.meeting(meeting_id).unwrap_err(),
        PlenumError::NotFound(_)
    ));
    let orphans: i64 = repo
        .store()
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM attendance WHERE meeting_id = ?1",
            [meeting_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn kpis_over_empty_store_are_zero() {
    let repo = seeded_repo();
    let kpis = repo.dashboard_kpis().unwrap();
    assert_eq!(kpis.overall_attendance_rate, 0.0);
    assert_eq!(kpis.actions_in_progress, 0);
    assert_eq!(kpis.trainings_held, 0);
    assert_eq!(kpis.overall_compliance, 0.0);
}

#[test]
fn kpis_aggregate_all_four_collections() {
    let repo = seeded_repo();

    let first = create_meeting(&repo, 1, "2025-02-10");
    repo.replace_attendance(first, &entries_with_present(&repo, 8))
        .unwrap();
    let second = create_meeting(&repo, 2, "2025-03-10");
    repo.replace_attendance(second, &entries_with_present(&repo, 5))
        .unwrap();

    let org = repo.organization_by_code("SED").unwrap();
    for (title, status) in [
        ("Publish modeling standard", ActionStatus::InProgress),
        ("Procure data environment", ActionStatus::InProgress),
        ("Map current assets", ActionStatus::Completed),
    ] {
        repo.create_action(&NewActionItem {
            title: title.to_string(),
            description: None,
            organization_id: org.id,
            start_date: "2025-01-15".parse().unwrap(),
            target_date: "2025-09-30".parse().unwrap(),
            status,
            progress: 50,
            priority: Default::default(),
            decree_reference: None,
            notes: None,
        })
        .unwrap();
    }

    for (title, status) in [
        ("Intro workshop", TrainingStatus::Held),
        ("Advanced modeling", TrainingStatus::Scheduled),
    ] {
        repo.create_training(&NewTrainingSession {
            title: title.to_string(),
            description: None,
            date: "2025-04-02".parse().unwrap(),
            venue: None,
            format: SessionFormat::Remote,
            instructor: None,
            duration_hours: None,
            expected: 30,
            status,
            notes: None,
        })
        .unwrap();
    }

    for (item, progress) in [("Reference library online", 80), ("Standards published", 20)] {
        repo.create_compliance(&NewComplianceItem {
            category: plenum::model::ComplianceCategory::Standards,
            item: item.to_string(),
            description: None,
            progress,
            status: Default::default(),
            organization_id: None,
            start_date: None,
            target_date: None,
        })
        .unwrap();
    }

    let kpis = repo.dashboard_kpis().unwrap();
    // Mean of the stored 72.73 and 45.45, not a recount of raw rows
    assert_eq!(kpis.overall_attendance_rate, 59.09);
    assert_eq!(kpis.actions_in_progress, 2);
    assert_eq!(kpis.trainings_held, 1);
    assert_eq!(kpis.overall_compliance, 50.0);
}

#[test]
fn overall_rate_uses_stored_rates_not_raw_rows() {
    let repo = seeded_repo();
    let meeting_id = create_meeting(&repo, 1, "2025-02-10");
    repo.replace_attendance(meeting_id, &entries_with_present(&repo, 8))
        .unwrap();

    // Tamper with the stored rate directly; the rollup must follow it
    repo.store()
        .conn()
        .execute("UPDATE meetings SET attendance_rate = 10.0", [])
        .unwrap();

    let kpis = repo.dashboard_kpis().unwrap();
    assert_eq!(kpis.overall_attendance_rate, 10.0);
}

#[test]
fn frequency_report_tallies_and_series() {
    let repo = seeded_repo();
    let sed = repo.organization_by_code("SED").unwrap();

    // Three meetings; SED present at two of them
    for (number, date, sed_present, present_count) in [
        (1, "2025-02-10", true, 8),
        (2, "2025-03-10", true, 5),
        (3, "2025-04-14", false, 7),
    ] {
        let meeting_id = create_meeting(&repo, number, date);
        let entries: Vec<AttendanceEntry> = repo
            .organizations()
            .unwrap()
            .iter()
            .enumerate()
            .map(|(i, org)| AttendanceEntry {
                organization_id: org.id,
                present: if org.id == sed.id {
                    sed_present
                } else {
                    i < present_count
                },
                representative: RepresentativeKind::Primary,
            })
            .collect();
        repo.replace_attendance(meeting_id, &entries).unwrap();
    }

    let report = repo.frequency_report().unwrap();

    let sed_tally = report
        .by_organization
        .iter()
        .find(|t| t.organization_id == sed.id)
        .unwrap();
    assert_eq!(sed_tally.presences, 2);
    assert_eq!(sed_tally.recorded, 3);

    let dates: Vec<String> = report
        .rate_series
        .iter()
        .map(|p| p.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2025-02-10", "2025-03-10", "2025-04-14"]);
}

#[test]
fn frequency_report_omits_organizations_without_records() {
    let repo = seeded_repo();
    let report = repo.frequency_report().unwrap();
    assert!(report.by_organization.is_empty());
    assert!(report.rate_series.is_empty());
}

#[test]
fn expected_count_override_drives_quorum() {
    let repo = seeded_repo();
    let meeting = repo
        .create_meeting(&NewMeeting {
            number: 9,
            date: "2025-06-02".parse().unwrap(),
            kind: MeetingKind::Extraordinary,
            venue: None,
            format: SessionFormat::Remote,
            agenda: None,
            expected_count: Some(9),
        })
        .unwrap();
    assert_eq!(meeting.expected_count, 9);

    let updated = repo
        .replace_attendance(meeting.id, &entries_with_present(&repo, 5))
        .unwrap();
    // 5 of 9 expected: ceil(9/2) = 5, quorum reached
    assert_eq!(updated.attendance_rate, 55.56);
    assert!(updated.quorum_reached);
}

#[test]
fn training_rate_follows_participant_counts() {
    let repo = seeded_repo();
    let training = repo
        .create_training(&NewTrainingSession {
            title: "Clash detection".to_string(),
            description: None,
            date: "2025-05-20".parse().unwrap(),
            venue: None,
            format: SessionFormat::Hybrid,
            instructor: Some("M. Costa".to_string()),
            duration_hours: Some(16),
            expected: 24,
            status: TrainingStatus::Scheduled,
            notes: None,
        })
        .unwrap();

    let updated = repo
        .update_training(
            training.id,
            &TrainingPatch {
                confirmed: Some(20),
                actual: Some(18),
                status: Some(TrainingStatus::Held),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.attendance_rate, 75.0);

    let breakdown: Vec<(i64, i64)> = repo
        .organizations()
        .unwrap()
        .iter()
        .take(3)
        .map(|o| (o.id, 6))
        .collect();
    let participants = repo
        .replace_training_participants(training.id, &breakdown)
        .unwrap();
    assert_eq!(participants.len(), 3);
    assert!(participants.iter().all(|p| p.participants == 6));
}
