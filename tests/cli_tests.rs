use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn plenum_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("plenum"))
}

fn init_project(temp_dir: &TempDir) {
    plenum_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();
}

fn seed_roster(temp_dir: &TempDir) {
    for (rank, (code, name)) in [
        ("SED", "Secretariat of Education"),
        ("INF", "Secretariat of Infrastructure"),
        ("FAZ", "Secretariat of Finance"),
    ]
    .into_iter()
    .enumerate()
    {
        plenum_cmd()
            .args([
                "org",
                "add",
                code,
                name,
                "--rank",
                &(rank + 1).to_string(),
            ])
            .current_dir(temp_dir.path())
            .assert()
            .success();
    }
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    plenum_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compliance tracker"));
}

#[test]
fn test_version() {
    plenum_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plenum"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    plenum_cmd()
        .args(["meeting", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not initialized")
                .or(predicate::str::contains("Failed to load")),
        );
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config_and_store() {
    let temp_dir = TempDir::new().unwrap();

    plenum_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".plenum.yml").exists());
    assert!(temp_dir.path().join("plenum.db").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);

    plenum_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_custom_store_path() {
    let temp_dir = TempDir::new().unwrap();

    plenum_cmd()
        .args(["init", "--store-path", "data/committee.db"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("data/committee.db").exists());
}

// =============================================================================
// Organizations
// =============================================================================

#[test]
fn test_org_add_and_list() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["org", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SED").and(predicate::str::contains("Finance")));
}

#[test]
fn test_org_duplicate_code_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["org", "add", "SED", "Duplicate", "--rank", "9"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

// =============================================================================
// Meetings and attendance
// =============================================================================

#[test]
fn test_meeting_create_and_show() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args([
            "meeting", "create", "1", "--date", "2025-02-10", "--format", "hybrid",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").and(predicate::str::contains("expecting 3")));

    plenum_cmd()
        .args(["meeting", "show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-02-10"));
}

#[test]
fn test_attendance_register_updates_summary() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["meeting", "create", "1", "--date", "2025-02-10"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .args(["attendance", "register", "1", "--present", "SED,INF"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2/3")
                .and(predicate::str::contains("66.67"))
                .and(predicate::str::contains("quorum reached")),
        );

    plenum_cmd()
        .args(["attendance", "list", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FAZ").and(predicate::str::contains("absent")));
}

#[test]
fn test_attendance_register_unknown_code_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["meeting", "create", "1", "--date", "2025-02-10"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .args(["attendance", "register", "1", "--present", "NOPE"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown organization"));
}

#[test]
fn test_meeting_delete_with_force() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["meeting", "create", "1", "--date", "2025-02-10"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .args(["meeting", "delete", "1", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    plenum_cmd()
        .args(["meeting", "show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

// =============================================================================
// Actions, trainings, compliance
// =============================================================================

#[test]
fn test_action_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args([
            "action",
            "create",
            "Publish modeling standard",
            "--org",
            "SED",
            "--start",
            "2025-01-15",
            "--target",
            "2025-09-30",
            "--priority",
            "high",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    plenum_cmd()
        .args(["action", "update", "1", "--status", "in-progress", "--progress", "40"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .args(["action", "show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("in-progress").and(predicate::str::contains("40%")),
        );
}

#[test]
fn test_action_progress_out_of_range_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args([
            "action",
            "create",
            "Broken",
            "--org",
            "SED",
            "--start",
            "2025-01-15",
            "--target",
            "2025-09-30",
            "--progress",
            "120",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 100"));
}

#[test]
fn test_training_update_recomputes_rate() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args([
            "training",
            "create",
            "Intro workshop",
            "--date",
            "2025-04-02",
            "--format",
            "remote",
            "--expected",
            "40",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .args([
            "training", "update", "1", "--actual", "30", "--status", "held",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("75.00"));
}

#[test]
fn test_compliance_create_and_update() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args([
            "compliance",
            "create",
            "Reference library online",
            "--category",
            "reference-library",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .args([
            "compliance",
            "update",
            "1",
            "--progress",
            "60",
            "--status",
            "in-progress",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("60%"));
}

// =============================================================================
// Dashboard
// =============================================================================

#[test]
fn test_dashboard_empty_store_shows_zeros() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);

    plenum_cmd()
        .arg("dashboard")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00"));
}

#[test]
fn test_dashboard_json_output() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["meeting", "create", "1", "--date", "2025-02-10"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    plenum_cmd()
        .args(["attendance", "register", "1", "--present", "SED,INF"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let output = plenum_cmd()
        .args(["dashboard", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let kpis: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(kpis["overall_attendance_rate"], 66.67);
    assert_eq!(kpis["actions_in_progress"], 0);
}

#[test]
fn test_frequency_report_output() {
    let temp_dir = TempDir::new().unwrap();
    init_project(&temp_dir);
    seed_roster(&temp_dir);

    plenum_cmd()
        .args(["meeting", "create", "1", "--date", "2025-02-10"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    plenum_cmd()
        .args(["attendance", "register", "1", "--present", "SED"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    plenum_cmd()
        .arg("frequency")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("SED")
                .and(predicate::str::contains("1/1"))
                .and(predicate::str::contains("2025-02-10")),
        );
}
