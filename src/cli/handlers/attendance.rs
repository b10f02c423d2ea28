use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_quorum, print_attendance_list};
use crate::cli::commands::AttendanceCommands;
use crate::model::{AttendanceEntry, AttendancePatch, RepresentativeKind};

pub fn handle_attendance(ctx: &CommandContext, cmd: AttendanceCommands) -> Result<()> {
    match cmd {
        AttendanceCommands::Register {
            meeting,
            present,
            alternate,
            json,
        } => {
            let entries = build_entries(ctx, &present, &alternate)?;
            let updated = ctx.repo.replace_attendance(meeting, &entries)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&updated)?);
            } else {
                println!(
                    "{} attendance for meeting {}: {}/{} ({:.2}%) - {}",
                    "Registered".green(),
                    format!("{}", meeting).cyan(),
                    updated.present_count,
                    updated.expected_count,
                    updated.attendance_rate,
                    format_quorum(updated.quorum_reached)
                );
            }
        }
        AttendanceCommands::List { meeting, json } => {
            let records = ctx.repo.attendance_for_meeting(meeting)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_attendance_list(ctx, &records)?;
            }
        }
        AttendanceCommands::Set {
            id,
            present,
            representative,
            justification,
            json,
        } => {
            let patch = AttendancePatch {
                present,
                representative: representative.map(Into::into),
                justification,
            };
            let record = ctx.repo.update_attendance(id, &patch)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                let mark = if record.present { "present" } else { "absent" };
                println!(
                    "{} record {} ({})",
                    "Updated".green(),
                    format!("{}", id).cyan(),
                    mark
                );
            }
        }
    }
    Ok(())
}

/// Expand `--present`/`--alternate` code lists into a full-roster entry
/// set: every organization appears once, unlisted ones as absent.
fn build_entries(
    ctx: &CommandContext,
    present: &[String],
    alternate: &[String],
) -> Result<Vec<AttendanceEntry>> {
    let organizations = ctx.repo.organizations()?;

    for code in present.iter().chain(alternate) {
        if !organizations.iter().any(|o| o.code.eq_ignore_ascii_case(code)) {
            anyhow::bail!("Unknown organization code '{}'", code);
        }
    }

    Ok(organizations
        .iter()
        .map(|org| {
            let is_present = present.iter().any(|c| c.eq_ignore_ascii_case(&org.code));
            let is_alternate = alternate.iter().any(|c| c.eq_ignore_ascii_case(&org.code));
            AttendanceEntry {
                organization_id: org.id,
                present: is_present,
                representative: if is_alternate {
                    RepresentativeKind::Alternate
                } else {
                    RepresentativeKind::Primary
                },
            }
        })
        .collect())
}
