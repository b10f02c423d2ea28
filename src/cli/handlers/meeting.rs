use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{confirm_delete, parse_date, parse_opt_date, print_meeting, print_meeting_list, resolve_text};
use crate::cli::commands::MeetingCommands;
use crate::model::{MeetingPatch, NewMeeting};

pub fn handle_meeting(ctx: &CommandContext, cmd: MeetingCommands) -> Result<()> {
    match cmd {
        MeetingCommands::Create {
            number,
            date,
            kind,
            venue,
            format,
            agenda,
            expected,
            json,
        } => {
            let meeting = ctx.repo.create_meeting(&NewMeeting {
                number,
                date: parse_date(&date)?,
                kind: kind.into(),
                venue,
                format: format.into(),
                agenda: resolve_text(agenda)?,
                expected_count: expected,
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&meeting)?);
            } else {
                println!(
                    "{} meeting {} ({} #{}, expecting {})",
                    "Created".green(),
                    format!("{}", meeting.id).cyan(),
                    meeting.kind,
                    meeting.number,
                    meeting.expected_count
                );
            }
        }
        MeetingCommands::List { json } => {
            let meetings = ctx.repo.meetings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&meetings)?);
            } else {
                print_meeting_list(&meetings);
            }
        }
        MeetingCommands::Show { id, json } => {
            let meeting = ctx.repo.meeting(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&meeting)?);
            } else {
                print_meeting(&meeting);
            }
        }
        MeetingCommands::Update {
            id,
            number,
            date,
            kind,
            venue,
            format,
            agenda,
            minutes,
            json,
        } => {
            let patch = MeetingPatch {
                number,
                date: parse_opt_date(date.as_deref())?,
                kind: kind.map(Into::into),
                venue,
                format: format.map(Into::into),
                agenda: resolve_text(agenda)?,
                minutes: resolve_text(minutes)?,
            };
            let meeting = ctx.repo.update_meeting(id, &patch)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&meeting)?);
            } else {
                println!("{} meeting {}", "Updated".green(), format!("{}", id).cyan());
            }
        }
        MeetingCommands::Delete { id, force } => {
            if !force && !confirm_delete(&format!("meeting {id}"))? {
                println!("Cancelled.");
                return Ok(());
            }
            ctx.repo.delete_meeting(id)?;
            println!("{} meeting {}", "Deleted".red(), format!("{}", id).cyan());
        }
    }
    Ok(())
}
