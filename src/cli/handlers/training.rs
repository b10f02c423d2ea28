use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{
    confirm_delete, parse_date, parse_opt_date, print_training, print_training_list, resolve_org,
    resolve_text,
};
use crate::cli::commands::TrainingCommands;
use crate::model::{NewTrainingSession, TrainingPatch};

pub fn handle_training(ctx: &CommandContext, cmd: TrainingCommands) -> Result<()> {
    match cmd {
        TrainingCommands::Create {
            title,
            description,
            date,
            venue,
            format,
            instructor,
            duration,
            expected,
            status,
            notes,
            json,
        } => {
            let training = ctx.repo.create_training(&NewTrainingSession {
                title,
                description: resolve_text(description)?,
                date: parse_date(&date)?,
                venue,
                format: format.into(),
                instructor,
                duration_hours: duration,
                expected,
                status: status.map(Into::into).unwrap_or_default(),
                notes,
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&training)?);
            } else {
                println!(
                    "{} training {} on {}",
                    "Created".green(),
                    format!("{}", training.id).cyan(),
                    training.date
                );
            }
        }
        TrainingCommands::List { json } => {
            let trainings = ctx.repo.trainings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trainings)?);
            } else {
                print_training_list(&trainings);
            }
        }
        TrainingCommands::Show { id, json } => {
            let training = ctx.repo.training(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&training)?);
            } else {
                print_training(&training);
            }
        }
        TrainingCommands::Update {
            id,
            title,
            description,
            date,
            venue,
            format,
            instructor,
            duration,
            expected,
            confirmed,
            actual,
            status,
            notes,
            json,
        } => {
            let patch = TrainingPatch {
                title,
                description: resolve_text(description)?,
                date: parse_opt_date(date.as_deref())?,
                venue,
                format: format.map(Into::into),
                instructor,
                duration_hours: duration,
                expected,
                confirmed,
                actual,
                status: status.map(Into::into),
                notes,
            };
            let training = ctx.repo.update_training(id, &patch)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&training)?);
            } else {
                println!(
                    "{} training {} ({:.2}%)",
                    "Updated".green(),
                    format!("{}", id).cyan(),
                    training.attendance_rate
                );
            }
        }
        TrainingCommands::Delete { id, force } => {
            if !force && !confirm_delete(&format!("training {id}"))? {
                println!("Cancelled.");
                return Ok(());
            }
            ctx.repo.delete_training(id)?;
            println!("{} training {}", "Deleted".red(), format!("{}", id).cyan());
        }
        TrainingCommands::Participants { id, set, json } => {
            if !set.is_empty() {
                let mut breakdown = Vec::with_capacity(set.len());
                for pair in &set {
                    let (code, count) = pair.split_once('=').ok_or_else(|| {
                        anyhow::anyhow!("Expected CODE=COUNT, got '{}'", pair)
                    })?;
                    let organization = resolve_org(ctx, code)?;
                    let count: i64 = count
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Invalid count in '{}'", pair))?;
                    breakdown.push((organization.id, count));
                }
                ctx.repo.replace_training_participants(id, &breakdown)?;
            }

            let participants = ctx.repo.training_participants(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&participants)?);
            } else if participants.is_empty() {
                println!("No participant breakdown recorded.");
            } else {
                for entry in &participants {
                    let org = ctx.repo.organization(entry.organization_id)?;
                    println!("{:<10} {:>4}", org.code.cyan(), entry.participants);
                }
            }
        }
    }
    Ok(())
}
