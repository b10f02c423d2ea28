use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{
    confirm_delete, parse_date, parse_opt_date, print_action, print_action_list, resolve_org,
    resolve_text,
};
use crate::cli::commands::ActionCommands;
use crate::model::{ActionPatch, NewActionItem};

pub fn handle_action(ctx: &CommandContext, cmd: ActionCommands) -> Result<()> {
    match cmd {
        ActionCommands::Create {
            title,
            description,
            org,
            start,
            target,
            status,
            progress,
            priority,
            decree_ref,
            notes,
            json,
        } => {
            let organization = resolve_org(ctx, &org)?;
            let action = ctx.repo.create_action(&NewActionItem {
                title,
                description: resolve_text(description)?,
                organization_id: organization.id,
                start_date: parse_date(&start)?,
                target_date: parse_date(&target)?,
                status: status.map(Into::into).unwrap_or_default(),
                progress: progress.unwrap_or(0),
                priority: priority.map(Into::into).unwrap_or_default(),
                decree_reference: decree_ref,
                notes,
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&action)?);
            } else {
                println!(
                    "{} action {} for {}",
                    "Created".green(),
                    format!("{}", action.id).cyan(),
                    organization.code
                );
            }
        }
        ActionCommands::List { json } => {
            let actions = ctx.repo.actions()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&actions)?);
            } else {
                print_action_list(&actions);
            }
        }
        ActionCommands::Show { id, json } => {
            let action = ctx.repo.action(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&action)?);
            } else {
                print_action(&action);
            }
        }
        ActionCommands::Update {
            id,
            title,
            description,
            org,
            start,
            target,
            completed,
            status,
            progress,
            priority,
            decree_ref,
            notes,
            json,
        } => {
            let organization_id = org
                .map(|arg| resolve_org(ctx, &arg).map(|o| o.id))
                .transpose()?;
            let patch = ActionPatch {
                title,
                description: resolve_text(description)?,
                organization_id,
                start_date: parse_opt_date(start.as_deref())?,
                target_date: parse_opt_date(target.as_deref())?,
                completed_date: parse_opt_date(completed.as_deref())?,
                status: status.map(Into::into),
                progress,
                priority: priority.map(Into::into),
                decree_reference: decree_ref,
                notes,
            };
            let action = ctx.repo.update_action(id, &patch)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&action)?);
            } else {
                println!("{} action {}", "Updated".green(), format!("{}", id).cyan());
            }
        }
        ActionCommands::Delete { id, force } => {
            if !force && !confirm_delete(&format!("action {id}"))? {
                println!("Cancelled.");
                return Ok(());
            }
            ctx.repo.delete_action(id)?;
            println!("{} action {}", "Deleted".red(), format!("{}", id).cyan());
        }
    }
    Ok(())
}
