use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{parse_opt_date, print_compliance, print_compliance_list, resolve_org, resolve_text};
use crate::cli::commands::ComplianceCommands;
use crate::model::{CompliancePatch, NewComplianceItem};

pub fn handle_compliance(ctx: &CommandContext, cmd: ComplianceCommands) -> Result<()> {
    match cmd {
        ComplianceCommands::Create {
            item,
            category,
            description,
            progress,
            status,
            org,
            start,
            target,
            json,
        } => {
            let organization_id = org
                .map(|arg| resolve_org(ctx, &arg).map(|o| o.id))
                .transpose()?;
            let created = ctx.repo.create_compliance(&NewComplianceItem {
                category: category.into(),
                item,
                description: resolve_text(description)?,
                progress: progress.unwrap_or(0),
                status: status.map(Into::into).unwrap_or_default(),
                organization_id,
                start_date: parse_opt_date(start.as_deref())?,
                target_date: parse_opt_date(target.as_deref())?,
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!(
                    "{} compliance item {} [{}]",
                    "Created".green(),
                    format!("{}", created.id).cyan(),
                    created.category
                );
            }
        }
        ComplianceCommands::List { json } => {
            let items = ctx.repo.compliance_items()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_compliance_list(&items);
            }
        }
        ComplianceCommands::Show { id, json } => {
            let item = ctx.repo.compliance_item(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                print_compliance(&item);
            }
        }
        ComplianceCommands::Update {
            id,
            item,
            description,
            progress,
            status,
            org,
            start,
            target,
            completed,
            notes,
            json,
        } => {
            let organization_id = org
                .map(|arg| resolve_org(ctx, &arg).map(|o| o.id))
                .transpose()?;
            let patch = CompliancePatch {
                item,
                description: resolve_text(description)?,
                progress,
                status: status.map(Into::into),
                organization_id,
                start_date: parse_opt_date(start.as_deref())?,
                target_date: parse_opt_date(target.as_deref())?,
                completed_date: parse_opt_date(completed.as_deref())?,
                notes,
            };
            let updated = ctx.repo.update_compliance(id, &patch)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&updated)?);
            } else {
                println!(
                    "{} compliance item {} ({}%)",
                    "Updated".green(),
                    format!("{}", id).cyan(),
                    updated.progress
                );
            }
        }
    }
    Ok(())
}
