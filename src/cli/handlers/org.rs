use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::print_organization_list;
use crate::cli::commands::OrgCommands;
use crate::model::NewOrganization;

pub fn handle_org(ctx: &CommandContext, cmd: OrgCommands) -> Result<()> {
    match cmd {
        OrgCommands::Add {
            code,
            name,
            rank,
            json,
        } => {
            let org = ctx.repo.add_organization(&NewOrganization { code, name, rank })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&org)?);
            } else {
                println!("{} {} {}", "Added".green(), org.code.cyan(), org.name);
            }
        }
        OrgCommands::List { json } => {
            let organizations = ctx.repo.organizations()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&organizations)?);
            } else {
                print_organization_list(&organizations);
            }
        }
    }
    Ok(())
}
