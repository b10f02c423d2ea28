use std::io::Read;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use colored::Colorize;

use super::CommandContext;
use crate::model::{
    ActionItem, AttendanceRecord, ComplianceItem, Meeting, Organization, TrainingSession,
};

/// Parse a YYYY-MM-DD date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    value
        .parse()
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

pub fn parse_opt_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value.map(parse_date).transpose()
}

/// Resolve an organization argument given either as a numeric id or a code.
pub fn resolve_org(ctx: &CommandContext, arg: &str) -> Result<Organization> {
    let org = match arg.parse::<i64>() {
        Ok(id) => ctx.repo.organization(id)?,
        Err(_) => ctx.repo.organization_by_code(arg)?,
    };
    Ok(org)
}

/// Resolve a text argument, reading from stdin when it is '-'.
pub fn resolve_text(value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(v) if v == "-" => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(Some(content.trim().to_string()))
        }
        other => Ok(other),
    }
}

pub fn confirm_delete(what: &str) -> Result<bool> {
    use std::io::Write;
    print!("Delete {} permanently? [y/N] ", what.cyan());
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub fn format_quorum(reached: bool) -> colored::ColoredString {
    if reached {
        "quorum reached".green()
    } else {
        "no quorum".red()
    }
}

pub fn print_organization_list(organizations: &[Organization]) {
    if organizations.is_empty() {
        println!("No organizations seeded.");
        return;
    }
    for org in organizations {
        println!("{:>3}  {:<10} {}", org.rank, org.code.cyan(), org.name);
    }
}

pub fn print_meeting(meeting: &Meeting) {
    println!(
        "{} {} meeting #{}",
        meeting.date.to_string().bold(),
        meeting.kind,
        meeting.number
    );
    println!("Format:   {}", meeting.format);
    if let Some(ref venue) = meeting.venue {
        println!("Venue:    {}", venue);
    }
    println!(
        "Presence: {}/{} ({:.2}%) - {}",
        meeting.present_count,
        meeting.expected_count,
        meeting.attendance_rate,
        format_quorum(meeting.quorum_reached)
    );
    if let Some(ref agenda) = meeting.agenda {
        println!("\nAgenda:\n{}", agenda);
    }
    if let Some(ref minutes) = meeting.minutes {
        println!("\nMinutes:\n{}", minutes);
    }
}

pub fn print_meeting_list(meetings: &[Meeting]) {
    if meetings.is_empty() {
        println!("No meetings found.");
        return;
    }
    for meeting in meetings {
        println!(
            "{} {} #{:<3} {} {:>6.2}% {}",
            format!("{}", meeting.id).cyan(),
            meeting.date,
            meeting.number,
            meeting.kind,
            meeting.attendance_rate,
            format_quorum(meeting.quorum_reached)
        );
    }
}

pub fn print_attendance_list(ctx: &CommandContext, records: &[AttendanceRecord]) -> Result<()> {
    if records.is_empty() {
        println!("No attendance registered.");
        return Ok(());
    }
    for record in records {
        let org = ctx.repo.organization(record.organization_id)?;
        let mark = if record.present {
            "present".green()
        } else {
            "absent".red()
        };
        let mut line = format!(
            "{} {:<10} {} ({})",
            format!("{}", record.id).cyan(),
            org.code,
            mark,
            record.representative
        );
        if let Some(ref justification) = record.justification {
            line.push_str(&format!(" - {}", justification));
        }
        println!("{}", line);
    }
    Ok(())
}

pub fn print_action(action: &ActionItem) {
    println!("{} {}", format!("{}", action.id).cyan().bold(), action.title.bold());
    println!("Status:   {}", action.status);
    println!("Priority: {}", action.priority);
    println!("Progress: {}%", action.progress);
    println!("Start:    {}", action.start_date);
    println!("Target:   {}", action.target_date);
    if let Some(completed) = action.completed_date {
        println!("Done:     {}", completed);
    }
    if let Some(ref decree_reference) = action.decree_reference {
        println!("Decree:   {}", decree_reference);
    }
    if let Some(ref description) = action.description {
        println!("\n{}", description);
    }
    if let Some(ref notes) = action.notes {
        println!("\nNotes: {}", notes);
    }
}

pub fn print_action_list(actions: &[ActionItem]) {
    if actions.is_empty() {
        println!("No action items found.");
        return;
    }
    for action in actions {
        println!(
            "{} [{}] {:>3}% {} {}",
            format!("{}", action.id).cyan(),
            action.status,
            action.progress,
            action.target_date,
            action.title
        );
    }
}

pub fn print_training(training: &TrainingSession) {
    println!(
        "{} {}",
        format!("{}", training.id).cyan().bold(),
        training.title.bold()
    );
    println!("Date:     {}", training.date);
    println!("Status:   {}", training.status);
    println!("Format:   {}", training.format);
    if let Some(ref venue) = training.venue {
        println!("Venue:    {}", venue);
    }
    if let Some(ref instructor) = training.instructor {
        println!("Lead:     {}", instructor);
    }
    if let Some(duration) = training.duration_hours {
        println!("Hours:    {}", duration);
    }
    println!(
        "People:   {} expected, {} confirmed, {} attended ({:.2}%)",
        training.expected, training.confirmed, training.actual, training.attendance_rate
    );
    if let Some(ref description) = training.description {
        println!("\n{}", description);
    }
}

pub fn print_training_list(trainings: &[TrainingSession]) {
    if trainings.is_empty() {
        println!("No training sessions found.");
        return;
    }
    for training in trainings {
        println!(
            "{} {} [{}] {:>6.2}% {}",
            format!("{}", training.id).cyan(),
            training.date,
            training.status,
            training.attendance_rate,
            training.title
        );
    }
}

pub fn print_compliance(item: &ComplianceItem) {
    println!("{} {}", format!("{}", item.id).cyan().bold(), item.item.bold());
    println!("Category: {}", item.category);
    println!("Status:   {}", item.status);
    println!("Progress: {}%", item.progress);
    if let Some(start) = item.start_date {
        println!("Start:    {}", start);
    }
    if let Some(target) = item.target_date {
        println!("Target:   {}", target);
    }
    if let Some(completed) = item.completed_date {
        println!("Done:     {}", completed);
    }
    if let Some(ref description) = item.description {
        println!("\n{}", description);
    }
    if let Some(ref notes) = item.notes {
        println!("\nNotes: {}", notes);
    }
}

pub fn print_compliance_list(items: &[ComplianceItem]) {
    if items.is_empty() {
        println!("No compliance items found.");
        return;
    }
    for item in items {
        println!(
            "{} [{}] {:>3}% {} {}",
            format!("{}", item.id).cyan(),
            item.status,
            item.progress,
            format!("{}", item.category).blue(),
            item.item
        );
    }
}
