use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_dashboard(ctx: &CommandContext, json: bool) -> Result<()> {
    let kpis = ctx.repo.dashboard_kpis()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&kpis)?);
        return Ok(());
    }

    println!("{}", "Committee dashboard".bold());
    println!(
        "Overall attendance rate:  {:>7.2}%",
        kpis.overall_attendance_rate
    );
    println!("Actions in progress:      {:>7}", kpis.actions_in_progress);
    println!("Trainings held:           {:>7}", kpis.trainings_held);
    println!(
        "Overall compliance:       {:>7.2}%",
        kpis.overall_compliance
    );
    Ok(())
}

pub fn handle_frequency(ctx: &CommandContext, json: bool) -> Result<()> {
    let report = ctx.repo.frequency_report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Attendance by organization".bold());
    if report.by_organization.is_empty() {
        println!("No attendance recorded yet.");
    }
    for tally in &report.by_organization {
        let org = ctx.repo.organization(tally.organization_id)?;
        println!(
            "{:<10} {:>3}/{:<3} meetings",
            org.code.cyan(),
            tally.presences,
            tally.recorded
        );
    }

    println!("\n{}", "Attendance rate over time".bold());
    if report.rate_series.is_empty() {
        println!("No meetings recorded yet.");
    }
    for point in &report.rate_series {
        println!("{}  {:>6.2}%", point.date, point.attendance_rate);
    }
    Ok(())
}
