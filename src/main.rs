use anyhow::{Context as _, Result};
use clap::Parser;

use plenum::cli::handlers::{
    CommandContext, handle_action, handle_attendance, handle_compliance, handle_dashboard,
    handle_frequency, handle_init, handle_meeting, handle_org, handle_serve, handle_training,
};
use plenum::cli::{Cli, Commands};
use plenum::config::PlenumConfig;
use plenum::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, None);

    match cli.command {
        // init runs before any config exists
        Commands::Init { store_path } => handle_init(store_path),
        command => {
            let ctx = load_context()?;
            match command {
                Commands::Init { .. } => unreachable!(),
                Commands::Org(cmd) => handle_org(&ctx, cmd),
                Commands::Meeting(cmd) => handle_meeting(&ctx, cmd),
                Commands::Attendance(cmd) => handle_attendance(&ctx, cmd),
                Commands::Action(cmd) => handle_action(&ctx, cmd),
                Commands::Training(cmd) => handle_training(&ctx, cmd),
                Commands::Compliance(cmd) => handle_compliance(&ctx, cmd),
                Commands::Dashboard { json } => handle_dashboard(&ctx, json),
                Commands::Frequency { json } => handle_frequency(&ctx, json),
                Commands::Serve { port } => handle_serve(ctx, port),
            }
        }
    }
}

fn load_context() -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, root) =
        PlenumConfig::load(&cwd).context("Failed to load plenum configuration")?;
    CommandContext::new(config, root)
}
