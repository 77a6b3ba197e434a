pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod entities;
pub mod services;

pub use config::LocalConfig;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Cli::parse();

    match &args.command {
        Commands::Login => cli::cmd_login(&args).await,
        Commands::Join => cli::cmd_join(&args).await,
        Commands::CreateTeam {
            team_number,
            team_name,
        } => cli::cmd_create_team(&args, team_number, team_name).await,
        Commands::Status => cli::cmd_status(&args).await,
        Commands::Members { command } => cli::cmd_members(&args, command).await,
        Commands::Attendance { command } => cli::cmd_attendance(&args, command.as_ref()).await,
        Commands::Guides { command } => cli::cmd_guides(&args, command).await,
        Commands::Scout {
            team_number,
            season,
        } => cli::cmd_scout(&args, *team_number, *season).await,
        Commands::Team { command } => cli::cmd_team(&args, command).await,
        Commands::Logout => cli::cmd_logout(),
    }
}
