//! Team settings command handlers

use crate::cli::commands::{authenticate, confirm, prompt_password};
use crate::cli::{Cli, TeamCommands};
use crate::config::LocalConfig;
use crate::services::admin;
use crate::services::session::Session;

pub async fn cmd_team(cli: &Cli, command: &TeamCommands) -> anyhow::Result<()> {
    let config = LocalConfig::load();
    let (mut session, _) = authenticate(cli, &config).await?;

    let result = dispatch(&mut session, command).await;
    session.logout().await;
    result
}

async fn dispatch(session: &mut Session, command: &TeamCommands) -> anyhow::Result<()> {
    match command {
        TeamCommands::Rename { name } => {
            admin::rename_team(session, name).await?;
            println!("Team renamed to '{name}'.");
            Ok(())
        }
        TeamCommands::SetPassword => {
            if !confirm("Change the team password?")? {
                println!("Cancelled.");
                return Ok(());
            }
            let password = prompt_password("New team password")?;
            admin::change_team_password(session, &password).await?;
            println!("Team password updated.");
            Ok(())
        }
    }
}
