//! Create-team command handler
//!
//! The workflow stops at its confirmation gates; this handler asks the
//! question on screen and retries with the matching override.

use crate::cli::Cli;
use crate::cli::commands::{confirm, prompt, prompt_password, resolve_db_url};
use crate::clients::FtcScoutClient;
use crate::config::LocalConfig;
use crate::services::provisioning::{
    self, CreateTeamGate, CreateTeamOutcome, CreateTeamOverrides, CreateTeamRequest,
};

pub async fn cmd_create_team(cli: &Cli, team_number: &str, team_name: &str) -> anyhow::Result<()> {
    let mut config = LocalConfig::load();

    let db_url = match resolve_db_url(cli, &config) {
        Some(url) => url,
        None => prompt("Database URL")?,
    };
    let admin_username = match cli.username.clone() {
        Some(username) => username,
        None => prompt("Admin username")?,
    };
    let admin_password = prompt_password("Admin password")?;
    let team_password = prompt_password("Team password")?;

    let request = CreateTeamRequest {
        db_url: db_url.clone(),
        team_number: team_number.to_string(),
        team_name: team_name.to_string(),
        team_password,
        admin_username,
        admin_password,
    };

    let registry = FtcScoutClient::new();
    let mut overrides = CreateTeamOverrides::default();

    let session = loop {
        match provisioning::create_team(&registry, &request, overrides).await? {
            CreateTeamOutcome::Created(session) => break session,
            CreateTeamOutcome::NeedsConfirmation(gate) => match gate {
                CreateTeamGate::UnregisteredTeam { team_number } => {
                    println!(
                        "Team {team_number} is not listed on FTC Scout. It may be brand new, \
                         or the number may be wrong."
                    );
                    if !confirm("Create it anyway?")? {
                        println!("Cancelled.");
                        return Ok(());
                    }
                    overrides.allow_unregistered = true;
                }
                CreateTeamGate::RegistryUnavailable { reason } => {
                    println!("Could not verify the team number against FTC Scout ({reason}).");
                    if !confirm("Proceed without verification?")? {
                        println!("Cancelled.");
                        return Ok(());
                    }
                    overrides.allow_unregistered = true;
                }
                CreateTeamGate::DatabaseHasTeam { team_name } => {
                    println!(
                        "This database already holds team '{team_name}'. Continuing will \
                         WIPE all of its data and set up a new team."
                    );
                    if !confirm("Are you absolutely sure?")? {
                        println!("Cancelled.");
                        return Ok(());
                    }
                    overrides.replace_existing = true;
                }
            },
        }
    };

    let team = session.team();
    println!(
        "Team '{}' ({}) created. You are its administrator.",
        team.team_name, team.team_number
    );

    config.db_url = Some(db_url);
    config.username = Some(session.identity().username.clone());
    if let Err(err) = config.save() {
        println!("Warning: could not save config: {err}");
    }

    session.logout().await;
    Ok(())
}
