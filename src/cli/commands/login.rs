//! Login command handler

use crate::cli::Cli;
use crate::cli::commands::authenticate;
use crate::config::LocalConfig;

pub async fn cmd_login(cli: &Cli) -> anyhow::Result<()> {
    let mut config = LocalConfig::load();
    let (session, db_url) = authenticate(cli, &config).await?;

    let identity = session.identity();
    let team = session.team();
    println!("Logged in as {}", identity.username);
    println!(
        "  Team: {} ({})",
        team.team_name, team.team_number
    );
    if identity.is_admin {
        println!("  You have administrator privileges.");
    }

    config.db_url = Some(db_url);
    config.username = Some(identity.username.clone());
    if let Err(err) = config.save() {
        println!("Warning: could not save config: {err}");
    }

    session.logout().await;
    Ok(())
}
