//! Status command handler

use crate::cli::Cli;
use crate::cli::commands::{authenticate, separator};
use crate::config::LocalConfig;

pub async fn cmd_status(cli: &Cli) -> anyhow::Result<()> {
    let config = LocalConfig::load();
    let (session, _) = authenticate(cli, &config).await?;

    let team = session.team();
    let members = session.store().active_member_count().await?;

    println!("Team Status");
    separator();
    println!("Name:            {}", team.team_name);
    println!("Number:          {}", team.team_number);
    println!("Active members:  {members}");

    session.logout().await;
    Ok(())
}
