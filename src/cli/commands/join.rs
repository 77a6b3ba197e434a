//! Join-request command handler

use crate::cli::Cli;
use crate::cli::commands::{prompt, prompt_password, resolve_db_url};
use crate::config::LocalConfig;
use crate::services::provisioning;

pub async fn cmd_join(cli: &Cli) -> anyhow::Result<()> {
    let mut config = LocalConfig::load();

    let db_url = match resolve_db_url(cli, &config) {
        Some(url) => url,
        None => prompt("Database URL")?,
    };
    let username = match cli.username.clone() {
        Some(username) => username,
        None => prompt("Username")?,
    };
    let password = prompt_password("Password")?;

    provisioning::request_join(&db_url, &username, &password).await?;

    println!("Join request sent for '{username}'.");
    println!("An administrator must approve your account before you can log in.");

    config.db_url = Some(db_url);
    if let Err(err) = config.save() {
        println!("Warning: could not save config: {err}");
    }

    Ok(())
}
