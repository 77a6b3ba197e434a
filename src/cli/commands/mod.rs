mod attendance;
mod create;
mod guides;
mod join;
mod login;
mod logout;
mod members;
mod scout;
mod status;
mod team;

pub use attendance::cmd_attendance;
pub use create::cmd_create_team;
pub use guides::cmd_guides;
pub use join::cmd_join;
pub use login::cmd_login;
pub use logout::cmd_logout;
pub use members::cmd_members;
pub use scout::cmd_scout;
pub use status::cmd_status;
pub use team::cmd_team;

use std::io::Write;

use anyhow::{Context, bail};

use crate::cli::Cli;
use crate::config::LocalConfig;
use crate::services::provisioning::{self, LoginOutcome};
use crate::services::session::Session;

/// Database URL resolution order: flag, then DATABASE_URL, then the saved
/// config.
pub(crate) fn resolve_db_url(cli: &Cli, config: &LocalConfig) -> Option<String> {
    cli.db_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .or_else(|| config.db_url.clone())
}

pub(crate) fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    Ok(input.trim().to_string())
}

/// Passwords keep interior whitespace; only the line ending is stripped.
pub(crate) fn prompt_password(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

pub(crate) fn confirm(question: &str) -> anyhow::Result<bool> {
    let answer = prompt(&format!("{question} [y/N]"))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Logs in with the resolved URL and username, prompting for whatever is
/// missing. Returns the session together with the URL it connected to.
pub(crate) async fn authenticate(cli: &Cli, config: &LocalConfig) -> anyhow::Result<(Session, String)> {
    let db_url = match resolve_db_url(cli, config) {
        Some(url) => url,
        None => prompt("Database URL")?,
    };

    let username = match cli.username.clone().or_else(|| config.username.clone()) {
        Some(username) => username,
        None => prompt("Username")?,
    };

    let password = prompt_password(&format!("Password for {username}"))?;

    match provisioning::login(&db_url, &username, &password).await? {
        LoginOutcome::Authenticated(session) => Ok((session, db_url)),
        LoginOutcome::PendingApproval => {
            bail!("your account is still awaiting admin approval")
        }
    }
}

pub(crate) fn separator() {
    println!("{:-<70}", "");
}
