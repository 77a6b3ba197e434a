//! Attendance command handlers

use crate::cli::commands::{authenticate, separator};
use crate::cli::{AttendanceCommands, Cli};
use crate::config::LocalConfig;
use crate::services::attendance;
use crate::services::session::Session;

pub async fn cmd_attendance(
    cli: &Cli,
    command: Option<&AttendanceCommands>,
) -> anyhow::Result<()> {
    let config = LocalConfig::load();
    let (session, _) = authenticate(cli, &config).await?;

    let result = match command {
        None => show_summary(&session).await,
        Some(AttendanceCommands::Record {
            title,
            description,
            present,
        }) => record(&session, title, description.as_deref(), present).await,
    };

    session.logout().await;
    result
}

async fn show_summary(session: &Session) -> anyhow::Result<()> {
    let summary = attendance::summary(session.store()).await?;

    if summary.is_empty() {
        println!("No active members.");
        return Ok(());
    }

    println!("Attendance (present/absent)");
    separator();
    for member in summary {
        println!(
            "{:>5}  {:<24} {}/{}",
            member.user_id, member.username, member.present, member.absent
        );
    }

    Ok(())
}

async fn record(
    session: &Session,
    title: &str,
    description: Option<&str>,
    present: &[i32],
) -> anyhow::Result<()> {
    let meeting_id = attendance::record_meeting(session, title, description, present).await?;
    println!(
        "Meeting #{meeting_id} recorded with {} member(s) present.",
        present.len()
    );
    Ok(())
}
