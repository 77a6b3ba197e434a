//! Member administration command handlers

use crate::cli::commands::{authenticate, confirm, separator};
use crate::cli::{Cli, MemberCommands};
use crate::config::LocalConfig;
use crate::services::admin;
use crate::services::session::Session;

pub async fn cmd_members(cli: &Cli, command: &MemberCommands) -> anyhow::Result<()> {
    let config = LocalConfig::load();
    let (session, _) = authenticate(cli, &config).await?;

    let result = dispatch(&session, command).await;
    session.logout().await;
    result
}

async fn dispatch(session: &Session, command: &MemberCommands) -> anyhow::Result<()> {
    match command {
        MemberCommands::List => list_members(session).await,
        MemberCommands::Pending => list_pending(session).await,
        MemberCommands::Approve { user_id } => {
            admin::approve_member(session, *user_id).await?;
            println!("User {user_id} approved.");
            Ok(())
        }
        MemberCommands::Reject { user_id } => {
            if !confirm(&format!(
                "Reject and DELETE join request {user_id}? This cannot be undone."
            ))? {
                println!("Cancelled.");
                return Ok(());
            }
            admin::reject_request(session, *user_id).await?;
            println!("Join request {user_id} rejected.");
            Ok(())
        }
        MemberCommands::SetRole { user_id, role } => {
            admin::assign_role(session, *user_id, role).await?;
            println!("Role '{role}' assigned to user {user_id}.");
            Ok(())
        }
        MemberCommands::ToggleAdmin { user_id } => {
            let granted = admin::toggle_admin(session, *user_id).await?;
            if granted {
                println!("User {user_id} is now an administrator.");
            } else {
                println!("User {user_id} is no longer an administrator.");
            }
            Ok(())
        }
        MemberCommands::Remove { user_id } => {
            if !confirm(&format!(
                "Permanently REMOVE user {user_id} and their attendance records?"
            ))? {
                println!("Cancelled.");
                return Ok(());
            }
            admin::remove_member(session, *user_id).await?;
            println!("User {user_id} removed.");
            Ok(())
        }
        MemberCommands::Roles => list_roles(session).await,
    }
}

async fn list_members(session: &Session) -> anyhow::Result<()> {
    let members = session.store().active_members().await?;

    if members.is_empty() {
        println!("No active members.");
        return Ok(());
    }

    println!("Active Members ({} total)", members.len());
    separator();
    for member in members {
        let role = member.role_name.as_deref().unwrap_or("None");
        let admin_marker = if member.is_admin { " [admin]" } else { "" };
        println!(
            "{:>5}  {}{admin_marker}",
            member.user_id, member.username
        );
        println!("       Role: {role}");
    }

    Ok(())
}

async fn list_pending(session: &Session) -> anyhow::Result<()> {
    let pending = session.store().pending_users().await?;

    if pending.is_empty() {
        println!("No pending join requests.");
        return Ok(());
    }

    println!("Pending Join Requests ({} total)", pending.len());
    separator();
    for request in pending {
        println!(
            "{:>5}  {}  (requested {})",
            request.user_id, request.username, request.requested_at
        );
    }
    println!();
    println!("Approve with: pitcrew members approve <id>");

    Ok(())
}

async fn list_roles(session: &Session) -> anyhow::Result<()> {
    let roles = session.store().roles().await?;

    println!("Available Roles");
    separator();
    for role in roles {
        println!("  {}", role.role_name);
    }

    Ok(())
}
