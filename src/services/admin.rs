//! Admin-only operations on members and team settings.
//!
//! Every operation re-reads the acting user's row and checks `is_admin`
//! there, at call time. A session whose privileges were revoked since login
//! fails the gate no matter what its cached identity says.

use thiserror::Error;
use tracing::info;

use crate::db::{QueryError, TeamProfile};
use crate::services::credentials;
use crate::services::session::Session;

#[derive(Debug, Error)]
pub enum AdminError {
    /// The acting identity is not, or is no longer, an administrator.
    #[error("administrator privileges are required")]
    Unauthorized,

    /// Deleting one's own active account is refused outright, admin or not.
    #[error("you cannot remove your own account")]
    SelfRemoval,

    #[error("no such user (id {0})")]
    UnknownUser(i32),

    #[error("no such role '{0}'")]
    UnknownRole(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

/// The gate itself: admin status comes from the database, never from the
/// session's cached identity.
pub(crate) async fn require_admin(session: &Session) -> Result<(), AdminError> {
    let acting = session
        .store()
        .user_by_id(session.identity().user_id)
        .await?;
    match acting {
        Some(user) if user.is_admin && !user.is_pending => Ok(()),
        _ => Err(AdminError::Unauthorized),
    }
}

pub async fn approve_member(session: &Session, user_id: i32) -> Result<(), AdminError> {
    require_admin(session).await?;
    if session.store().approve_user(user_id).await? {
        info!("user {user_id} approved by '{}'", session.identity().username);
        Ok(())
    } else {
        Err(AdminError::UnknownUser(user_id))
    }
}

/// Rejecting deletes the join request entirely; the username becomes free
/// again.
pub async fn reject_request(session: &Session, user_id: i32) -> Result<(), AdminError> {
    require_admin(session).await?;
    if session.store().reject_pending(user_id).await? {
        info!("join request {user_id} rejected by '{}'", session.identity().username);
        Ok(())
    } else {
        Err(AdminError::UnknownUser(user_id))
    }
}

pub async fn assign_role(
    session: &Session,
    user_id: i32,
    role_name: &str,
) -> Result<(), AdminError> {
    require_admin(session).await?;

    let role = session
        .store()
        .role_by_name(role_name)
        .await?
        .ok_or_else(|| AdminError::UnknownRole(role_name.to_string()))?;

    if session.store().set_user_role(user_id, role.role_id).await? {
        Ok(())
    } else {
        Err(AdminError::UnknownUser(user_id))
    }
}

/// Flips the target's admin flag and returns the new value.
pub async fn toggle_admin(session: &Session, user_id: i32) -> Result<bool, AdminError> {
    require_admin(session).await?;

    let target = session
        .store()
        .user_by_id(user_id)
        .await?
        .ok_or(AdminError::UnknownUser(user_id))?;

    let grant = !target.is_admin;
    session.store().set_user_admin(user_id, grant).await?;
    info!(
        "admin status for '{}' set to {grant} by '{}'",
        target.username,
        session.identity().username
    );
    Ok(grant)
}

/// Removes an active member. Their attendance records go with them; guides
/// and videos they created stay behind with the author reference cleared.
pub async fn remove_member(session: &Session, user_id: i32) -> Result<(), AdminError> {
    if user_id == session.identity().user_id {
        return Err(AdminError::SelfRemoval);
    }
    require_admin(session).await?;

    if session.store().remove_user(user_id).await? {
        info!("user {user_id} removed by '{}'", session.identity().username);
        Ok(())
    } else {
        Err(AdminError::UnknownUser(user_id))
    }
}

pub async fn rename_team(session: &mut Session, new_name: &str) -> Result<(), AdminError> {
    require_admin(session).await?;

    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(AdminError::InvalidInput(
            "team name cannot be empty".to_string(),
        ));
    }

    let team_number = session.team().team_number;
    session.store().rename_team(team_number, new_name).await?;
    session.set_team(TeamProfile {
        team_number,
        team_name: new_name.to_string(),
    });
    info!("team renamed to '{new_name}'");
    Ok(())
}

pub async fn change_team_password(
    session: &Session,
    new_password: &str,
) -> Result<(), AdminError> {
    require_admin(session).await?;

    if new_password.is_empty() {
        return Err(AdminError::InvalidInput(
            "team password cannot be empty".to_string(),
        ));
    }

    let digest = credentials::hash_blocking(new_password)
        .await
        .map_err(AdminError::Internal)?;
    session
        .store()
        .set_team_password_hash(session.team().team_number, &digest)
        .await?;
    info!("team password changed");
    Ok(())
}
