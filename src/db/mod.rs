use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, TransactionError};
use thiserror::Error;
use tracing::debug;

pub mod bootstrap;
pub mod repositories;

pub use repositories::guide::{GuideTopicRow, GuideVideoRow};
pub use repositories::meeting::AttendanceCount;
pub use repositories::role::RoleRow;
pub use repositories::team::TeamProfile;
pub use repositories::user::{MemberRow, PendingUserRow};

use crate::entities::users;

/// A statement that could not be executed: the connection is gone or the
/// database rejected the statement. Zero matching rows is never a
/// `QueryError`; those come back as an empty collection or `None`.
#[derive(Debug, Error)]
#[error("database query failed: {0}")]
pub struct QueryError(#[from] pub DbErr);

pub(crate) fn transaction_failure(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}

/// Handle on the team database. Holds exactly one connection; the whole
/// application is a single cooperative client, so there is nothing to pool.
#[derive(Debug, Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn connect(db_url: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;
        debug!("database connection opened");
        Ok(Self { conn })
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await?;
        debug!("database connection closed");
        Ok(())
    }

    fn team_repo(&self) -> repositories::team::TeamRepository {
        repositories::team::TeamRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn role_repo(&self) -> repositories::role::RoleRepository {
        repositories::role::RoleRepository::new(self.conn.clone())
    }

    fn meeting_repo(&self) -> repositories::meeting::MeetingRepository {
        repositories::meeting::MeetingRepository::new(self.conn.clone())
    }

    fn guide_repo(&self) -> repositories::guide::GuideRepository {
        repositories::guide::GuideRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Team
    // ========================================================================

    pub async fn team_profile(&self) -> Result<Option<TeamProfile>, QueryError> {
        self.team_repo().get().await
    }

    /// Existence probe used before bootstrap. An unprovisioned database has
    /// no schema at all, so a failing lookup counts as "no team here".
    pub async fn probe_team(&self) -> Option<TeamProfile> {
        match self.team_repo().get().await {
            Ok(found) => found,
            Err(err) => {
                debug!("team probe failed, treating database as unprovisioned: {err}");
                None
            }
        }
    }

    pub async fn rename_team(&self, team_number: i32, name: &str) -> Result<bool, QueryError> {
        self.team_repo().update_name(team_number, name).await
    }

    pub async fn set_team_password_hash(
        &self,
        team_number: i32,
        digest: &str,
    ) -> Result<bool, QueryError> {
        self.team_repo().update_password_hash(team_number, digest).await
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn find_user(&self, username: &str) -> Result<Option<users::Model>, QueryError> {
        self.user_repo().find_by_username(username).await
    }

    pub async fn user_by_id(&self, user_id: i32) -> Result<Option<users::Model>, QueryError> {
        self.user_repo().find_by_id(user_id).await
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, QueryError> {
        Ok(self.user_repo().find_by_username(username).await?.is_some())
    }

    pub async fn insert_join_request(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<i32, QueryError> {
        self.user_repo().insert_join_request(username, password_hash).await
    }

    pub async fn pending_users(&self) -> Result<Vec<PendingUserRow>, QueryError> {
        self.user_repo().list_pending().await
    }

    pub async fn active_members(&self) -> Result<Vec<MemberRow>, QueryError> {
        self.user_repo().list_active().await
    }

    pub async fn active_member_count(&self) -> Result<u64, QueryError> {
        self.user_repo().count_active().await
    }

    pub async fn approve_user(&self, user_id: i32) -> Result<bool, QueryError> {
        self.user_repo().approve(user_id).await
    }

    pub async fn reject_pending(&self, user_id: i32) -> Result<bool, QueryError> {
        self.user_repo().reject(user_id).await
    }

    pub async fn set_user_role(&self, user_id: i32, role_id: i32) -> Result<bool, QueryError> {
        self.user_repo().set_role(user_id, role_id).await
    }

    pub async fn set_user_admin(&self, user_id: i32, is_admin: bool) -> Result<bool, QueryError> {
        self.user_repo().set_admin(user_id, is_admin).await
    }

    pub async fn remove_user(&self, user_id: i32) -> Result<bool, QueryError> {
        self.user_repo().remove(user_id).await
    }

    // ========================================================================
    // Roles
    // ========================================================================

    pub async fn roles(&self) -> Result<Vec<RoleRow>, QueryError> {
        self.role_repo().list().await
    }

    pub async fn role_by_name(&self, name: &str) -> Result<Option<RoleRow>, QueryError> {
        self.role_repo().find_by_name(name).await
    }

    // ========================================================================
    // Meetings & attendance
    // ========================================================================

    pub async fn record_meeting(
        &self,
        title: &str,
        description: Option<&str>,
        attendance: &[(i32, bool)],
    ) -> Result<i32, QueryError> {
        self.meeting_repo().record(title, description, attendance).await
    }

    pub async fn attendance_counts(&self) -> Result<Vec<AttendanceCount>, QueryError> {
        self.meeting_repo().attendance_counts().await
    }

    // ========================================================================
    // Guides
    // ========================================================================

    pub async fn guide_topics(&self) -> Result<Vec<GuideTopicRow>, QueryError> {
        self.guide_repo().list_topics().await
    }

    pub async fn guide_topic(&self, guide_id: i32) -> Result<Option<GuideTopicRow>, QueryError> {
        self.guide_repo().find_topic(guide_id).await
    }

    pub async fn create_guide_topic(
        &self,
        topic_name: &str,
        created_by: i32,
    ) -> Result<i32, QueryError> {
        self.guide_repo().create_topic(topic_name, created_by).await
    }

    pub async fn guide_videos(&self, guide_id: i32) -> Result<Vec<GuideVideoRow>, QueryError> {
        self.guide_repo().list_videos(guide_id).await
    }

    pub async fn add_guide_video(
        &self,
        guide_id: i32,
        url: &str,
        title: Option<&str>,
        added_by: i32,
    ) -> Result<i32, QueryError> {
        self.guide_repo().add_video(guide_id, url, title, added_by).await
    }
}
