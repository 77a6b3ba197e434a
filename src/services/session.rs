//! Authenticated session state.
//!
//! A [`Session`] is the only place a live connection and an identity exist
//! together. It is created by a successful login or team bootstrap and
//! destroyed by [`Session::logout`]; replacing a session drops the previous
//! connection with it.

use tracing::warn;

use crate::db::{Store, TeamProfile};
use crate::entities::users;

/// The authenticated user, minus the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
    pub is_admin: bool,
    pub role_id: Option<i32>,
}

impl From<users::Model> for Identity {
    fn from(model: users::Model) -> Self {
        Self {
            user_id: model.user_id,
            username: model.username,
            is_admin: model.is_admin,
            role_id: model.role_id,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    store: Store,
    identity: Identity,
    team: TeamProfile,
}

impl Session {
    pub(crate) const fn new(store: Store, identity: Identity, team: TeamProfile) -> Self {
        Self {
            store,
            identity,
            team,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub const fn team(&self) -> &TeamProfile {
        &self.team
    }

    pub(crate) fn set_team(&mut self, team: TeamProfile) {
        self.team = team;
    }

    /// Ends the session and releases the connection. No team data survives
    /// the logout.
    pub async fn logout(self) {
        if let Err(err) = self.store.close().await {
            warn!("failed to close database connection on logout: {err}");
        }
    }
}
