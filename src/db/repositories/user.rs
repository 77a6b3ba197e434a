use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::db::QueryError;
use crate::entities::prelude::{Roles, Users};
use crate::entities::users;

/// A join request awaiting an admin's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUserRow {
    pub user_id: i32,
    pub username: String,
    pub requested_at: String,
}

/// An approved member, with the role name already joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub user_id: i32,
    pub username: String,
    pub role_name: Option<String>,
    pub is_admin: bool,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<users::Model>, QueryError> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<users::Model>, QueryError> {
        let user = Users::find_by_id(user_id).one(&self.conn).await?;
        Ok(user)
    }

    /// Self-service signup: always pending, never admin.
    pub async fn insert_join_request(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<i32, QueryError> {
        let user = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            role_id: Set(None),
            is_pending: Set(true),
            is_admin: Set(false),
            created_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        };
        let inserted = user.insert(&self.conn).await?;
        Ok(inserted.user_id)
    }

    pub async fn list_pending(&self) -> Result<Vec<PendingUserRow>, QueryError> {
        let users = Users::find()
            .filter(users::Column::IsPending.eq(true))
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| PendingUserRow {
                user_id: user.user_id,
                username: user.username,
                requested_at: user.created_at,
            })
            .collect())
    }

    pub async fn list_active(&self) -> Result<Vec<MemberRow>, QueryError> {
        let users = Users::find()
            .filter(users::Column::IsPending.eq(false))
            .find_also_related(Roles)
            .order_by_asc(users::Column::Username)
            .all(&self.conn)
            .await?;

        Ok(users
            .into_iter()
            .map(|(user, role)| MemberRow {
                user_id: user.user_id,
                username: user.username,
                role_name: role.map(|role| role.role_name),
                is_admin: user.is_admin,
            })
            .collect())
    }

    pub async fn count_active(&self) -> Result<u64, QueryError> {
        let count = Users::find()
            .filter(users::Column::IsPending.eq(false))
            .count(&self.conn)
            .await?;
        Ok(count)
    }

    /// Flips a pending account to active. False when no such request exists
    /// (already approved, rejected, or never there).
    pub async fn approve(&self, user_id: i32) -> Result<bool, QueryError> {
        let result = Users::update_many()
            .col_expr(users::Column::IsPending, Expr::value(false))
            .filter(users::Column::UserId.eq(user_id))
            .filter(users::Column::IsPending.eq(true))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes a join request. Only pending rows qualify; active members go
    /// through [`Self::remove`].
    pub async fn reject(&self, user_id: i32) -> Result<bool, QueryError> {
        let result = Users::delete_many()
            .filter(users::Column::UserId.eq(user_id))
            .filter(users::Column::IsPending.eq(true))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn set_role(&self, user_id: i32, role_id: i32) -> Result<bool, QueryError> {
        let result = Users::update_many()
            .col_expr(users::Column::RoleId, Expr::value(role_id))
            .filter(users::Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<bool, QueryError> {
        let result = Users::update_many()
            .col_expr(users::Column::IsAdmin, Expr::value(is_admin))
            .filter(users::Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Removes an account. Attendance rows cascade away with it; guides and
    /// videos survive with their creator reference cleared.
    pub async fn remove(&self, user_id: i32) -> Result<bool, QueryError> {
        let result = Users::delete_many()
            .filter(users::Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
