use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::QueryError;
use crate::entities::prelude::Roles;
use crate::entities::roles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRow {
    pub role_id: i32,
    pub role_name: String,
}

impl From<roles::Model> for RoleRow {
    fn from(model: roles::Model) -> Self {
        Self {
            role_id: model.role_id,
            role_name: model.role_name,
        }
    }
}

pub struct RoleRepository {
    conn: DatabaseConnection,
}

impl RoleRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<RoleRow>, QueryError> {
        let roles = Roles::find()
            .order_by_asc(roles::Column::RoleName)
            .all(&self.conn)
            .await?;
        Ok(roles.into_iter().map(RoleRow::from).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<RoleRow>, QueryError> {
        let role = Roles::find()
            .filter(roles::Column::RoleName.eq(name))
            .one(&self.conn)
            .await?;
        Ok(role.map(RoleRow::from))
    }
}
