use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::db::QueryError;
use crate::entities::prelude::TeamInfo;
use crate::entities::team_info;

/// Team descriptor handed to the session; the password hash stays in the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamProfile {
    pub team_number: i32,
    pub team_name: String,
}

impl From<team_info::Model> for TeamProfile {
    fn from(model: team_info::Model) -> Self {
        Self {
            team_number: model.team_number,
            team_name: model.team_name,
        }
    }
}

pub struct TeamRepository {
    conn: DatabaseConnection,
}

impl TeamRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The single team row, if the database has been provisioned.
    pub async fn get(&self) -> Result<Option<TeamProfile>, QueryError> {
        let team = TeamInfo::find().one(&self.conn).await?;
        Ok(team.map(TeamProfile::from))
    }

    pub async fn update_name(&self, team_number: i32, name: &str) -> Result<bool, QueryError> {
        let result = TeamInfo::update_many()
            .col_expr(team_info::Column::TeamName, Expr::value(name))
            .filter(team_info::Column::TeamNumber.eq(team_number))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn update_password_hash(
        &self,
        team_number: i32,
        digest: &str,
    ) -> Result<bool, QueryError> {
        let result = TeamInfo::update_many()
            .col_expr(team_info::Column::TeamPasswordHash, Expr::value(digest))
            .filter(team_info::Column::TeamNumber.eq(team_number))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
