use sea_orm::entity::prelude::*;

/// The one team this database belongs to. Exactly one row ever exists;
/// it is written during team bootstrap and only admins may edit it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_number: i32,

    pub team_name: String,

    /// Argon2id hash of the shared team password
    pub team_password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
