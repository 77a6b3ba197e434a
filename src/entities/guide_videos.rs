use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guide_videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub video_id: i32,

    pub guide_id: i32,

    pub video_url: String,

    pub video_title: Option<String>,

    pub added_by_user_id: Option<i32>,

    pub added_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guides::Entity",
        from = "Column::GuideId",
        to = "super::guides::Column::GuideId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Guides,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AddedByUserId",
        to = "super::users::Column::UserId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Users,
}

impl Related<super::guides::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guides.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
