//! One-shot provisioning of a team database.
//!
//! The schema is an explicit, ordered list of statements so the whole
//! bootstrap (drop, create, seed, team row, admin account) can run inside a
//! single transaction: either the database comes out fully provisioned or it
//! is left exactly as it was.

use chrono::Utc;
use sea_orm::sea_query::{OnConflict, Table};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Schema, Set};

use crate::entities::prelude::{Attendance, GuideVideos, Guides, Meetings, Roles, TeamInfo, Users};
use crate::entities::{roles, team_info, users};

/// Role names seeded at schema creation. The application never edits this
/// set; admins only assign them.
pub const SEED_ROLES: [&str; 5] = [
    "Member",
    "Software Lead",
    "Mechanical Lead",
    "Outreach Lead",
    "Admin",
];

/// Name of the role the bootstrap admin account is assigned.
pub const ADMIN_ROLE: &str = "Admin";

/// Drops any previous schema and recreates every table. Children are
/// dropped before parents and created after them so foreign keys resolve.
pub async fn reset_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();

    let drops = [
        Table::drop().table(GuideVideos).if_exists().to_owned(),
        Table::drop().table(Guides).if_exists().to_owned(),
        Table::drop().table(Attendance).if_exists().to_owned(),
        Table::drop().table(Meetings).if_exists().to_owned(),
        Table::drop().table(Users).if_exists().to_owned(),
        Table::drop().table(Roles).if_exists().to_owned(),
        Table::drop().table(TeamInfo).if_exists().to_owned(),
    ];
    for stmt in &drops {
        conn.execute(backend.build(stmt)).await?;
    }

    let schema = Schema::new(backend);
    let creates = [
        schema.create_table_from_entity(Roles),
        schema.create_table_from_entity(TeamInfo),
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Meetings),
        schema.create_table_from_entity(Attendance),
        schema.create_table_from_entity(Guides),
        schema.create_table_from_entity(GuideVideos),
    ];
    for stmt in &creates {
        conn.execute(backend.build(stmt)).await?;
    }

    Ok(())
}

/// Inserts the fixed role set. Idempotent: re-seeding an existing set is a
/// no-op per role.
pub async fn seed_roles<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for name in SEED_ROLES {
        let role = roles::ActiveModel {
            role_name: Set(name.to_string()),
            ..Default::default()
        };
        Roles::insert(role)
            .on_conflict(
                OnConflict::column(roles::Column::RoleName)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

pub async fn insert_team<C: ConnectionTrait>(
    conn: &C,
    team_number: i32,
    team_name: &str,
    password_hash: &str,
) -> Result<(), DbErr> {
    let team = team_info::ActiveModel {
        team_number: Set(team_number),
        team_name: Set(team_name.to_string()),
        team_password_hash: Set(password_hash.to_string()),
    };
    TeamInfo::insert(team).exec_without_returning(conn).await?;
    Ok(())
}

/// Creates the first account: approved, admin, and holding the Admin role.
pub async fn insert_admin<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    password_hash: &str,
) -> Result<users::Model, DbErr> {
    let admin_role = Roles::find()
        .filter(roles::Column::RoleName.eq(ADMIN_ROLE))
        .one(conn)
        .await?;

    let admin = users::ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set(password_hash.to_string()),
        role_id: Set(admin_role.map(|role| role.role_id)),
        is_pending: Set(false),
        is_admin: Set(true),
        created_at: Set(Utc::now().to_rfc3339()),
        ..Default::default()
    };
    admin.insert(conn).await
}
