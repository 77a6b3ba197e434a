use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QuerySelect,
    TransactionTrait, Set,
};

use crate::db::{QueryError, transaction_failure};
use crate::entities::prelude::Attendance;
use crate::entities::{attendance, meetings};

/// Present/absent totals for one member across all recorded meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceCount {
    pub user_id: i32,
    pub present: i64,
    pub absent: i64,
}

pub struct MeetingRepository {
    conn: DatabaseConnection,
}

impl MeetingRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts the meeting and one attendance row per member in a single
    /// transaction, so a meeting never exists with half its roll call.
    pub async fn record(
        &self,
        title: &str,
        description: Option<&str>,
        roll: &[(i32, bool)],
    ) -> Result<i32, QueryError> {
        let title = title.to_string();
        let description = description.map(str::to_string);
        let roll = roll.to_vec();

        let meeting_id = self
            .conn
            .transaction::<_, i32, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let meeting = meetings::ActiveModel {
                        meeting_date: Set(now.format("%Y-%m-%d").to_string()),
                        title: Set(title),
                        description: Set(description),
                        created_at: Set(now.to_rfc3339()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    if !roll.is_empty() {
                        let rows: Vec<attendance::ActiveModel> = roll
                            .into_iter()
                            .map(|(user_id, is_present)| attendance::ActiveModel {
                                user_id: Set(user_id),
                                meeting_id: Set(meeting.meeting_id),
                                is_present: Set(is_present),
                                recorded_at: Set(now.to_rfc3339()),
                            })
                            .collect();
                        Attendance::insert_many(rows).exec(txn).await?;
                    }

                    Ok(meeting.meeting_id)
                })
            })
            .await
            .map_err(transaction_failure)?;

        Ok(meeting_id)
    }

    /// Grouped present/absent counts per member.
    pub async fn attendance_counts(&self) -> Result<Vec<AttendanceCount>, QueryError> {
        let grouped: Vec<(i32, bool, i64)> = Attendance::find()
            .select_only()
            .column(attendance::Column::UserId)
            .column(attendance::Column::IsPresent)
            .column_as(attendance::Column::UserId.count(), "total")
            .group_by(attendance::Column::UserId)
            .group_by(attendance::Column::IsPresent)
            .into_tuple()
            .all(&self.conn)
            .await?;

        let mut totals: std::collections::BTreeMap<i32, AttendanceCount> =
            std::collections::BTreeMap::new();
        for (user_id, is_present, count) in grouped {
            let entry = totals.entry(user_id).or_insert(AttendanceCount {
                user_id,
                present: 0,
                absent: 0,
            });
            if is_present {
                entry.present = count;
            } else {
                entry.absent = count;
            }
        }

        Ok(totals.into_values().collect())
    }
}
