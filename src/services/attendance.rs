//! Meeting recording and attendance totals.

use std::collections::{HashMap, HashSet};

use crate::db::{QueryError, Store};
use crate::services::admin::{self, AdminError};
use crate::services::session::Session;

/// One line of the attendance overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAttendance {
    pub user_id: i32,
    pub username: String,
    pub present: i64,
    pub absent: i64,
}

/// Attendance totals for every active member, including those with no
/// recorded meetings yet.
pub async fn summary(store: &Store) -> Result<Vec<MemberAttendance>, QueryError> {
    let members = store.active_members().await?;
    let counts = store.attendance_counts().await?;

    let by_user: HashMap<i32, (i64, i64)> = counts
        .into_iter()
        .map(|count| (count.user_id, (count.present, count.absent)))
        .collect();

    Ok(members
        .into_iter()
        .map(|member| {
            let (present, absent) = by_user.get(&member.user_id).copied().unwrap_or((0, 0));
            MemberAttendance {
                user_id: member.user_id,
                username: member.username,
                present,
                absent,
            }
        })
        .collect())
}

/// Records a meeting with a full roll call: every active member gets a row,
/// present when listed in `present_ids`, absent otherwise. Returns the new
/// meeting id.
pub async fn record_meeting(
    session: &Session,
    title: &str,
    description: Option<&str>,
    present_ids: &[i32],
) -> Result<i32, AdminError> {
    admin::require_admin(session).await?;

    let title = title.trim();
    if title.is_empty() {
        return Err(AdminError::InvalidInput(
            "meeting title cannot be empty".to_string(),
        ));
    }

    let members = session.store().active_members().await?;
    let present: HashSet<i32> = present_ids.iter().copied().collect();
    let roll: Vec<(i32, bool)> = members
        .iter()
        .map(|member| (member.user_id, present.contains(&member.user_id)))
        .collect();

    let description = description
        .map(str::trim)
        .filter(|description| !description.is_empty());

    let meeting_id = session
        .store()
        .record_meeting(title, description, &roll)
        .await?;
    Ok(meeting_id)
}
