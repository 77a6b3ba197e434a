//! Guide topics and their video links. Open to every member; only the
//! inputs are checked here.

use thiserror::Error;

use crate::db::QueryError;
use crate::services::session::Session;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("no such guide topic (id {0})")]
    UnknownTopic(i32),

    #[error(transparent)]
    Query(#[from] QueryError),
}

pub async fn create_topic(session: &Session, topic_name: &str) -> Result<i32, GuideError> {
    let topic_name = topic_name.trim();
    if topic_name.is_empty() {
        return Err(GuideError::InvalidInput(
            "topic name cannot be empty".to_string(),
        ));
    }

    let guide_id = session
        .store()
        .create_guide_topic(topic_name, session.identity().user_id)
        .await?;
    Ok(guide_id)
}

pub async fn add_video(
    session: &Session,
    guide_id: i32,
    url: &str,
    title: Option<&str>,
) -> Result<i32, GuideError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(GuideError::InvalidInput(
            "video URL cannot be empty".to_string(),
        ));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(GuideError::InvalidInput(
            "video URL must start with http:// or https://".to_string(),
        ));
    }

    if session.store().guide_topic(guide_id).await?.is_none() {
        return Err(GuideError::UnknownTopic(guide_id));
    }

    let title = title.map(str::trim).filter(|title| !title.is_empty());
    let video_id = session
        .store()
        .add_guide_video(guide_id, url, title, session.identity().user_id)
        .await?;
    Ok(video_id)
}
