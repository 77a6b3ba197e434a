use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::QueryError;
use crate::entities::prelude::{GuideVideos, Guides};
use crate::entities::{guide_videos, guides};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideTopicRow {
    pub guide_id: i32,
    pub topic_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideVideoRow {
    pub video_id: i32,
    pub video_url: String,
    pub video_title: Option<String>,
}

pub struct GuideRepository {
    conn: DatabaseConnection,
}

impl GuideRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_topics(&self) -> Result<Vec<GuideTopicRow>, QueryError> {
        let topics = Guides::find()
            .order_by_asc(guides::Column::TopicName)
            .all(&self.conn)
            .await?;

        Ok(topics
            .into_iter()
            .map(|guide| GuideTopicRow {
                guide_id: guide.guide_id,
                topic_name: guide.topic_name,
            })
            .collect())
    }

    pub async fn find_topic(&self, guide_id: i32) -> Result<Option<GuideTopicRow>, QueryError> {
        let topic = Guides::find_by_id(guide_id).one(&self.conn).await?;
        Ok(topic.map(|guide| GuideTopicRow {
            guide_id: guide.guide_id,
            topic_name: guide.topic_name,
        }))
    }

    pub async fn create_topic(
        &self,
        topic_name: &str,
        created_by: i32,
    ) -> Result<i32, QueryError> {
        let guide = guides::ActiveModel {
            topic_name: Set(topic_name.to_string()),
            created_by_user_id: Set(Some(created_by)),
            created_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        };
        let inserted = guide.insert(&self.conn).await?;
        Ok(inserted.guide_id)
    }

    pub async fn list_videos(&self, guide_id: i32) -> Result<Vec<GuideVideoRow>, QueryError> {
        let videos = GuideVideos::find()
            .filter(guide_videos::Column::GuideId.eq(guide_id))
            .order_by_asc(guide_videos::Column::AddedAt)
            .all(&self.conn)
            .await?;

        Ok(videos
            .into_iter()
            .map(|video| GuideVideoRow {
                video_id: video.video_id,
                video_url: video.video_url,
                video_title: video.video_title,
            })
            .collect())
    }

    pub async fn add_video(
        &self,
        guide_id: i32,
        url: &str,
        title: Option<&str>,
        added_by: i32,
    ) -> Result<i32, QueryError> {
        let video = guide_videos::ActiveModel {
            guide_id: Set(guide_id),
            video_url: Set(url.to_string()),
            video_title: Set(title.map(str::to_string)),
            added_by_user_id: Set(Some(added_by)),
            added_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        };
        let inserted = video.insert(&self.conn).await?;
        Ok(inserted.video_id)
    }
}
