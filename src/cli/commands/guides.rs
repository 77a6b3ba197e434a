//! Guide command handlers

use crate::cli::commands::{authenticate, separator};
use crate::cli::{Cli, GuideCommands};
use crate::config::LocalConfig;
use crate::services::guides;
use crate::services::session::Session;

pub async fn cmd_guides(cli: &Cli, command: &GuideCommands) -> anyhow::Result<()> {
    let config = LocalConfig::load();
    let (session, _) = authenticate(cli, &config).await?;

    let result = dispatch(&session, command).await;
    session.logout().await;
    result
}

async fn dispatch(session: &Session, command: &GuideCommands) -> anyhow::Result<()> {
    match command {
        GuideCommands::List => list_topics(session).await,
        GuideCommands::Create { topic } => {
            let guide_id = guides::create_topic(session, topic).await?;
            println!("Guide topic #{guide_id} '{topic}' created.");
            Ok(())
        }
        GuideCommands::Videos { guide_id } => list_videos(session, *guide_id).await,
        GuideCommands::AddVideo {
            guide_id,
            url,
            title,
        } => {
            let video_id = guides::add_video(session, *guide_id, url, title.as_deref()).await?;
            println!("Video #{video_id} added to guide {guide_id}.");
            Ok(())
        }
    }
}

async fn list_topics(session: &Session) -> anyhow::Result<()> {
    let topics = session.store().guide_topics().await?;

    if topics.is_empty() {
        println!("No guide topics yet.");
        println!();
        println!("Create one with: pitcrew guides create \"<topic>\"");
        return Ok(());
    }

    println!("Guide Topics ({} total)", topics.len());
    separator();
    for topic in topics {
        println!("{:>5}  {}", topic.guide_id, topic.topic_name);
    }

    Ok(())
}

async fn list_videos(session: &Session, guide_id: i32) -> anyhow::Result<()> {
    let Some(topic) = session.store().guide_topic(guide_id).await? else {
        println!("No guide topic with id {guide_id}.");
        return Ok(());
    };

    let videos = session.store().guide_videos(guide_id).await?;

    println!("Videos for: {}", topic.topic_name);
    separator();
    if videos.is_empty() {
        println!("No videos yet.");
        return Ok(());
    }

    for video in videos {
        let title = video.video_title.as_deref().unwrap_or("No Title");
        println!("{:>5}  {title}", video.video_id);
        println!("       {}", video.video_url);
    }

    Ok(())
}
