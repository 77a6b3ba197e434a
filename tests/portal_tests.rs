//! Integration tests for attendance bookkeeping and guide management.

use pitcrew::db::Store;
use pitcrew::entities::prelude::{Attendance, Meetings};
use pitcrew::services::admin::{self, AdminError};
use pitcrew::services::guides::GuideError;
use pitcrew::services::provisioning::{self, CreateTeamOutcome, LoginOutcome, TeamSpec};
use pitcrew::services::session::Session;
use pitcrew::services::{attendance, guides};
use sea_orm::{EntityTrait, PaginatorTrait};

fn temp_db_url() -> String {
    let path = std::env::temp_dir().join(format!("pitcrew-test-{}.db", uuid::Uuid::new_v4()));
    std::fs::File::create(&path).expect("failed to create sqlite file");
    format!("sqlite:{}", path.display())
}

/// One admin (alice) and one plain member (bob).
async fn team_of_two() -> (String, Session, Session) {
    let url = temp_db_url();
    let store = Store::connect(&url).await.expect("connect");
    let spec = TeamSpec {
        team_number: 254,
        team_name: "RoboDevils".to_string(),
        team_password: "teampw".to_string(),
        admin_username: "alice".to_string(),
        admin_password: "alicepw".to_string(),
    };
    let CreateTeamOutcome::Created(admin_session) =
        provisioning::create_team_with(store, &spec, false)
            .await
            .expect("create team")
    else {
        panic!("expected team creation to succeed");
    };

    let store = Store::connect(&url).await.unwrap();
    provisioning::request_join_with(store, "bob", "bobpw")
        .await
        .unwrap();
    let bob_id = admin_session
        .store()
        .find_user("bob")
        .await
        .unwrap()
        .unwrap()
        .user_id;
    admin::approve_member(&admin_session, bob_id).await.unwrap();

    let store = Store::connect(&url).await.unwrap();
    let LoginOutcome::Authenticated(bob_session) =
        provisioning::login_with(store, "bob", "bobpw").await.unwrap()
    else {
        panic!("expected bob to authenticate");
    };

    (url, admin_session, bob_session)
}

#[tokio::test]
async fn a_meeting_rolls_every_active_member() {
    let (_, admin_session, bob_session) = team_of_two().await;
    let bob_id = bob_session.identity().user_id;

    let meeting_id =
        attendance::record_meeting(&admin_session, "Kickoff", Some("Season start"), &[bob_id])
            .await
            .unwrap();
    assert!(meeting_id > 0);

    let store = admin_session.store();
    assert_eq!(Meetings::find().count(&store.conn).await.unwrap(), 1);
    // one row per active member, present or not
    assert_eq!(Attendance::find().count(&store.conn).await.unwrap(), 2);

    bob_session.logout().await;
    admin_session.logout().await;
}

#[tokio::test]
async fn attendance_summary_counts_presents_and_absents() {
    let (_, admin_session, bob_session) = team_of_two().await;
    let bob_id = bob_session.identity().user_id;

    attendance::record_meeting(&admin_session, "Kickoff", None, &[bob_id])
        .await
        .unwrap();
    attendance::record_meeting(&admin_session, "Build night", None, &[])
        .await
        .unwrap();

    let summary = attendance::summary(admin_session.store()).await.unwrap();
    assert_eq!(summary.len(), 2);

    let bob = summary.iter().find(|m| m.user_id == bob_id).unwrap();
    assert_eq!((bob.present, bob.absent), (1, 1));

    let alice = summary.iter().find(|m| m.username == "alice").unwrap();
    assert_eq!((alice.present, alice.absent), (0, 2));

    bob_session.logout().await;
    admin_session.logout().await;
}

#[tokio::test]
async fn meeting_titles_must_not_be_empty() {
    let (_, admin_session, bob_session) = team_of_two().await;

    let err = attendance::record_meeting(&admin_session, "   ", None, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::InvalidInput(_)));

    let store = admin_session.store();
    assert_eq!(Meetings::find().count(&store.conn).await.unwrap(), 0);

    bob_session.logout().await;
    admin_session.logout().await;
}

#[tokio::test]
async fn any_member_can_build_up_guides() {
    let (_, admin_session, bob_session) = team_of_two().await;

    // plain members create topics and attach videos
    let guide_id = guides::create_topic(&bob_session, "Swerve drive").await.unwrap();
    guides::add_video(
        &bob_session,
        guide_id,
        "https://example.org/swerve-101",
        Some("Swerve 101"),
    )
    .await
    .unwrap();
    guides::add_video(&bob_session, guide_id, "http://example.org/part-2", None)
        .await
        .unwrap();

    let topics = bob_session.store().guide_topics().await.unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].topic_name, "Swerve drive");

    let videos = bob_session.store().guide_videos(guide_id).await.unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].video_title.as_deref(), Some("Swerve 101"));
    assert_eq!(videos[1].video_title, None);

    bob_session.logout().await;
    admin_session.logout().await;
}

#[tokio::test]
async fn guide_inputs_are_validated() {
    let (_, admin_session, bob_session) = team_of_two().await;

    let err = guides::create_topic(&bob_session, "  ").await.unwrap_err();
    assert!(matches!(err, GuideError::InvalidInput(_)));

    let guide_id = guides::create_topic(&bob_session, "Intake design").await.unwrap();

    let err = guides::add_video(&bob_session, guide_id, "ftp://example.org/file", None)
        .await
        .unwrap_err();
    assert!(matches!(err, GuideError::InvalidInput(_)));

    let err = guides::add_video(&bob_session, 9999, "https://example.org/x", None)
        .await
        .unwrap_err();
    assert!(matches!(err, GuideError::UnknownTopic(9999)));

    bob_session.logout().await;
    admin_session.logout().await;
}
