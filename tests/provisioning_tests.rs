//! Integration tests for the login / join / create-team workflows.

use async_trait::async_trait;
use pitcrew::clients::{RegistryCheck, TeamRegistry};
use pitcrew::db::Store;
use pitcrew::entities::prelude::{Roles, TeamInfo, Users};
use pitcrew::services::provisioning::{
    self, CreateTeamGate, CreateTeamOutcome, CreateTeamRequest, CreateTeamOverrides, LoginOutcome,
    TeamSpec, WorkflowError,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

struct StubRegistry(RegistryCheck);

#[async_trait]
impl TeamRegistry for StubRegistry {
    async fn check_team(&self, _team_number: u32) -> RegistryCheck {
        self.0.clone()
    }
}

fn temp_db_url() -> String {
    let path = std::env::temp_dir().join(format!("pitcrew-test-{}.db", uuid::Uuid::new_v4()));
    std::fs::File::create(&path).expect("failed to create sqlite file");
    format!("sqlite:{}", path.display())
}

fn team_spec() -> TeamSpec {
    TeamSpec {
        team_number: 254,
        team_name: "RoboDevils".to_string(),
        team_password: "teampw".to_string(),
        admin_username: "alice".to_string(),
        admin_password: "alicepw".to_string(),
    }
}

/// Provisions a fresh database and returns (url, admin session).
async fn bootstrap_team() -> (String, pitcrew::services::session::Session) {
    let url = temp_db_url();
    let store = Store::connect(&url).await.expect("connect");
    let outcome = provisioning::create_team_with(store, &team_spec(), false)
        .await
        .expect("create team");
    let CreateTeamOutcome::Created(session) = outcome else {
        panic!("expected team creation to succeed on an empty database");
    };
    (url, session)
}

#[tokio::test]
async fn create_team_bootstraps_a_complete_database() {
    let (url, session) = bootstrap_team().await;

    let identity = session.identity();
    assert_eq!(identity.username, "alice");
    assert!(identity.is_admin);
    assert_eq!(session.team().team_number, 254);
    assert_eq!(session.team().team_name, "RoboDevils");

    let store = Store::connect(&url).await.unwrap();
    assert_eq!(TeamInfo::find().count(&store.conn).await.unwrap(), 1);
    assert_eq!(Roles::find().count(&store.conn).await.unwrap(), 5);
    assert_eq!(Users::find().count(&store.conn).await.unwrap(), 1);

    let admin = Users::find().one(&store.conn).await.unwrap().unwrap();
    assert!(admin.is_admin);
    assert!(!admin.is_pending);

    let role_names: Vec<String> = Roles::find()
        .all(&store.conn)
        .await
        .unwrap()
        .into_iter()
        .map(|role| role.role_name)
        .collect();
    for expected in [
        "Member",
        "Software Lead",
        "Mechanical Lead",
        "Outreach Lead",
        "Admin",
    ] {
        assert!(role_names.iter().any(|name| name == expected), "{expected}");
    }

    session.logout().await;
}

#[tokio::test]
async fn admin_can_log_back_in_after_bootstrap() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    let store = Store::connect(&url).await.unwrap();
    let outcome = provisioning::login_with(store, "alice", "alicepw")
        .await
        .expect("login");
    let LoginOutcome::Authenticated(session) = outcome else {
        panic!("expected the bootstrap admin to authenticate");
    };

    assert_eq!(session.identity().username, "alice");
    assert!(session.identity().is_admin);
    assert_eq!(session.team().team_name, "RoboDevils");
    session.logout().await;
}

#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    let store = Store::connect(&url).await.unwrap();
    let unknown = provisioning::login_with(store, "mallory", "whatever")
        .await
        .unwrap_err();

    let store = Store::connect(&url).await.unwrap();
    let wrong_password = provisioning::login_with(store, "alice", "not-her-password")
        .await
        .unwrap_err();

    assert!(matches!(unknown, WorkflowError::InvalidCredentials));
    assert!(matches!(wrong_password, WorkflowError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn pending_account_gets_a_pending_outcome_not_a_session() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    let store = Store::connect(&url).await.unwrap();
    provisioning::request_join_with(store, "bob", "bobpw")
        .await
        .expect("join request");

    // correct password, still pending: a distinct outcome, not an error
    let store = Store::connect(&url).await.unwrap();
    let outcome = provisioning::login_with(store, "bob", "bobpw")
        .await
        .expect("pending login is not an error");
    assert!(matches!(outcome, LoginOutcome::PendingApproval));

    // wrong password on a pending account is still a credentials failure
    let store = Store::connect(&url).await.unwrap();
    let err = provisioning::login_with(store, "bob", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidCredentials));
}

#[tokio::test]
async fn taken_username_rejects_the_join_request() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    // taken by the admin account
    let store = Store::connect(&url).await.unwrap();
    let err = provisioning::request_join_with(store, "alice", "whatever")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::UsernameTaken(name) if name == "alice"));

    // taken by another pending request
    let store = Store::connect(&url).await.unwrap();
    provisioning::request_join_with(store, "bob", "bobpw")
        .await
        .unwrap();
    let store = Store::connect(&url).await.unwrap();
    let err = provisioning::request_join_with(store, "bob", "different-password")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::UsernameTaken(name) if name == "bob"));
}

#[tokio::test]
async fn create_over_existing_team_stops_at_the_gate_without_mutating() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    let store = Store::connect(&url).await.unwrap();
    let second = TeamSpec {
        team_number: 9999,
        team_name: "Usurpers".to_string(),
        admin_username: "eve".to_string(),
        admin_password: "evepw".to_string(),
        team_password: "stolen".to_string(),
    };
    let outcome = provisioning::create_team_with(store, &second, false)
        .await
        .expect("gated creation is not an error");

    match outcome {
        CreateTeamOutcome::NeedsConfirmation(CreateTeamGate::DatabaseHasTeam { team_name }) => {
            assert_eq!(team_name, "RoboDevils");
        }
        _ => panic!("expected the existing-team gate"),
    }

    // nothing was touched
    let store = Store::connect(&url).await.unwrap();
    let team = TeamInfo::find().one(&store.conn).await.unwrap().unwrap();
    assert_eq!(team.team_number, 254);
    assert_eq!(team.team_name, "RoboDevils");
    assert_eq!(Users::find().count(&store.conn).await.unwrap(), 1);

    let outcome = provisioning::login_with(store, "alice", "alicepw")
        .await
        .unwrap();
    assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
}

#[tokio::test]
async fn create_with_replace_override_reprovisions_the_database() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    let store = Store::connect(&url).await.unwrap();
    let replacement = TeamSpec {
        team_number: 4026,
        team_name: "Gear Grinders".to_string(),
        team_password: "newteampw".to_string(),
        admin_username: "dana".to_string(),
        admin_password: "danapw".to_string(),
    };
    let outcome = provisioning::create_team_with(store, &replacement, true)
        .await
        .expect("replacement bootstrap");
    let CreateTeamOutcome::Created(session) = outcome else {
        panic!("expected the override to proceed");
    };
    assert_eq!(session.identity().username, "dana");
    session.logout().await;

    let store = Store::connect(&url).await.unwrap();
    let team = TeamInfo::find().one(&store.conn).await.unwrap().unwrap();
    assert_eq!(team.team_number, 4026);

    // the old admin is gone with the rest of the data
    let old_admin = Users::find()
        .filter(pitcrew::entities::users::Column::Username.eq("alice"))
        .one(&store.conn)
        .await
        .unwrap();
    assert!(old_admin.is_none());
}

#[tokio::test]
async fn unlisted_team_needs_confirmation_before_anything_happens() {
    let registry = StubRegistry(RegistryCheck::Unlisted);
    let request = CreateTeamRequest {
        db_url: "postgresql://team:pw@db.example.org:5432/portal".to_string(),
        team_number: "254".to_string(),
        team_name: "RoboDevils".to_string(),
        team_password: "teampw".to_string(),
        admin_username: "alice".to_string(),
        admin_password: "alicepw".to_string(),
    };

    let outcome = provisioning::create_team(&registry, &request, CreateTeamOverrides::default())
        .await
        .expect("gate, not error");
    assert!(matches!(
        outcome,
        CreateTeamOutcome::NeedsConfirmation(CreateTeamGate::UnregisteredTeam { team_number: 254 })
    ));
}

#[tokio::test]
async fn unreachable_registry_degrades_to_a_soft_confirmation() {
    let registry = StubRegistry(RegistryCheck::Unverifiable("connection refused".to_string()));
    let request = CreateTeamRequest {
        db_url: "postgresql://team:pw@db.example.org:5432/portal".to_string(),
        team_number: "254".to_string(),
        team_name: "RoboDevils".to_string(),
        team_password: "teampw".to_string(),
        admin_username: "alice".to_string(),
        admin_password: "alicepw".to_string(),
    };

    let outcome = provisioning::create_team(&registry, &request, CreateTeamOverrides::default())
        .await
        .expect("soft warning, not error");
    assert!(matches!(
        outcome,
        CreateTeamOutcome::NeedsConfirmation(CreateTeamGate::RegistryUnavailable { .. })
    ));
}

#[tokio::test]
async fn listed_team_passes_the_gate_and_reaches_the_database() {
    // port 1 refuses immediately; reaching Connection proves the registry
    // gate was passed
    let registry = StubRegistry(RegistryCheck::Listed);
    let request = CreateTeamRequest {
        db_url: "postgresql://team:pw@127.0.0.1:1/portal".to_string(),
        team_number: "254".to_string(),
        team_name: "RoboDevils".to_string(),
        team_password: "teampw".to_string(),
        admin_username: "alice".to_string(),
        admin_password: "alicepw".to_string(),
    };

    let err = provisioning::create_team(&registry, &request, CreateTeamOverrides::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Connection(_)));
}

#[tokio::test]
async fn missing_team_row_surfaces_as_inconsistent_state() {
    let (url, session) = bootstrap_team().await;
    session.logout().await;

    // a database with users but no team row should not exist; if it does,
    // login must refuse to build a session out of it
    let store = Store::connect(&url).await.unwrap();
    TeamInfo::delete_many().exec(&store.conn).await.unwrap();

    let err = provisioning::login_with(store, "alice", "alicepw")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InconsistentState));
}

#[tokio::test]
async fn empty_login_fields_fail_before_any_connection() {
    let err = provisioning::login("postgresql://u:p@127.0.0.1:1/db", "", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidInput(_)));

    let err = provisioning::login("postgresql://u:p@127.0.0.1:1/db", "alice", "")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidInput(_)));
}

#[tokio::test]
async fn join_request_validates_the_database_url_locally() {
    let err = provisioning::request_join("not-a-database-url", "bob", "bobpw")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidInput(_)));

    let err = provisioning::request_join("postgresql://missing-credentials/db", "bob", "bobpw")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidInput(_)));
}
