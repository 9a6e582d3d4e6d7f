//! Integration tests for the shell lifecycle and role routing.

mod helpers;

use avdesk_auth::router::RoleRouter;
use avdesk_entity::user::{Credential, UserRole};
use avdesk_entity::view::ViewId;
use avdesk_shell::{Screen, ShellState};

#[tokio::test]
async fn test_fresh_process_shows_login() {
    let app = helpers::TestApp::new();
    let mut shell = app.shell();
    assert_eq!(shell.screen(), Screen::Loading);

    let view = shell.start(app.sessions()).await.unwrap();

    assert_eq!(view, ViewId::Login);
    assert_eq!(shell.state(), &ShellState::Unauthenticated);
    assert_eq!(shell.screen(), Screen::Show(ViewId::Login));
}

#[tokio::test]
async fn test_stored_session_skips_login() {
    let app = helpers::TestApp::new();
    app.preload(r#"{"identity":"u1","role":"admin","name":"Ana"}"#)
        .await;

    let shell = app.started_shell().await;

    assert_eq!(shell.state().role(), Some(UserRole::Admin));
    assert_eq!(shell.state().display_name(), Some("Ana"));
    assert_eq!(shell.screen(), Screen::Show(ViewId::AdminDashboard));
}

#[tokio::test]
async fn test_failed_login_keeps_login_screen() {
    let app = helpers::TestApp::new();
    let mut shell = app.started_shell().await;

    let err = shell
        .login(&Credential::new("bob", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_credentials());
    assert_eq!(shell.state(), &ShellState::Unauthenticated);
    assert_eq!(shell.screen(), Screen::Show(ViewId::Login));
    assert!(app.stored().await.is_none());
}

#[tokio::test]
async fn test_logout_returns_to_login_and_clears_storage() {
    let app = helpers::TestApp::new();
    app.preload(r#"{"identity":"u3","role":"consultant","name":"Cho"}"#)
        .await;
    let mut shell = app.started_shell().await;
    assert_eq!(shell.screen(), Screen::Show(ViewId::ConsultantDashboard));

    let view = shell.on_logout().await.unwrap();

    assert_eq!(view, ViewId::Login);
    assert_eq!(shell.state(), &ShellState::Unauthenticated);
    assert!(app.sessions().restore_session().await.is_none());
}

#[tokio::test]
async fn test_each_role_lands_on_its_own_dashboard() {
    let app = helpers::TestApp::new();
    let accounts = [
        ("ana", "pw-ana", ViewId::AdminDashboard),
        ("bob", "pw-bob", ViewId::AudiovisualDashboard),
        ("cho", "pw-cho", ViewId::ConsultantDashboard),
        ("dara", "pw-dara", ViewId::TeacherDashboard),
        ("eli", "pw-eli", ViewId::StudentDashboard),
    ];

    for (username, secret, expected) in accounts {
        let mut shell = app.started_shell().await;
        let view = shell
            .login(&Credential::new(username, secret))
            .await
            .unwrap();
        assert_eq!(view, expected, "{username}");

        // A restart with the stored session lands on the same view
        let restarted = app.started_shell().await;
        assert_eq!(restarted.screen(), Screen::Show(expected), "{username}");

        shell.on_logout().await.unwrap();
    }
}

#[tokio::test]
async fn test_router_is_total_and_injective() {
    let router = RoleRouter::new();
    let mut views: Vec<ViewId> = UserRole::ALL
        .into_iter()
        .map(|role| router.select_view(Some(role)))
        .collect();

    assert!(views.iter().all(ViewId::is_dashboard));
    views.sort_by_key(|v| v.as_str());
    views.dedup();
    assert_eq!(views.len(), UserRole::ALL.len());
    assert_eq!(router.select_view(None), ViewId::Login);
}

#[tokio::test]
async fn test_shell_state_never_mixes_roles() {
    let app = helpers::TestApp::new();
    let mut shell = app.started_shell().await;

    shell
        .login(&Credential::new("ana", "pw-ana"))
        .await
        .unwrap();
    shell.on_logout().await.unwrap();
    shell
        .login(&Credential::new("eli", "pw-eli"))
        .await
        .unwrap();

    let session = shell.state().session().unwrap();
    assert_eq!(session.role(), UserRole::ConsultantStudent);
    assert_eq!(session.display_name(), "Eli");
    assert_eq!(shell.screen(), Screen::Show(ViewId::StudentDashboard));
}
