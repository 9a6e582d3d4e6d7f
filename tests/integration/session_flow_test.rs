//! Integration tests for session persistence across process restarts.

mod helpers;

use std::sync::Arc;

use avdesk_core::config::StorageConfig;
use avdesk_entity::user::{Credential, UserRole};
use avdesk_storage::StoreManager;

#[tokio::test]
async fn test_fresh_storage_restores_nothing() {
    let app = helpers::TestApp::new();

    assert!(app.sessions().restore_session().await.is_none());
    assert!(app.stored().await.is_none());
}

#[tokio::test]
async fn test_login_survives_restart() {
    let app = helpers::TestApp::new();

    let session = app
        .sessions()
        .login(&Credential::new("dara", "pw-dara"))
        .await
        .unwrap();

    // New process over the same slot
    let restored = app.sessions().restore_session().await.unwrap();
    assert_eq!(restored.identity_id(), session.identity_id());
    assert_eq!(restored.role(), UserRole::ConsultantTeacher);
    assert_eq!(restored.display_name(), "Dara");
}

#[tokio::test]
async fn test_wrong_secret_leaves_storage_unchanged() {
    let app = helpers::TestApp::new();
    app.preload(r#"{"identity":"u5","role":"consultant-student","name":"Eli"}"#)
        .await;
    let before = app.stored().await;

    let err = app
        .sessions()
        .login(&Credential::new("bob", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_credentials());
    assert_eq!(app.stored().await, before);
}

#[tokio::test]
async fn test_unknown_user_is_indistinguishable_from_wrong_secret() {
    let app = helpers::TestApp::new();

    let unknown = app
        .sessions()
        .login(&Credential::new("nobody", "pw-ana"))
        .await
        .unwrap_err();
    let wrong = app
        .sessions()
        .login(&Credential::new("ana", "nope"))
        .await
        .unwrap_err();

    assert_eq!(unknown.to_string(), wrong.to_string());
    assert!(app.stored().await.is_none());
}

#[tokio::test]
async fn test_logout_then_restart_is_logged_out() {
    let app = helpers::TestApp::new();
    let sessions = app.sessions();
    sessions
        .login(&Credential::new("cho", "pw-cho"))
        .await
        .unwrap();

    sessions.logout().await.unwrap();
    sessions.logout().await.unwrap();

    assert!(app.sessions().restore_session().await.is_none());
}

#[tokio::test]
async fn test_relogin_replaces_stored_session() {
    let app = helpers::TestApp::new();
    let sessions = app.sessions();
    sessions
        .login(&Credential::new("ana", "pw-ana"))
        .await
        .unwrap();
    sessions
        .login(&Credential::new("eli", "pw-eli"))
        .await
        .unwrap();

    let restored = app.sessions().restore_session().await.unwrap();
    assert_eq!(restored.role(), UserRole::ConsultantStudent);
    assert_eq!(restored.display_name(), "Eli");
}

#[tokio::test]
async fn test_corrupt_records_are_treated_as_absent() {
    for raw in [
        "not json",
        r#"{"identity":"u1","role":"superuser","name":"Ana"}"#,
        r#"{"identity":"u1","name":"Ana"}"#,
        r#"{"identity":"","role":"admin","name":"Ana"}"#,
        r#"{"identity":"u1","role":"admin","name":""}"#,
    ] {
        let app = helpers::TestApp::new();
        app.preload(raw).await;

        assert!(app.sessions().restore_session().await.is_none(), "{raw}");
        // Restore never rewrites the slot
        assert_eq!(app.stored().await.as_deref(), Some(raw));
    }
}

#[tokio::test]
async fn test_verify_on_restore_drops_stale_identity() {
    let mut app = helpers::TestApp::new();
    app.preload(r#"{"identity":"u9","role":"admin","name":"Gone"}"#)
        .await;

    assert!(app.sessions().restore_session().await.is_some());

    app.config.verify_identity_on_restore = true;
    assert!(app.sessions().restore_session().await.is_none());
}

#[tokio::test]
async fn test_file_backend_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        provider: "file".to_string(),
        data_dir: dir.path().to_string_lossy().to_string(),
    };

    let first = helpers::TestApp::with_backend(Arc::new(StoreManager::new(&config).await.unwrap()));
    first
        .sessions()
        .login(&Credential::new("bob", "pw-bob"))
        .await
        .unwrap();
    drop(first);

    let second =
        helpers::TestApp::with_backend(Arc::new(StoreManager::new(&config).await.unwrap()));
    let restored = second.sessions().restore_session().await.unwrap();
    assert_eq!(restored.role(), UserRole::Authorized);
    assert_eq!(restored.display_name(), "Bob");
}
