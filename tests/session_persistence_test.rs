//! Session persistence tests
//!
//! The signed-in user survives a restart through the file in the data
//! directory and disappears with logout.

mod utils;

use mangaplus_lib::modules::auth::infrastructure::SESSION_FILE_NAME;
use mangaplus_lib::modules::auth::RegistrationForm;
use tempfile::TempDir;
use utils::helpers;

#[tokio::test]
async fn test_login_survives_restart() {
    let dir = TempDir::new().unwrap();

    let first = helpers::start_app(dir.path()).await;
    assert!(!first.auth_service.is_signed_in().await);
    helpers::sign_in(&first).await;
    first.auth_service.toggle_favorite("3").await.unwrap();
    assert!(dir.path().join(SESSION_FILE_NAME).exists());

    let second = helpers::start_app(dir.path()).await;
    let user = second.auth_service.current_user().await.unwrap();
    assert_eq!(user.email, helpers::DEMO_EMAIL);
    assert!(user.is_favorite("3"));
}

#[tokio::test]
async fn test_logout_removes_session_file() {
    let dir = TempDir::new().unwrap();

    let app = helpers::start_app(dir.path()).await;
    helpers::sign_in(&app).await;
    app.auth_service.logout().await.unwrap();

    assert!(!dir.path().join(SESSION_FILE_NAME).exists());
    let restarted = helpers::start_app(dir.path()).await;
    assert!(restarted.auth_service.current_user().await.is_none());
}

#[tokio::test]
async fn test_corrupt_session_file_starts_signed_out() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SESSION_FILE_NAME), "{ not json").unwrap();

    let app = helpers::start_app(dir.path()).await;
    assert!(!app.auth_service.is_signed_in().await);
}

#[tokio::test]
async fn test_registered_user_is_restored() {
    let dir = TempDir::new().unwrap();

    let app = helpers::start_app(dir.path()).await;
    let form = RegistrationForm {
        username: "قارئ_جديد".to_string(),
        email: "new@example.com".to_string(),
        password: "Secret123".to_string(),
        confirm_password: "Secret123".to_string(),
        accept_terms: true,
    };
    let registered = app.auth_service.register(&form).await.unwrap();
    assert!(registered.favorites.is_empty());

    let restarted = helpers::start_app(dir.path()).await;
    let user = restarted.auth_service.current_user().await.unwrap();
    assert_eq!(user.id, registered.id);
    assert_eq!(user.username, "قارئ_جديد");
}

#[tokio::test]
async fn test_reading_progress_is_persisted() {
    let dir = TempDir::new().unwrap();

    let app = helpers::start_app(dir.path()).await;
    helpers::sign_in(&app).await;
    let session = app.reader_service.open("2", "ch1-2").await.unwrap();
    app.reader_service.go_to_page(session.id, 5).await.unwrap();

    let restarted = helpers::start_app(dir.path()).await;
    let history = restarted.auth_service.reading_history().await.unwrap();
    let latest = &history[0];
    assert_eq!(latest.manga_id, "2");
    assert_eq!(latest.chapter_id, "ch1-2");
    assert!(latest.progress > 0);
}
