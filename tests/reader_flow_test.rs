//! Reader flow tests
//!
//! Drives the reader through its command functions the way the page does:
//! open a chapter, turn pages across chapter boundaries, change layout.

mod utils;

use mangaplus_lib::modules::reader::commands::*;
use mangaplus_lib::modules::reader::{PageTurn, ReadingMode};
use utils::helpers;
use uuid::Uuid;

fn session(session_id: Uuid) -> ReaderSessionRequest {
    ReaderSessionRequest { session_id }
}

#[tokio::test]
async fn test_reading_across_chapters_updates_history() {
    let state = helpers::build_state();
    helpers::sign_in(&state).await;
    let reader = &state.reader_service;

    let opened = open_reader(
        OpenReaderRequest {
            manga_id: "1".to_string(),
            chapter_id: "ch1".to_string(),
        },
        reader,
    )
    .await
    .unwrap();
    assert_eq!(opened.page_count, 24);

    let update = reader_go_to_page(
        GoToPageRequest {
            session_id: opened.id,
            page: 23,
        },
        reader,
    )
    .await
    .unwrap();
    assert_eq!(
        update.turn,
        Some(PageTurn::Page {
            page: 23,
            progress: Some(96)
        })
    );

    let crossed = reader_next_page(session(opened.id), reader).await.unwrap();
    assert_eq!(
        crossed.turn,
        Some(PageTurn::Chapter {
            chapter_id: "ch2".to_string()
        })
    );
    assert_eq!(crossed.session.chapter_id, "ch2");
    assert_eq!(crossed.session.current_page, 0);
    assert_eq!(crossed.session.page_count, 28);

    let user = state.auth_service.current_user().await.unwrap();
    let entry = user.progress_for("1", "ch2").unwrap();
    assert_eq!(entry.progress, 0);
}

#[tokio::test]
async fn test_going_back_does_not_lower_progress() {
    let state = helpers::build_state();
    helpers::sign_in(&state).await;
    let reader = &state.reader_service;

    let opened = reader.open("2", "ch1-2").await.unwrap();
    reader.go_to_page(opened.id, 10).await.unwrap();
    let back = reader_previous_page(session(opened.id), reader)
        .await
        .unwrap();

    assert_eq!(back.session.current_page, 9);
    let user = state.auth_service.current_user().await.unwrap();
    assert_eq!(user.progress_for("2", "ch1-2").unwrap().progress, 50);
}

#[tokio::test]
async fn test_signed_out_reader_still_turns_pages() {
    let state = helpers::build_state();
    let reader = &state.reader_service;

    let opened = reader.open("2", "ch1-2").await.unwrap();
    let update = reader_next_page(session(opened.id), reader).await.unwrap();

    assert_eq!(update.session.current_page, 1);
    assert!(state.auth_service.reading_history().await.is_err());
}

#[tokio::test]
async fn test_single_chapter_title_stops_at_both_ends() {
    let state = helpers::build_state();
    let reader = &state.reader_service;

    let opened = reader.open("2", "ch1-2").await.unwrap();
    let first = reader_previous_page(session(opened.id), reader)
        .await
        .unwrap();
    assert_eq!(first.turn, Some(PageTurn::Boundary));

    reader.go_to_page(opened.id, 19).await.unwrap();
    let last = reader_key_press(
        KeyPressRequest {
            session_id: opened.id,
            key: "ArrowRight".to_string(),
        },
        reader,
    )
    .await
    .unwrap();
    assert_eq!(last.turn, Some(PageTurn::Boundary));
    assert_eq!(last.session.current_page, 19);
}

#[tokio::test]
async fn test_layout_controls() {
    let state = helpers::build_state();
    let reader = &state.reader_service;
    let opened = reader.open("1", "ch1").await.unwrap();

    for _ in 0..10 {
        reader_zoom(
            ZoomRequest {
                session_id: opened.id,
                action: ZoomAction::In,
            },
            reader,
        )
        .await
        .unwrap();
    }
    let zoom = reader_zoom(
        ZoomRequest {
            session_id: opened.id,
            action: ZoomAction::Out,
        },
        reader,
    )
    .await
    .unwrap();
    assert_eq!(zoom.percent(), 175);

    let doubled = reader_set_mode(
        SetModeRequest {
            session_id: opened.id,
            mode: "double".to_string(),
        },
        reader,
    )
    .await
    .unwrap();
    assert_eq!(doubled.mode, ReadingMode::Double);

    let pages = reader_visible_pages(session(opened.id), reader)
        .await
        .unwrap();
    assert_eq!(
        pages.iter().map(|p| p.page).collect::<Vec<_>>(),
        vec![0, 1]
    );

    let bad_mode = reader_set_mode(
        SetModeRequest {
            session_id: opened.id,
            mode: "sideways".to_string(),
        },
        reader,
    )
    .await;
    assert!(bad_mode.is_err());
}

#[tokio::test]
async fn test_fullscreen_keys() {
    let state = helpers::build_state();
    let reader = &state.reader_service;
    let opened = reader.open("1", "ch1").await.unwrap();

    let key = |key: &str| KeyPressRequest {
        session_id: opened.id,
        key: key.to_string(),
    };

    let on = reader_key_press(key("f"), reader).await.unwrap();
    assert!(on.session.fullscreen);

    let ignored = reader_key_press(key("Enter"), reader).await.unwrap();
    assert!(ignored.turn.is_none());
    assert!(ignored.session.fullscreen);

    let off = reader_key_press(key("Escape"), reader).await.unwrap();
    assert!(!off.session.fullscreen);
    assert!(off.session.controls_visible);

    // Controls were just touched, so nothing hides yet
    assert!(!reader_idle_check(session(opened.id), reader).await.unwrap());
}

#[tokio::test]
async fn test_closed_session_is_gone() {
    let state = helpers::build_state();
    let reader = &state.reader_service;
    let opened = reader.open("1", "ch1").await.unwrap();

    close_reader(session(opened.id), reader).await.unwrap();

    assert_eq!(reader.open_sessions(), 0);
    assert!(reader_next_page(session(opened.id), reader).await.is_err());
    assert!(close_reader(session(opened.id), reader).await.is_err());
}

#[tokio::test]
async fn test_opening_unknown_chapter_fails() {
    let state = helpers::build_state();
    let result = open_reader(
        OpenReaderRequest {
            manga_id: "1".to_string(),
            chapter_id: "ch99".to_string(),
        },
        &state.reader_service,
    )
    .await;

    assert!(result.is_err());
}
