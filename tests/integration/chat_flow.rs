// =====
// TESTS: 8
// =====
//
// Chat window flows: submit, service replies, and viewport reactions.

use chat_viewport::app::{
    AppStatus, ChatMessage, Sender, WELCOME_MESSAGE, handle_terminal_event, request_greeting,
    submit_input,
};
use chat_viewport::error::AppError;
use chat_viewport::viewport::Surface;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use crate::helpers::{frame, next_app_event, test_app};

fn type_text(app: &mut chat_viewport::app::App, text: &str) {
    for c in text.chars() {
        handle_terminal_event(app, Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
}

#[tokio::test]
async fn submit_appends_user_then_reply() {
    let (mut app, _service) = test_app(false);
    type_text(&mut app, "hello");
    handle_terminal_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    assert_eq!(app.messages.last(), Some(&ChatMessage::user("hello")));
    assert!(app.input.is_empty());
    assert_eq!(app.status, AppStatus::Waiting);

    next_app_event(&mut app).await;
    assert_eq!(app.messages.last(), Some(&ChatMessage::bot("mocked: olleh")));
    assert_eq!(app.status, AppStatus::Ready);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let (mut app, _service) = test_app(false);
    type_text(&mut app, "   ");
    submit_input(&mut app);
    assert_eq!(app.messages.len(), 1);
    assert_eq!(app.messages[0].text, WELCOME_MESSAGE);
    assert_eq!(app.status, AppStatus::Ready);
}

#[tokio::test]
async fn greeting_action_appends_bot_line() {
    let (mut app, _service) = test_app(false);
    request_greeting(&mut app);
    next_app_event(&mut app).await;
    let last = app.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, "Hello from mock");
}

#[tokio::test]
async fn new_content_scrolls_viewport_to_bottom() {
    let (mut app, _service) = test_app(false);
    frame(&mut app, 80, 20);
    for i in 0..30 {
        app.push_message(ChatMessage::user(format!("line {i}")));
    }
    for _ in 0..40 {
        frame(&mut app, 80, 20);
    }
    let metrics = app.surface.metrics().unwrap();
    assert!(metrics.max_scroll_top() > 0);
    assert_eq!(app.surface.offset().1, metrics.max_scroll_top());
}

#[tokio::test]
async fn resize_with_new_content_does_not_scroll() {
    let (mut app, _service) = test_app(false);
    for i in 0..30 {
        app.push_message(ChatMessage::user(format!("line {i}")));
    }
    frame(&mut app, 80, 20);
    app.push_message(ChatMessage::user("one more"));
    frame(&mut app, 80, 15);
    for _ in 0..10 {
        frame(&mut app, 80, 15);
    }
    assert_eq!(app.surface.offset().1, 0);
    assert_eq!(app.viewport.observed_client_height(), 8);
}

#[tokio::test]
async fn pan_toggle_remounts_and_recenters() {
    let (mut app, _service) = test_app(false);
    frame(&mut app, 80, 20);
    assert!(!app.viewport.is_centered());
    handle_terminal_event(&mut app, Event::Key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)));
    frame(&mut app, 80, 20);
    assert!(app.viewport.options().enable_pan);
    assert!(app.viewport.is_centered());
    assert_eq!(app.input_bus.listener_count(), 2);
}

#[tokio::test]
async fn stopped_service_ends_session_with_error() {
    let (mut app, service) = test_app(false);
    service.shutdown();
    for _ in 0..10 {
        if !service.is_running() {
            break;
        }
        tokio::task::yield_now().await;
    }
    type_text(&mut app, "anyone?");
    submit_input(&mut app);
    next_app_event(&mut app).await;
    assert!(app.should_quit);
    assert_eq!(app.exit_error, Some(AppError::ServiceUnavailable));
    assert_eq!(app.messages.last().map(|m| m.sender), Some(Sender::System));
}

#[tokio::test]
async fn quitting_mid_drag_restores_selection() {
    let (mut app, _service) = test_app(true);
    frame(&mut app, 80, 20);
    let area = app.rendered_chat_area;
    app.viewport.pointer_down(&app.surface, i32::from(area.x), i32::from(area.y));
    assert!(!app.text_selection.is_enabled());
    app.viewport.unmount();
    assert!(app.text_selection.is_enabled());
    assert_eq!(app.input_bus.listener_count(), 0);
}
