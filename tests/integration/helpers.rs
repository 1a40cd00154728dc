use chat_viewport::app::{App, handle_app_event};
use chat_viewport::service::{Backend, ServiceHandle, spawn_service};
use chat_viewport::viewport::ViewportOptions;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::sync::Arc;

/// Build an `App` backed by the mock service.
/// No terminal -- just state. Must run inside a tokio runtime.
pub fn test_app(enable_pan: bool) -> (App, ServiceHandle) {
    let service = spawn_service(Backend::Mock);
    let options = ViewportOptions { enable_pan, ..ViewportOptions::default() };
    (App::new(options, Arc::new(service.clone())), service)
}

/// One frame of the TUI loop: animate, render, then post-layout work.
pub fn frame(app: &mut App, width: u16, height: u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    app.surface.tick();
    terminal.draw(|f| chat_viewport::ui::render(f, app)).unwrap();
    app.after_layout();
}

/// Wait for the next service result and feed it to the app.
pub async fn next_app_event(app: &mut App) {
    let event = app.event_rx.recv().await.expect("event channel closed");
    handle_app_event(app, event);
}
