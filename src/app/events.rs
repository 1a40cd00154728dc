// chat_viewport - A terminal chat window with a pannable, auto-scrolling viewport
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::input_submit::{request_greeting, submit_input};
use super::{App, AppEvent, AppStatus, ChatMessage};
use crate::error::AppError;
use crate::service::ServiceError;
use crate::viewport::{PointerChannel, ViewportOptions};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

const MOUSE_SCROLL_LINES: i32 = 3;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) => app.input.insert_str(&text),
        // Resize reaches the viewport through the next layout pass
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Esc, _) => app.should_quit = true,
        (KeyCode::Enter, _) => submit_input(app),
        (KeyCode::F(1), _) => request_greeting(app),
        (KeyCode::F(2), _) => toggle_pan(app),
        (KeyCode::Up, m) if m.contains(KeyModifiers::CONTROL) => app.surface.scroll_by(0, -1),
        (KeyCode::Down, m) if m.contains(KeyModifiers::CONTROL) => app.surface.scroll_by(0, 1),
        (KeyCode::PageUp, _) => app.surface.scroll_by(0, -page_rows(app)),
        (KeyCode::PageDown, _) => app.surface.scroll_by(0, page_rows(app)),
        (KeyCode::Backspace, _) => app.input.delete_char_before(),
        (KeyCode::Delete, _) => app.input.delete_char_after(),
        (KeyCode::Left, _) => app.input.move_left(),
        (KeyCode::Right, _) => app.input.move_right(),
        (KeyCode::Home, _) => app.input.move_home(),
        (KeyCode::End, _) => app.input.move_end(),
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => app.input.insert_char(c),
        _ => {}
    }
}

fn page_rows(app: &App) -> i32 {
    i32::from(app.rendered_chat_area.height.saturating_sub(1).max(1))
}

/// Action 2: flip panning by remounting the viewport.
pub fn toggle_pan(app: &mut App) {
    let current = app.viewport.options();
    let options = ViewportOptions { enable_pan: !current.enable_pan, ..current.clone() };
    tracing::info!(enable_pan = options.enable_pan, "remounting viewport");
    app.remount_viewport(options);
}

fn in_chat_area(app: &App, mouse: MouseEvent) -> bool {
    let area = app.rendered_chat_area;
    mouse.column >= area.x
        && mouse.column < area.right()
        && mouse.row >= area.y
        && mouse.row < area.bottom()
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if in_chat_area(app, mouse) => {
            app.viewport.pointer_down(&app.surface, x, y);
        }
        // Move and up are session-wide: they reach the viewport wherever the
        // pointer is, but only while it listens.
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            if app.input_bus.has_listeners(PointerChannel::Move) {
                app.viewport.pointer_move(&mut app.surface, x, y);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.input_bus.has_listeners(PointerChannel::Up) {
                app.viewport.pointer_up();
            }
        }
        MouseEventKind::ScrollUp if in_chat_area(app, mouse) => {
            app.surface.scroll_by(0, -MOUSE_SCROLL_LINES);
        }
        MouseEventKind::ScrollDown if in_chat_area(app, mouse) => {
            app.surface.scroll_by(0, MOUSE_SCROLL_LINES);
        }
        _ => {}
    }
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    app.request_finished();
    match event {
        AppEvent::Reply(text) | AppEvent::Greeting(text) => {
            app.push_message(ChatMessage::bot(text));
        }
        AppEvent::ServiceFailed(err) => {
            tracing::warn!("message service request failed: {err}");
            app.push_message(ChatMessage::system(format!("Error: {err}")));
            app.status = AppStatus::Error;
            if err == ServiceError::Stopped {
                app.exit_error = Some(AppError::ServiceUnavailable);
                app.should_quit = true;
            }
        }
    }
}
