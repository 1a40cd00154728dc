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

use super::{App, AppEvent, ChatMessage};
use std::sync::Arc;

/// Send the chat form contents: echo them as a user bubble and ask the
/// service to transform them. Blank input is ignored.
pub fn submit_input(app: &mut App) {
    let text = app.input.text().to_owned();
    if text.trim().is_empty() {
        return;
    }
    app.input.clear();
    app.push_message(ChatMessage::user(text.clone()));
    app.request_started();

    let service = Arc::clone(&app.service);
    let tx = app.event_tx.clone();
    tokio::spawn(async move {
        let event = match service.process_text(&text).await {
            Ok(reply) => AppEvent::Reply(reply),
            Err(err) => AppEvent::ServiceFailed(err),
        };
        let _ = tx.send(event);
    });
}

/// Action 1: ask the service for its greeting.
pub fn request_greeting(app: &mut App) {
    app.request_started();
    let service = Arc::clone(&app.service);
    let tx = app.event_tx.clone();
    tokio::spawn(async move {
        let event = match service.say_hello().await {
            Ok(greeting) => AppEvent::Greeting(greeting),
            Err(err) => AppEvent::ServiceFailed(err),
        };
        let _ = tx.send(event);
    });
}
