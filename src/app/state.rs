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

use super::input::InputState;
use crate::error::AppError;
use crate::service::{MessageService, ServiceError};
use crate::viewport::{
    Cursor, InputBus, ScrollSurface, StyleHints, TextSelection, ViewportController,
    ViewportOptions, annotate,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub const WELCOME_MESSAGE: &str = "Welcome to the bot chat. Chat with me!";

/// Results delivered back to the UI task by background service calls.
#[derive(Debug)]
pub enum AppEvent {
    /// Reply to a submitted message.
    Reply(String),
    /// Answer to the greeting action.
    Greeting(String),
    ServiceFailed(ServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Ready,
    /// At least one service request is in flight.
    Waiting,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self { sender: Sender::System, text: text.into() }
    }

    /// Layout hints the bubble declares before viewport annotation.
    #[must_use]
    pub fn style_hints(&self) -> StyleHints {
        match self.sender {
            // Bot bubbles are clickable-looking and padded, user bubbles padded only.
            Sender::Bot => {
                StyleHints::default().with_trailing_padding(4).with_cursor(Cursor::Pointer)
            }
            Sender::User => StyleHints::default().with_trailing_padding(2),
            Sender::System => StyleHints::default(),
        }
    }
}

pub struct App {
    pub messages: Vec<ChatMessage>,
    pub input: InputState,
    pub status: AppStatus,
    pub should_quit: bool,
    /// Fatal error to report once the TUI has shut down.
    pub exit_error: Option<AppError>,
    pub title: String,
    pub description: String,
    pub viewport: ViewportController,
    pub surface: ScrollSurface,
    pub input_bus: InputBus,
    pub text_selection: TextSelection,
    pub service: Arc<dyn MessageService>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// The message list was replaced; the viewport is told after the next layout.
    pub content_replaced: bool,
    /// Service requests sent but not yet answered.
    pub pending_requests: usize,
    /// Advanced once per drawn frame; drives the footer spinner.
    pub spinner_frame: usize,
    /// Area where the chat viewport was rendered (for mouse hit-testing).
    pub rendered_chat_area: ratatui::layout::Rect,
}

impl App {
    pub fn new(options: ViewportOptions, service: Arc<dyn MessageService>) -> Self {
        let input_bus = InputBus::new();
        let text_selection = TextSelection::new();
        let viewport = ViewportController::mount(options, &input_bus, &text_selection);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            input: InputState::new(),
            status: AppStatus::Ready,
            should_quit: false,
            exit_error: None,
            title: "This is my app".to_owned(),
            description: "Description".to_owned(),
            viewport,
            surface: ScrollSurface::new(),
            input_bus,
            text_selection,
            service,
            event_tx,
            event_rx,
            content_replaced: true,
            pending_requests: 0,
            spinner_frame: 0,
            rendered_chat_area: ratatui::layout::Rect::default(),
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.content_replaced = true;
    }

    /// Replace the viewport with a freshly mounted one using `options`.
    pub fn remount_viewport(&mut self, options: ViewportOptions) {
        self.viewport.unmount();
        self.surface.unmount();
        self.viewport = ViewportController::mount(options, &self.input_bus, &self.text_selection);
        self.content_replaced = true;
    }

    /// Run the viewport's post-layout work: first-layout centering and any
    /// pending content notification. Called after every draw.
    pub fn after_layout(&mut self) {
        if !self.surface.is_mounted() {
            return;
        }
        let first =
            self.messages.first().map(|m| annotate(self.viewport.options(), m.style_hints()));
        self.viewport.first_layout(&mut self.surface, first.as_ref());
        if self.content_replaced {
            self.content_replaced = false;
            self.viewport.content_replaced(&mut self.surface);
        }
    }

    pub(super) fn request_started(&mut self) {
        self.pending_requests += 1;
        self.status = AppStatus::Waiting;
    }

    pub(super) fn request_finished(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        if self.pending_requests == 0 && self.status == AppStatus::Waiting {
            self.status = AppStatus::Ready;
        }
    }
}
