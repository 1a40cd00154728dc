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

//! The message endpoint the chat window talks to.
//!
//! Two request/response operations: a zero-argument greeting and a text
//! transform. The endpoint runs as a local task started with the app; see
//! [`spawn_service`].

mod server;

pub use server::{ServiceHandle, spawn_service};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("message service is not running")]
    Stopped,
    #[error("message service dropped the request")]
    NoReply,
}

#[async_trait]
pub trait MessageService: Send + Sync {
    async fn say_hello(&self) -> Result<String, ServiceError>;
    async fn process_text(&self, text: &str) -> Result<String, ServiceError>;
}

/// Which implementation answers requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Greets with "hello" and reverses text.
    #[default]
    Local,
    /// Canned replies for UI work without the real endpoint.
    Mock,
}

impl Backend {
    #[must_use]
    pub fn greeting(self) -> String {
        match self {
            Self::Local => "hello".to_owned(),
            Self::Mock => "Hello from mock".to_owned(),
        }
    }

    #[must_use]
    pub fn transform(self, text: &str) -> String {
        let reversed: String = text.chars().rev().collect();
        match self {
            Self::Local => reversed,
            Self::Mock => format!("mocked: {reversed}"),
        }
    }
}
