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

use super::{Backend, MessageService, ServiceError};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum Request {
    SayHello { reply: oneshot::Sender<String> },
    ProcessText { text: String, reply: oneshot::Sender<String> },
}

/// Client side of a running message service.
///
/// Cloning shares the same service task. The task stops on
/// [`ServiceHandle::shutdown`] or once every handle is dropped.
#[derive(Clone)]
pub struct ServiceHandle {
    tx: mpsc::UnboundedSender<Request>,
    task: std::sync::Arc<JoinHandle<()>>,
}

/// Start a message service task answering with `backend`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_service(backend: Backend) -> ServiceHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<Request>();
    let task = tokio::spawn(async move {
        tracing::info!(?backend, "message service started");
        while let Some(request) = rx.recv().await {
            match request {
                Request::SayHello { reply } => {
                    tracing::debug!("SayHello");
                    let _ = reply.send(backend.greeting());
                }
                Request::ProcessText { text, reply } => {
                    tracing::debug!(len = text.len(), "ProcessText");
                    let _ = reply.send(backend.transform(&text));
                }
            }
        }
        tracing::info!("message service stopped");
    });
    ServiceHandle { tx, task: std::sync::Arc::new(task) }
}

impl ServiceHandle {
    /// Stop the service task. Pending and later requests fail with
    /// [`ServiceError::Stopped`] or [`ServiceError::NoReply`].
    pub fn shutdown(&self) {
        self.task.abort();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    async fn call(
        &self,
        make: impl FnOnce(oneshot::Sender<String>) -> Request,
    ) -> Result<String, ServiceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send(make(reply_tx)).map_err(|_| ServiceError::Stopped)?;
        reply_rx.await.map_err(|_| ServiceError::NoReply)
    }
}

#[async_trait]
impl MessageService for ServiceHandle {
    async fn say_hello(&self) -> Result<String, ServiceError> {
        self.call(|reply| Request::SayHello { reply }).await
    }

    async fn process_text(&self, text: &str) -> Result<String, ServiceError> {
        let text = text.to_owned();
        self.call(move |reply| Request::ProcessText { text, reply }).await
    }
}
