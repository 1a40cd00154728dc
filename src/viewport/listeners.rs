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

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Shared pointer streams a component can listen on beyond its own area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerChannel {
    Move,
    Up,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, PointerChannel>,
}

/// Registry of listeners on the session-wide pointer streams.
///
/// The host only routes a stream's events while someone listens on it.
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct InputBus {
    registry: Rc<RefCell<Registry>>,
}

impl InputBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the subscription drops.
    #[must_use = "the listener is removed as soon as the subscription is dropped"]
    pub fn subscribe(&self, channel: PointerChannel) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, channel);
        tracing::trace!(id, ?channel, "pointer listener registered");
        Subscription { registry: Rc::downgrade(&self.registry), id }
    }

    #[must_use]
    pub fn has_listeners(&self, channel: PointerChannel) -> bool {
        self.registry.borrow().listeners.values().any(|c| *c == channel)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// A live registration on an [`InputBus`]; deregisters on drop.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::trace!(id = self.id, "pointer listener deregistered");
        }
    }
}
