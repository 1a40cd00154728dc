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

use std::cell::Cell;
use std::rc::Rc;

/// Session-wide "text selection enabled" state.
///
/// Selection is suspended while at least one [`SelectionGuard`] is alive.
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct TextSelection {
    suspensions: Rc<Cell<usize>>,
}

impl TextSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.suspensions.get() == 0
    }

    /// Suspend selection until the returned guard is dropped.
    #[must_use = "selection is restored as soon as the guard is dropped"]
    pub fn suspend(&self) -> SelectionGuard {
        self.suspensions.set(self.suspensions.get() + 1);
        SelectionGuard { suspensions: Rc::clone(&self.suspensions) }
    }
}

/// Restores text selection on drop.
#[derive(Debug)]
pub struct SelectionGuard {
    suspensions: Rc<Cell<usize>>,
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        self.suspensions.set(self.suspensions.get().saturating_sub(1));
    }
}
