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

mod annotate;
mod controller;
mod listeners;
mod selection;
mod surface;

pub use annotate::{Cursor, StyleHints, TRAILING_PAD_STEP, annotate};
pub use controller::{CENTERING_MARGIN, DragSession, PanState, ViewportController};
pub use listeners::{InputBus, PointerChannel, Subscription};
pub use selection::{SelectionGuard, TextSelection};
pub use surface::{Metrics, ScrollSurface, Surface};

use serde::{Deserialize, Serialize};

/// Options fixed for the lifetime of a mounted viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportOptions {
    /// Draw a styled scrollbar; `false` hides scrollbar affordances.
    pub scrollbars: bool,
    /// Allow click-and-drag panning of the content.
    pub enable_pan: bool,
    pub id: Option<String>,
    pub class: Option<String>,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self { scrollbars: true, enable_pan: false, id: None, class: None }
    }
}
