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

use super::annotate::{Cursor, StyleHints};
use super::listeners::{InputBus, PointerChannel, Subscription};
use super::selection::{SelectionGuard, TextSelection};
use super::surface::Surface;
use super::ViewportOptions;

/// Rows kept above the first item's leading inset after first-layout centering.
pub const CENTERING_MARGIN: i32 = 40;

/// Pointer and scroll position captured when a pan gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub start_x: i32,
    pub start_y: i32,
    pub start_scroll_left: i32,
    pub start_scroll_top: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanState {
    Idle,
    Dragging(DragSession),
}

/// Drag-to-pan and auto-scroll state for one mounted viewport.
///
/// Every operation is a no-op against a surface that is not laid out yet.
pub struct ViewportController {
    options: ViewportOptions,
    pan: PanState,
    /// Set by the first pointer move of a gesture, for cursor feedback.
    grabbing: bool,
    centered: bool,
    /// Client height seen by the last content notification.
    observed_client_height: i32,
    selection: TextSelection,
    selection_guard: Option<SelectionGuard>,
    /// Pointer move/up registrations held from mount until unmount.
    subscriptions: Vec<Subscription>,
}

impl ViewportController {
    /// Mount a viewport: registers its pointer move/up listeners on `bus`.
    pub fn mount(options: ViewportOptions, bus: &InputBus, selection: &TextSelection) -> Self {
        let subscriptions =
            vec![bus.subscribe(PointerChannel::Move), bus.subscribe(PointerChannel::Up)];
        tracing::debug!(
            id = options.id.as_deref().unwrap_or(""),
            enable_pan = options.enable_pan,
            scrollbars = options.scrollbars,
            "viewport mounted"
        );
        Self {
            options,
            pan: PanState::Idle,
            grabbing: false,
            centered: false,
            observed_client_height: 0,
            selection: selection.clone(),
            selection_guard: None,
            subscriptions,
        }
    }

    /// Tear down: ends any gesture, restores selection, drops listeners.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.pan = PanState::Idle;
        self.grabbing = false;
        self.selection_guard = None;
        self.subscriptions.clear();
        tracing::debug!("viewport unmounted");
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    #[must_use]
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    #[must_use]
    pub fn pan_state(&self) -> PanState {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.pan, PanState::Dragging(_))
    }

    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    #[must_use]
    pub fn observed_client_height(&self) -> i32 {
        self.observed_client_height
    }

    /// Cursor the whole surface should show, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        if !self.options.enable_pan {
            None
        } else if self.grabbing {
            Some(Cursor::Grabbing)
        } else {
            Some(Cursor::Grab)
        }
    }

    pub fn pointer_down(&mut self, surface: &impl Surface, x: i32, y: i32) {
        if !self.is_mounted() {
            return;
        }
        let Some(metrics) = surface.metrics() else {
            return;
        };
        if self.options.enable_pan {
            self.pan = PanState::Dragging(DragSession {
                start_x: x,
                start_y: y,
                start_scroll_left: metrics.scroll_left,
                start_scroll_top: metrics.scroll_top,
            });
            tracing::debug!(x, y, "drag start");
        }
        if self.selection_guard.is_none() {
            self.selection_guard = Some(self.selection.suspend());
        }
    }

    pub fn pointer_move(&mut self, surface: &mut impl Surface, x: i32, y: i32) {
        let PanState::Dragging(session) = self.pan else {
            return;
        };
        self.grabbing = true;
        if surface.metrics().is_none() {
            return;
        }
        let dx = x - session.start_x;
        let dy = y - session.start_y;
        surface.set_scroll(session.start_scroll_left - dx, session.start_scroll_top - dy);
    }

    pub fn pointer_up(&mut self) {
        if self.options.enable_pan && self.is_dragging() {
            self.pan = PanState::Idle;
            self.grabbing = false;
            tracing::debug!("drag end");
        }
        self.selection_guard = None;
    }

    /// Center the initial scroll position once, for pannable viewports.
    ///
    /// Horizontal offset goes to the middle of the scroll range; vertical
    /// offset to the first item's leading inset minus [`CENTERING_MARGIN`].
    pub fn first_layout(&mut self, surface: &mut impl Surface, first_item: Option<&StyleHints>) {
        if !self.options.enable_pan || self.centered || !self.is_mounted() {
            return;
        }
        let Some(metrics) = surface.metrics() else {
            return;
        };
        let inset = first_item.and_then(|hints| hints.leading_inset).unwrap_or(0);
        let left = (metrics.scroll_width - metrics.client_width) / 2;
        let top = inset - CENTERING_MARGIN;
        surface.set_scroll(left, top);
        self.centered = true;
        tracing::debug!(left, top, "viewport centered");
    }

    /// The host replaced the rendered item list.
    ///
    /// Scrolls to the bottom when the visible height is unchanged since the
    /// last notification; otherwise records the new height. Content appended
    /// during the same frame as a resize is treated as a resize.
    pub fn content_replaced(&mut self, surface: &mut impl Surface) {
        if !self.is_mounted() {
            return;
        }
        let Some(metrics) = surface.metrics() else {
            return;
        };
        if metrics.client_height == self.observed_client_height {
            tracing::debug!(target_top = metrics.scroll_height, "auto-scroll to bottom");
            surface.smooth_scroll_to(metrics.scroll_height);
        } else {
            tracing::debug!(
                from = self.observed_client_height,
                to = metrics.client_height,
                "viewport height changed"
            );
            self.observed_client_height = metrics.client_height;
        }
    }
}

impl Drop for ViewportController {
    fn drop(&mut self) {
        self.unmount();
    }
}
