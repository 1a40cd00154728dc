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

//! The scrollable surface a [`ViewportController`](super::ViewportController) drives.
//!
//! The controller never clamps offsets itself. It hands raw offsets to the
//! surface, and the surface clamps them to its scroll range the way a
//! browser element clamps `scrollLeft`/`scrollTop`.

/// Snapshot of a surface's scroll geometry, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub scroll_left: i32,
    pub scroll_top: i32,
    pub scroll_width: i32,
    pub scroll_height: i32,
    pub client_width: i32,
    pub client_height: i32,
}

impl Metrics {
    #[must_use]
    pub fn max_scroll_left(&self) -> i32 {
        (self.scroll_width - self.client_width).max(0)
    }

    #[must_use]
    pub fn max_scroll_top(&self) -> i32 {
        (self.scroll_height - self.client_height).max(0)
    }
}

pub trait Surface {
    /// Current geometry, or `None` while the surface is not laid out yet.
    fn metrics(&self) -> Option<Metrics>;

    /// Jump to the given offsets. Out-of-range values are clamped.
    fn set_scroll(&mut self, left: i32, top: i32);

    /// Animate the vertical offset towards `top` over the next frames.
    fn smooth_scroll_to(&mut self, top: i32);
}

/// Fraction of the remaining distance covered per animation frame.
const SMOOTH_STEP: f32 = 0.5;

/// Distance below which the animation snaps onto its target.
const SNAP_DISTANCE: f32 = 0.5;

/// A cell-grid scroll surface backed by the chat area of the terminal.
///
/// Unmounted until the first [`ScrollSurface::layout`] call with a non-empty
/// client area.
#[derive(Debug, Default)]
pub struct ScrollSurface {
    mounted: bool,
    scroll_left: i32,
    scroll_top: i32,
    scroll_width: i32,
    scroll_height: i32,
    client_width: i32,
    client_height: i32,
    /// Pending smooth-scroll target, cleared once reached or on a direct jump.
    smooth_target: Option<i32>,
    /// Fractional vertical position while animating.
    smooth_pos: f32,
}

impl ScrollSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the geometry produced by the latest render pass.
    pub fn layout(
        &mut self,
        content_width: i32,
        content_height: i32,
        client_width: i32,
        client_height: i32,
    ) {
        self.client_width = client_width.max(0);
        self.client_height = client_height.max(0);
        self.scroll_width = content_width.max(self.client_width);
        self.scroll_height = content_height.max(self.client_height);
        self.mounted = self.client_width > 0 && self.client_height > 0;
        self.clamp();
    }

    /// Forget all geometry, as when the hosting area goes away.
    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        (self.scroll_left, self.scroll_top)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.smooth_target.is_some()
    }

    /// Scroll by a relative amount, as a wheel notch does.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.set_scroll(self.scroll_left + dx, self.scroll_top + dy);
    }

    /// Advance a pending smooth scroll by one frame.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self) {
        let Some(target) = self.smooth_target else {
            return;
        };
        let target = target.clamp(0, self.geometry().max_scroll_top());
        let delta = target as f32 - self.smooth_pos;
        if delta.abs() < SNAP_DISTANCE {
            self.smooth_pos = target as f32;
            self.smooth_target = None;
        } else {
            self.smooth_pos += delta * SMOOTH_STEP;
        }
        self.scroll_top = self.smooth_pos.round() as i32;
    }

    fn geometry(&self) -> Metrics {
        Metrics {
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
            scroll_width: self.scroll_width,
            scroll_height: self.scroll_height,
            client_width: self.client_width,
            client_height: self.client_height,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn clamp(&mut self) {
        let geometry = self.geometry();
        self.scroll_left = self.scroll_left.clamp(0, geometry.max_scroll_left());
        self.scroll_top = self.scroll_top.clamp(0, geometry.max_scroll_top());
        if self.smooth_target.is_none() {
            self.smooth_pos = self.scroll_top as f32;
        }
    }
}

impl Surface for ScrollSurface {
    fn metrics(&self) -> Option<Metrics> {
        self.mounted.then(|| self.geometry())
    }

    fn set_scroll(&mut self, left: i32, top: i32) {
        if !self.mounted {
            return;
        }
        self.smooth_target = None;
        self.scroll_left = left;
        self.scroll_top = top;
        self.clamp();
    }

    fn smooth_scroll_to(&mut self, top: i32) {
        if !self.mounted {
            return;
        }
        self.smooth_target = Some(top);
    }
}
