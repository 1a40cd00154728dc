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

//! Render-time style annotation for content items.
//!
//! Pure functions over declarative hints; nothing here touches viewport
//! state.

use super::ViewportOptions;

/// Extra trailing padding, in cells, added to items that already pad their
/// trailing edge. Keeps them clear of the scrollbar track.
pub const TRAILING_PAD_STEP: u16 = 1;

/// Pointer cursor an item or the viewport asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    Text,
    Grab,
    Grabbing,
}

/// Layout hints a content item declares about itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleHints {
    /// Trailing (right-side) padding in cells.
    pub trailing_padding: Option<u16>,
    pub cursor: Option<Cursor>,
    /// Leading-edge inset in rows, read by first-layout centering.
    pub leading_inset: Option<i32>,
}

impl StyleHints {
    #[must_use]
    pub fn with_trailing_padding(mut self, cells: u16) -> Self {
        self.trailing_padding = Some(cells);
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    #[must_use]
    pub fn with_leading_inset(mut self, rows: i32) -> Self {
        self.leading_inset = Some(rows);
        self
    }
}

/// Adjust an item's hints for the viewport it is rendered in.
///
/// Padded items get [`TRAILING_PAD_STEP`] more trailing padding. With panning
/// enabled the whole surface shows grab/grabbing, so item cursors are
/// dropped; without panning they pass through untouched.
#[must_use]
pub fn annotate(options: &ViewportOptions, hints: StyleHints) -> StyleHints {
    let mut out = hints;
    if let Some(padding) = hints.trailing_padding {
        out.trailing_padding = Some(padding.saturating_add(TRAILING_PAD_STEP));
    }
    if options.enable_pan {
        out.cursor = None;
    }
    out
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 7
    // =====

    use super::*;
    use pretty_assertions::assert_eq;

    fn panning() -> ViewportOptions {
        ViewportOptions { enable_pan: true, ..ViewportOptions::default() }
    }

    fn static_view() -> ViewportOptions {
        ViewportOptions::default()
    }

    #[test]
    fn pan_padded_pointer_item_keeps_padding_drops_cursor() {
        let hints = StyleHints::default().with_trailing_padding(4).with_cursor(Cursor::Pointer);
        let out = annotate(&panning(), hints);
        assert_eq!(out.trailing_padding, Some(4 + TRAILING_PAD_STEP));
        assert_eq!(out.cursor, None);
    }

    #[test]
    fn pan_padding_only_gains_increment() {
        let out = annotate(&panning(), StyleHints::default().with_trailing_padding(2));
        assert_eq!(out.trailing_padding, Some(2 + TRAILING_PAD_STEP));
    }

    #[test]
    fn pan_cursor_only_is_stripped() {
        let out = annotate(&panning(), StyleHints::default().with_cursor(Cursor::Text));
        assert_eq!(out, StyleHints::default());
    }

    #[test]
    fn pan_plain_item_is_untouched() {
        let hints = StyleHints::default().with_leading_inset(12);
        assert_eq!(annotate(&panning(), hints), hints);
    }

    #[test]
    fn static_padded_item_gains_increment_and_keeps_cursor() {
        let hints = StyleHints::default().with_trailing_padding(4).with_cursor(Cursor::Pointer);
        let out = annotate(&static_view(), hints);
        assert_eq!(out.trailing_padding, Some(4 + TRAILING_PAD_STEP));
        assert_eq!(out.cursor, Some(Cursor::Pointer));
    }

    #[test]
    fn static_cursor_only_passes_through() {
        let hints = StyleHints::default().with_cursor(Cursor::Pointer);
        assert_eq!(annotate(&static_view(), hints), hints);
    }

    #[test]
    fn padding_saturates_instead_of_overflowing() {
        let out = annotate(&static_view(), StyleHints::default().with_trailing_padding(u16::MAX));
        assert_eq!(out.trailing_padding, Some(u16::MAX));
    }
}
