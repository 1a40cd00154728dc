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

use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub header_sep: Rect,
    pub body: Rect,
    pub input_sep: Rect,
    /// Action button row (zero-height in compact mode).
    pub actions: Rect,
    pub input: Rect,
    pub footer: Option<Rect>,
}

/// Rows taken by the title and description lines.
const HEADER_HEIGHT: u16 = 2;

pub fn compute(area: Rect) -> AppLayout {
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < 8 {
        // Ultra-compact: chat and input only
        let [body, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        AppLayout {
            header: zero,
            header_sep: zero,
            body,
            input_sep: Rect::new(area.x, input.y, area.width, 0),
            actions: Rect::new(area.x, input.y, area.width, 0),
            input,
            footer: None,
        }
    } else {
        let [header, header_sep, body, input_sep, actions, input, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout { header, header_sep, body, input_sep, actions, input, footer: Some(footer) }
    }
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 6
    // =====

    use super::*;
    use pretty_assertions::assert_eq;

    fn area(w: u16, h: u16) -> Rect {
        Rect::new(0, 0, w, h)
    }

    fn total_height(layout: &AppLayout) -> u16 {
        layout.header.height
            + layout.header_sep.height
            + layout.body.height
            + layout.input_sep.height
            + layout.actions.height
            + layout.input.height
            + layout.footer.map_or(0, |f| f.height)
    }

    fn visible_areas(layout: &AppLayout) -> Vec<Rect> {
        let mut areas = vec![
            layout.header,
            layout.header_sep,
            layout.body,
            layout.input_sep,
            layout.actions,
            layout.input,
        ];
        if let Some(f) = layout.footer {
            areas.push(f);
        }
        areas.into_iter().filter(|r| r.height > 0).collect()
    }

    #[test]
    fn normal_terminal_has_all_rows() {
        let layout = compute(area(80, 24));
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.input.height, 1);
        assert_eq!(layout.actions.height, 1);
        assert_eq!(layout.body.height, 24 - 7);
        assert!(layout.footer.is_some());
    }

    #[test]
    fn normal_areas_sum_to_total() {
        assert_eq!(total_height(&compute(area(80, 24))), 24);
    }

    #[test]
    fn areas_are_ordered_without_overlap() {
        let layout = compute(area(80, 30));
        let areas = visible_areas(&layout);
        for pair in areas.windows(2) {
            assert!(pair[0].bottom() <= pair[1].y, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn compact_terminal_drops_chrome() {
        let layout = compute(area(80, 6));
        assert_eq!(layout.header.height, 0);
        assert_eq!(layout.actions.height, 0);
        assert!(layout.footer.is_none());
        assert_eq!(layout.body.height, 5);
    }

    #[test]
    fn compact_areas_sum_to_total() {
        assert_eq!(total_height(&compute(area(40, 7))), 7);
    }

    #[test]
    fn boundary_height_eight_is_normal() {
        let layout = compute(area(80, 8));
        assert!(layout.footer.is_some());
        assert_eq!(layout.body.height, 1);
    }
}
