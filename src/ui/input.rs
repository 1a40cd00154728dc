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

use crate::app::App;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Horizontal padding to match header/footer inset.
const INPUT_PAD: u16 = 2;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };
    let prompt =
        Span::styled(format!("{} ", theme::PROMPT_CHAR), Style::default().fg(theme::ACCENT));

    if app.input.is_empty() {
        let line = Line::from(vec![
            prompt,
            Span::styled("Type your message ...", Style::default().fg(theme::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return;
    }

    // Keep the cursor visible by scrolling the line horizontally
    let content_width = padded.width.saturating_sub(PROMPT_WIDTH);
    let before_cursor: String = app.input.text().chars().take(app.input.cursor()).collect();
    let cursor_col = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
    let h_scroll = cursor_col.saturating_sub(content_width.saturating_sub(1));

    frame.render_widget(Paragraph::new(Line::from(prompt)), padded);
    let text_area = Rect { x: padded.x + PROMPT_WIDTH, width: content_width, ..padded };
    frame.render_widget(
        Paragraph::new(app.input.text().to_owned()).scroll((0, h_scroll)),
        text_area,
    );

    let cursor_x = text_area.x.saturating_add(cursor_col.saturating_sub(h_scroll));
    if cursor_x < padded.right() {
        frame.set_cursor_position((cursor_x, padded.y));
    }
}
