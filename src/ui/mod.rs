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

mod chat;
mod header;
mod input;
mod layout;
pub mod theme;

use crate::app::{App, AppStatus};
use crate::viewport::Cursor;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute(frame.area());

    if areas.header.height > 0 {
        header::render(frame, areas.header, app);
        render_separator(frame, areas.header_sep);
    }

    chat::render(frame, areas.body, app);

    render_separator(frame, areas.input_sep);
    if areas.actions.height > 0 {
        render_actions(frame, areas.actions, app);
    }
    input::render(frame, areas.input, app);

    if let Some(footer) = areas.footer {
        render_footer(frame, footer, app);
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(line, Style::default().fg(theme::DIM)))),
        area,
    );
}

const FOOTER_PAD: u16 = 2;

fn render_actions(frame: &mut Frame, area: Rect, app: &App) {
    let padded =
        Rect { x: area.x + FOOTER_PAD, width: area.width.saturating_sub(FOOTER_PAD), ..area };
    let button = Style::default().fg(Color::White).bg(theme::BUBBLE_BG);
    let pan_label = if app.viewport.options().enable_pan { "Pan: on" } else { "Pan: off" };
    let line = Line::from(vec![
        Span::styled(" F1 ", button.add_modifier(Modifier::BOLD)),
        Span::styled(" Say hello ", button),
        Span::raw("  "),
        Span::styled(" F2 ", button.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {pan_label} "), button),
    ]);
    frame.render_widget(Paragraph::new(line), padded);
}

const FOOTER_SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let mut spans = vec![
        Span::styled("Enter", Style::default().fg(Color::White)),
        Span::styled(" send  ", Style::default().fg(theme::DIM)),
        Span::styled("Esc", Style::default().fg(Color::White)),
        Span::styled(" quit", Style::default().fg(theme::DIM)),
    ];
    match app.viewport.cursor() {
        Some(Cursor::Grabbing) => {
            spans.push(Span::styled("  [grabbing]", Style::default().fg(theme::ACCENT)));
        }
        Some(_) => spans.push(Span::styled("  [drag to pan]", Style::default().fg(theme::DIM))),
        None => {}
    }
    if !app.text_selection.is_enabled() {
        spans.push(Span::styled("  [selection off]", Style::default().fg(theme::DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), padded);

    let status = match app.status {
        AppStatus::Ready => None,
        AppStatus::Waiting => {
            let idx = app.spinner_frame % FOOTER_SPINNER_FRAMES.len();
            Some((format!("{} waiting", FOOTER_SPINNER_FRAMES[idx]), theme::STATUS_WAITING))
        }
        AppStatus::Error => Some(("service error".to_owned(), theme::STATUS_ERROR)),
    };
    if let Some((text, color)) = status {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
                .alignment(ratatui::layout::Alignment::Right),
            padded,
        );
    }
}
