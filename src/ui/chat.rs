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

use crate::app::{App, ChatMessage, Sender};
use crate::ui::theme;
use crate::viewport::{Cursor, ViewportOptions, annotate};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Avatar column plus the space after it.
const AVATAR_WIDTH: usize = 2;

/// One space of bubble padding on each side of the text.
const BUBBLE_INSET: usize = 2;

/// Wrap width used on a pannable canvas, so long messages extend sideways.
const PAN_WRAP_WIDTH: usize = 120;

/// A laid-out message: rows of spans plus how it aligns.
struct Bubble {
    rows: Vec<Vec<Span<'static>>>,
    row_width: usize,
    trailing_padding: usize,
    align_right: bool,
}

impl Bubble {
    fn width(&self) -> usize {
        self.row_width + self.trailing_padding
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    app.rendered_chat_area = area;
    let options = app.viewport.options().clone();
    let gutter = u16::from(options.scrollbars);
    let client_width = area.width.saturating_sub(gutter);

    let wrap_width = text_wrap_width(usize::from(client_width), options.enable_pan);
    let bubbles: Vec<Bubble> =
        app.messages.iter().map(|m| build_bubble(m, &options, wrap_width)).collect();
    let content_width =
        bubbles.iter().map(Bubble::width).max().unwrap_or(0).max(usize::from(client_width));
    let lines = layout_lines(&bubbles, content_width);
    let content_height = lines.len();

    app.surface.layout(
        to_i32(content_width),
        to_i32(content_height),
        i32::from(client_width),
        i32::from(area.height),
    );
    let (left, top) = app.surface.offset();
    let scroll = (to_u16(top), to_u16(left));

    // Short history sits at the bottom, right above the input
    let render_area = match u16::try_from(content_height) {
        Ok(height) if height < area.height => Rect {
            x: area.x,
            y: area.y + (area.height - height),
            width: client_width,
            height,
        },
        _ => Rect { width: client_width, ..area },
    };
    frame.render_widget(Paragraph::new(lines).scroll(scroll), render_area);

    if options.scrollbars && area.width > 0 && area.height > 0 {
        render_scrollbars(frame, area, content_width, content_height, scroll);
    }
}

fn render_scrollbars(
    frame: &mut Frame,
    area: Rect,
    content_width: usize,
    content_height: usize,
    (top, left): (u16, u16),
) {
    let thumb = Style::default().fg(theme::SCROLL_THUMB);
    let track = Style::default().fg(theme::SCROLL_TRACK);

    let mut vertical = ScrollbarState::new(content_height)
        .position(usize::from(top))
        .viewport_content_length(usize::from(area.height));
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_style(thumb)
            .track_style(track),
        area,
        &mut vertical,
    );

    let client_width = usize::from(area.width.saturating_sub(1));
    if content_width > client_width {
        let mut horizontal = ScrollbarState::new(content_width)
            .position(usize::from(left))
            .viewport_content_length(client_width);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(thumb)
                .track_style(track),
            Rect { width: area.width.saturating_sub(1), ..area },
            &mut horizontal,
        );
    }
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Paragraph scroll offsets are `u16`; saturate rather than wrap.
fn to_u16(offset: i32) -> u16 {
    u16::try_from(offset.max(0)).unwrap_or(u16::MAX)
}

/// Text columns available inside a bubble: 70% of the client width, or a
/// wide canvas when panning.
fn text_wrap_width(client_width: usize, enable_pan: bool) -> usize {
    let bounded = (client_width * 7 / 10).saturating_sub(AVATAR_WIDTH + BUBBLE_INSET).max(1);
    if enable_pan { bounded.max(PAN_WRAP_WIDTH) } else { bounded }
}

fn build_bubble(message: &ChatMessage, options: &ViewportOptions, wrap_width: usize) -> Bubble {
    let hints = annotate(options, message.style_hints());
    let trailing_padding = usize::from(hints.trailing_padding.unwrap_or(0));
    let wrapped = wrap_text(&message.text, wrap_width);

    if message.sender == Sender::System {
        let style = Style::default().fg(theme::SYSTEM_FG).add_modifier(Modifier::ITALIC);
        let row_width = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
        let rows = wrapped.into_iter().map(|l| vec![Span::styled(l, style)]).collect();
        return Bubble { rows, row_width, trailing_padding, align_right: false };
    }

    let text_width = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
    let (avatar, fg) = match message.sender {
        Sender::User => (theme::USER_AVATAR, theme::USER_FG),
        _ => (theme::BOT_AVATAR, theme::BOT_FG),
    };
    let mut avatar_style = Style::default().fg(theme::ACCENT);
    if hints.cursor == Some(Cursor::Pointer) {
        avatar_style = avatar_style.add_modifier(Modifier::UNDERLINED);
    }
    let body_style = Style::default().fg(fg).bg(theme::BUBBLE_BG);
    let align_right = message.sender == Sender::User;

    let rows = wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let fill = " ".repeat(text_width - line.width());
            let body = Span::styled(format!(" {line}{fill} "), body_style);
            let mark = if i == 0 {
                Span::styled(avatar, avatar_style)
            } else {
                Span::raw(" ")
            };
            if align_right {
                vec![body, Span::raw(" "), mark]
            } else {
                vec![mark, Span::raw(" "), body]
            }
        })
        .collect();

    Bubble {
        rows,
        row_width: text_width + AVATAR_WIDTH + BUBBLE_INSET,
        trailing_padding,
        align_right,
    }
}

/// Place bubbles on a canvas `content_width` columns wide, one blank row
/// between messages.
fn layout_lines(bubbles: &[Bubble], content_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, bubble) in bubbles.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let indent = if bubble.align_right {
            content_width.saturating_sub(bubble.width())
        } else {
            0
        };
        for row in &bubble.rows {
            let mut spans = Vec::with_capacity(row.len() + 2);
            if indent > 0 {
                spans.push(Span::raw(" ".repeat(indent)));
            }
            spans.extend(row.iter().cloned());
            if bubble.trailing_padding > 0 {
                spans.push(Span::raw(" ".repeat(bubble.trailing_padding)));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in raw.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!line.is_empty());
            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 11
    // =====

    use super::*;
    use crate::viewport::TRAILING_PAD_STEP;
    use pretty_assertions::assert_eq;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap_text("a b c", 3), vec!["a b", "c"]);
    }

    #[test]
    fn scroll_offsets_saturate_instead_of_wrapping() {
        assert_eq!(to_u16(70_000), u16::MAX);
        assert_eq!(to_u16(-5), 0);
        assert_eq!(to_u16(1234), 1234);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_keeps_explicit_newlines_and_empty_text() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn wrap_counts_wide_chars() {
        assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn wrap_width_follows_client_or_canvas() {
        assert_eq!(text_wrap_width(100, false), 66);
        assert_eq!(text_wrap_width(100, true), PAN_WRAP_WIDTH);
        assert_eq!(text_wrap_width(0, false), 1);
    }

    #[test]
    fn bot_bubble_is_left_aligned_with_avatar() {
        let options = ViewportOptions::default();
        let bubble = build_bubble(&ChatMessage::bot("hi"), &options, 20);
        let lines = layout_lines(&[bubble], 40);
        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).starts_with(theme::BOT_AVATAR));
    }

    #[test]
    fn user_bubble_ends_at_trailing_padding() {
        let options = ViewportOptions::default();
        let bubble = build_bubble(&ChatMessage::user("hi"), &options, 20);
        assert_eq!(bubble.trailing_padding, 2 + usize::from(TRAILING_PAD_STEP));
        let lines = layout_lines(&[bubble], 40);
        let text = line_text(&lines[0]);
        assert_eq!(text.width(), 40);
        assert!(text.trim_end().ends_with(theme::USER_AVATAR));
    }

    #[test]
    fn pan_mode_drops_pointer_underline() {
        let pan = ViewportOptions { enable_pan: true, ..ViewportOptions::default() };
        let bubble = build_bubble(&ChatMessage::bot("hi"), &pan, 20);
        let avatar = &bubble.rows[0][0];
        assert!(!avatar.style.add_modifier.contains(Modifier::UNDERLINED));

        let bubble = build_bubble(&ChatMessage::bot("hi"), &ViewportOptions::default(), 20);
        let avatar = &bubble.rows[0][0];
        assert!(avatar.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn messages_are_separated_by_blank_rows() {
        let options = ViewportOptions::default();
        let bubbles = vec![
            build_bubble(&ChatMessage::bot("one"), &options, 20),
            build_bubble(&ChatMessage::user("two"), &options, 20),
        ];
        let lines = layout_lines(&bubbles, 40);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[1]), "");
    }

    #[test]
    fn multi_row_bubble_rows_share_width() {
        let options = ViewportOptions::default();
        let bubble = build_bubble(&ChatMessage::bot("aaaa bb"), &options, 4);
        let widths: Vec<usize> =
            layout_lines(&[bubble], 40).iter().map(|l| line_text(l).width()).collect();
        assert_eq!(widths[0], widths[1]);
    }
}
