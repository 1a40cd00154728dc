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

use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(96, 165, 250);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const PROMPT_CHAR: &str = "❯";
pub const SEPARATOR_CHAR: &str = "─";

// Bubbles
pub const BOT_AVATAR: &str = "◆";
pub const USER_AVATAR: &str = "●";
pub const BOT_FG: Color = Color::Rgb(226, 232, 240);
pub const USER_FG: Color = Color::White;
pub const BUBBLE_BG: Color = Color::Rgb(51, 65, 85);
pub const SYSTEM_FG: Color = Color::Yellow;

// Scrollbar
pub const SCROLL_THUMB: Color = Color::Rgb(100, 116, 139);
pub const SCROLL_TRACK: Color = Color::Rgb(30, 41, 59);

// Status
pub const STATUS_WAITING: Color = Color::Cyan;
pub const STATUS_ERROR: Color = Color::Red;
