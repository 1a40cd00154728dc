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

pub mod app;
pub mod config;
pub mod error;
pub mod service;
pub mod ui;
pub mod viewport;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chat-viewport", about = "Terminal chat window with a pannable viewport")]
pub struct Cli {
    /// Enable click-and-drag panning of the chat history
    #[arg(long)]
    pub pan: bool,

    /// Hide the chat scrollbar
    #[arg(long)]
    pub no_scrollbars: bool,

    /// Answer with the mock message service
    #[arg(long)]
    pub mock: bool,

    /// Config file (defaults to <config dir>/chat-viewport/config.json)
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Write tracing diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
