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

use crate::Cli;
use crate::service::Backend;
use crate::viewport::ViewportOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "chat-viewport";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings read from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub scrollbars: Option<bool>,
    pub enable_pan: Option<bool>,
    pub backend: Option<Backend>,
}

/// Resolved settings after merging file values and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub viewport: ViewportOptions,
    pub backend: Backend,
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}

/// Read a config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config file at {}", path.display());
            return Ok(FileConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
    };
    serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Resolve settings for `cli`: explicit `--config`, else the default
/// location, with CLI flags taking precedence over file values.
pub fn load(cli: &Cli) -> Result<Settings, ConfigError> {
    let file = match cli.config.clone().or_else(default_config_path) {
        Some(path) => read_config(&path)?,
        None => FileConfig::default(),
    };
    Ok(merge(cli, &file))
}

#[must_use]
pub fn merge(cli: &Cli, file: &FileConfig) -> Settings {
    let defaults = ViewportOptions::default();
    let scrollbars = if cli.no_scrollbars {
        false
    } else {
        file.scrollbars.unwrap_or(defaults.scrollbars)
    };
    let enable_pan = cli.pan || file.enable_pan.unwrap_or(defaults.enable_pan);
    let backend = if cli.mock { Backend::Mock } else { file.backend.unwrap_or_default() };
    Settings {
        viewport: ViewportOptions {
            scrollbars,
            enable_pan,
            id: Some("chat".to_owned()),
            ..defaults
        },
        backend,
    }
}
