// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Tab;
use crate::ui::info;
use crate::ui::name_card::{display, editor};
use crate::ui::talks;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    Info(info::Message),
    Talks(talks::Message),
    NameCard(display::Message),
    Editor(editor::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (profile files).
    /// Takes precedence over `WEAVING_CON_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `WEAVING_CON_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Tab shown at startup.
    pub tab: Option<Tab>,
}
