// SPDX-License-Identifier: MPL-2.0
//! Tab enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Top-level sections shown in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Info,
    Talks,
    NameCard,
}

impl Tab {
    /// Tab bar order.
    pub const ALL: [Tab; 3] = [Tab::Info, Tab::Talks, Tab::NameCard];

    /// Fluent key of the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Info => "tab-info",
            Tab::Talks => "tab-talks",
            Tab::NameCard => "tab-name-card",
        }
    }

    /// Name accepted by `--tab`.
    #[must_use]
    pub fn cli_name(self) -> &'static str {
        match self {
            Tab::Info => "info",
            Tab::Talks => "talks",
            Tab::NameCard => "name-card",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.cli_name().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown tab '{value}' (expected info, talks or name-card)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_names() {
        assert_eq!("info".parse(), Ok(Tab::Info));
        assert_eq!("Talks".parse(), Ok(Tab::Talks));
        assert_eq!("name-card".parse(), Ok(Tab::NameCard));
    }

    #[test]
    fn rejects_unknown_tab() {
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(tab.to_string().parse(), Ok(tab));
        }
    }
}
