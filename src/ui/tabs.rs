use std::fmt;
use std::str::FromStr;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Trades,
    Traders,
    Alerts,
}

/// When the refresh timer reloads a tab's panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPolicy {
    /// Every tick, visible or not.
    Always,
    /// Only while the tab is the active one.
    WhenActive,
}

/// Something the page can reload independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Stats,
    Tab(Tab),
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Trades, Tab::Traders, Tab::Alerts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Trades => "trades",
            Tab::Traders => "traders",
            Tab::Alerts => "alerts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Trades => "Recent Trades",
            Tab::Traders => "Top Traders",
            Tab::Alerts => "Alerts",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Trades => "fa-exchange-alt",
            Tab::Traders => "fa-trophy",
            Tab::Alerts => "fa-bell",
        }
    }

    pub fn poll_policy(&self) -> PollPolicy {
        match self {
            Tab::Trades => PollPolicy::Always,
            Tab::Traders | Tab::Alerts => PollPolicy::WhenActive,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown tab: {s}"))
    }
}

impl PollPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollPolicy::Always => "always",
            PollPolicy::WhenActive => "active",
        }
    }
}

impl Panel {
    /// Fragment endpoint serving this panel's markup.
    pub fn partial_path(&self) -> &'static str {
        match self {
            Panel::Stats => "/partials/stats",
            Panel::Tab(Tab::Trades) => "/partials/trades",
            Panel::Tab(Tab::Traders) => "/partials/traders",
            Panel::Tab(Tab::Alerts) => "/partials/alerts",
        }
    }
}

/// Which tab is showing. The only client-side state the page keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl Default for TabState {
    fn default() -> Self {
        Self { active: Tab::Trades }
    }
}

impl TabState {
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
