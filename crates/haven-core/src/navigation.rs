//! Navigation state owned by the root shell.
//!
//! The shell tracks a top-level [`Tab`] and, under the home tab, a
//! [`HomePage`]. Together they resolve to exactly one mounted [`Screen`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Top-level tabs shown in the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Home,
    Chats,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Self::Home, Self::Chats, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Chats => "Chats",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Chats => "chats",
            Self::Settings => "settings",
        }
    }
}

impl FromStr for Tab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "chats" | "feed" => Ok(Self::Chats),
            "settings" => Ok(Self::Settings),
            other => Err(ParseError::UnknownTab(other.to_owned())),
        }
    }
}

/// Sub-pages reachable from the home screen's feature tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomePage {
    #[default]
    Home,
    Vault,
    Guides,
    Safety,
}

impl HomePage {
    pub const ALL: [HomePage; 4] = [Self::Home, Self::Vault, Self::Guides, Self::Safety];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Vault => "vault",
            Self::Guides => "guides",
            Self::Safety => "safety",
        }
    }
}

impl FromStr for HomePage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "vault" => Ok(Self::Vault),
            "guides" => Ok(Self::Guides),
            "safety" => Ok(Self::Safety),
            other => Err(ParseError::UnknownPage(other.to_owned())),
        }
    }
}

/// The single view mounted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Feed,
    Settings,
    Vault,
    Guides,
    Safety,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Self::Home,
        Self::Feed,
        Self::Settings,
        Self::Vault,
        Self::Guides,
        Self::Safety,
    ];

    /// Display label used in the shell header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Feed => "Anonymous Community",
            Self::Settings => "Settings",
            Self::Vault => "Secure Vault",
            Self::Guides => "Safety Guides",
            Self::Safety => "Emergency Help",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Feed => "feed",
            Self::Settings => "settings",
            Self::Vault => "vault",
            Self::Guides => "guides",
            Self::Safety => "safety",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation inputs the shell reduces over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SelectTab(Tab),
    OpenPage(HomePage),
    Back,
}

/// Active tab plus home sub-page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    tab: Tab,
    page: HomePage,
}

impl NavigationState {
    #[must_use]
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            page: HomePage::Home,
        }
    }

    /// Start on `tab`, and on `page` when `tab` is home.
    #[must_use]
    pub fn starting_at(tab: Tab, page: HomePage) -> Self {
        let mut state = Self::new(tab);
        state.apply(NavAction::OpenPage(page));
        state
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The home sub-page. Only meaningful while the home tab is active.
    #[must_use]
    pub fn page(&self) -> HomePage {
        self.page
    }

    /// Resolve the mounted screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        match (self.tab, self.page) {
            (Tab::Chats, _) => Screen::Feed,
            (Tab::Settings, _) => Screen::Settings,
            (Tab::Home, HomePage::Home) => Screen::Home,
            (Tab::Home, HomePage::Vault) => Screen::Vault,
            (Tab::Home, HomePage::Guides) => Screen::Guides,
            (Tab::Home, HomePage::Safety) => Screen::Safety,
        }
    }

    /// Apply a navigation action. Returns `true` when the mounted screen
    /// changed.
    ///
    /// Selecting any tab resets the sub-page, so leaving home and coming back
    /// never resurfaces a stale sub-page. Opening a page only applies while
    /// the home tab is active.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let before = self.screen();
        match action {
            NavAction::SelectTab(tab) => {
                self.tab = tab;
                self.page = HomePage::Home;
            }
            NavAction::OpenPage(page) => {
                if self.tab == Tab::Home {
                    self.page = page;
                }
            }
            NavAction::Back => match self.screen() {
                Screen::Home => {}
                Screen::Feed | Screen::Settings => {
                    self.tab = Tab::Home;
                    self.page = HomePage::Home;
                }
                Screen::Vault | Screen::Guides | Screen::Safety => {
                    self.page = HomePage::Home;
                }
            },
        }
        self.screen() != before
    }
}

/// Home-screen alert toggle. Purely presentational: nothing records or
/// alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertMode {
    #[default]
    Active,
    Silent,
}

impl AlertMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Silent,
            Self::Silent => Self::Active,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Silent => "Silent",
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Active => "Recording & alerting",
            Self::Silent => "Tap to activate",
        }
    }

    #[must_use]
    pub fn icon(self) -> char {
        match self {
            Self::Active => '◉',
            Self::Silent => '◌',
        }
    }
}
