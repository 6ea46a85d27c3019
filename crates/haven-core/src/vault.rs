//! Password-gated evidence vault.
//!
//! The vault is a two-state machine: [`VaultLock::Locked`] collects a
//! password, [`VaultLock::Unlocked`] exposes a filterable read-only listing.
//! The transition is one-way for the lifetime of the state value. Password
//! checking sits behind [`VaultAuthenticator`]; the shipped
//! [`MinLengthPolicy`] only checks length and verifies nothing.

use serde::{Deserialize, Serialize};

/// Minimum password length accepted by the placeholder policy.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Single-cell glyph for list rows.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Image => '▣',
            Self::Video => '▶',
            Self::Audio => '♪',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultItem {
    pub id: String,
    pub kind: MediaKind,
    pub name: String,
    pub date: String,
    pub size: String,
}

/// The read-only evidence sample every vault session shows.
#[must_use]
pub fn sample_items() -> Vec<VaultItem> {
    vec![
        VaultItem {
            id: "1".to_owned(),
            kind: MediaKind::Audio,
            name: "Recording_2024_11_14_15_30.mp3".to_owned(),
            date: "Nov 14, 2024 3:30 PM".to_owned(),
            size: "2.3 MB".to_owned(),
        },
        VaultItem {
            id: "2".to_owned(),
            kind: MediaKind::Image,
            name: "Evidence_IMG_001.jpg".to_owned(),
            date: "Nov 13, 2024 10:15 AM".to_owned(),
            size: "1.8 MB".to_owned(),
        },
        VaultItem {
            id: "3".to_owned(),
            kind: MediaKind::Video,
            name: "Video_Evidence_001.mp4".to_owned(),
            date: "Nov 12, 2024 8:20 PM".to_owned(),
            size: "15.2 MB".to_owned(),
        },
    ]
}

/// Listing filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaultFilter {
    #[default]
    All,
    Images,
    Videos,
    Audio,
}

impl VaultFilter {
    pub const ALL: [VaultFilter; 4] = [Self::All, Self::Images, Self::Videos, Self::Audio];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Images => "Images",
            Self::Videos => "Videos",
            Self::Audio => "Audio",
        }
    }

    /// Noun used by the empty-state message.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::All => "files",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Audio => "audio",
        }
    }

    #[must_use]
    pub fn matches(self, kind: MediaKind) -> bool {
        match self {
            Self::All => true,
            Self::Images => kind == MediaKind::Image,
            Self::Videos => kind == MediaKind::Video,
            Self::Audio => kind == MediaKind::Audio,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Images,
            Self::Images => Self::Videos,
            Self::Videos => Self::Audio,
            Self::Audio => Self::All,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Audio,
            Self::Images => Self::All,
            Self::Videos => Self::Images,
            Self::Audio => Self::Videos,
        }
    }
}

/// Apply a filter to a catalog, preserving catalog order.
#[must_use]
pub fn filter_items(items: &[VaultItem], filter: VaultFilter) -> Vec<&VaultItem> {
    items.iter().filter(|item| filter.matches(item.kind)).collect()
}

/// Message shown when a filter matches nothing.
#[must_use]
pub fn empty_state_message(filter: VaultFilter) -> String {
    format!("No {} yet", filter.noun())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    TooShort { required: usize },
    AlreadyUnlocked,
}

/// Credential check consulted by [`VaultState::try_unlock`].
pub trait VaultAuthenticator {
    fn check(&self, password: &str) -> UnlockOutcome;
}

/// Accepts any password of at least `min_len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLengthPolicy {
    pub min_len: usize,
}

impl Default for MinLengthPolicy {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl VaultAuthenticator for MinLengthPolicy {
    fn check(&self, password: &str) -> UnlockOutcome {
        if password.chars().count() >= self.min_len {
            UnlockOutcome::Unlocked
        } else {
            UnlockOutcome::TooShort {
                required: self.min_len,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultLock {
    Locked {
        password: String,
        reveal: bool,
        last_refusal: Option<usize>,
    },
    Unlocked {
        filter: VaultFilter,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultState {
    items: Vec<VaultItem>,
    lock: VaultLock,
}

impl Default for VaultState {
    fn default() -> Self {
        Self::new(sample_items())
    }
}

impl VaultState {
    #[must_use]
    pub fn new(items: Vec<VaultItem>) -> Self {
        Self {
            items,
            lock: VaultLock::Locked {
                password: String::new(),
                reveal: false,
                last_refusal: None,
            },
        }
    }

    #[must_use]
    pub fn lock(&self) -> &VaultLock {
        &self.lock
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        matches!(self.lock, VaultLock::Unlocked { .. })
    }

    #[must_use]
    pub fn items(&self) -> &[VaultItem] {
        &self.items
    }

    pub fn type_char(&mut self, ch: char) {
        if let VaultLock::Locked { password, .. } = &mut self.lock {
            password.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let VaultLock::Locked { password, .. } = &mut self.lock {
            password.pop();
        }
    }

    pub fn set_password(&mut self, value: &str) {
        if let VaultLock::Locked { password, .. } = &mut self.lock {
            *password = value.to_owned();
        }
    }

    pub fn toggle_reveal(&mut self) {
        if let VaultLock::Locked { reveal, .. } = &mut self.lock {
            *reveal = !*reveal;
        }
    }

    /// Password as displayed: masked unless reveal is on. Empty once unlocked.
    #[must_use]
    pub fn password_display(&self) -> String {
        match &self.lock {
            VaultLock::Locked {
                password, reveal, ..
            } => {
                if *reveal {
                    password.clone()
                } else {
                    "•".repeat(password.chars().count())
                }
            }
            VaultLock::Unlocked { .. } => String::new(),
        }
    }

    /// Minimum length reported by the last refused attempt, if any.
    #[must_use]
    pub fn last_refusal(&self) -> Option<usize> {
        match &self.lock {
            VaultLock::Locked { last_refusal, .. } => *last_refusal,
            VaultLock::Unlocked { .. } => None,
        }
    }

    /// Ask the authenticator about the typed password. The password buffer is
    /// dropped on success.
    pub fn try_unlock(&mut self, auth: &dyn VaultAuthenticator) -> UnlockOutcome {
        let VaultLock::Locked {
            password,
            last_refusal,
            ..
        } = &mut self.lock
        else {
            return UnlockOutcome::AlreadyUnlocked;
        };
        let outcome = auth.check(password);
        match outcome {
            UnlockOutcome::Unlocked => {
                self.lock = VaultLock::Unlocked {
                    filter: VaultFilter::All,
                };
            }
            UnlockOutcome::TooShort { required } => *last_refusal = Some(required),
            UnlockOutcome::AlreadyUnlocked => {}
        }
        outcome
    }

    /// Active filter. `None` while locked.
    #[must_use]
    pub fn filter(&self) -> Option<VaultFilter> {
        match self.lock {
            VaultLock::Unlocked { filter } => Some(filter),
            VaultLock::Locked { .. } => None,
        }
    }

    pub fn set_filter(&mut self, next: VaultFilter) {
        if let VaultLock::Unlocked { filter } = &mut self.lock {
            *filter = next;
        }
    }

    /// Items visible under the active filter. Nothing is listed while locked.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&VaultItem> {
        match self.lock {
            VaultLock::Unlocked { filter } => filter_items(&self.items, filter),
            VaultLock::Locked { .. } => Vec::new(),
        }
    }
}
