//! Secure vault: a password prompt in front of a filterable listing.

use haven_core::navigation::{NavAction, Screen};
use haven_core::vault::{
    empty_state_message, MinLengthPolicy, UnlockOutcome, VaultFilter, VaultState,
};
use haven_ftui_adapter::input::{translate_input, InputEvent, Key, UiAction};
use haven_ftui_adapter::render::{FrameSize, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::style::ThemeSpec;
use haven_ftui_adapter::widgets::{vault_item_columns, WidgetSpec};

use super::{draw_heading, draw_paragraph};
use crate::app::{Command, View, ViewContext};
use crate::logging::Logger;

const LOCKED_NOTE: &str =
    "All files are encrypted and password protected. Only you can access this vault.";
const UNLOCKED_BANNER: &str =
    "Voice recording is active when Alert mode is on • Evidence is automatically saved here";

pub struct VaultView {
    vault: VaultState,
    policy: MinLengthPolicy,
    logger: Logger,
}

impl VaultView {
    #[must_use]
    pub fn new(min_password_len: usize, logger: Logger) -> Self {
        Self {
            vault: VaultState::default(),
            policy: MinLengthPolicy {
                min_len: min_password_len,
            },
            logger,
        }
    }

    #[must_use]
    pub fn vault(&self) -> &VaultState {
        &self.vault
    }

    fn unlock(&mut self) {
        let outcome = self.vault.try_unlock(&self.policy);
        match outcome {
            UnlockOutcome::Unlocked => self.logger.info("vault unlocked"),
            UnlockOutcome::TooShort { required } => {
                let required = required.to_string();
                self.logger
                    .info_with("vault unlock refused", &[("required", required.as_str())]);
            }
            UnlockOutcome::AlreadyUnlocked => {}
        }
    }

    fn update_locked(&mut self, key: Key) -> Command {
        match key {
            Key::Enter => self.unlock(),
            Key::Tab => self.vault.toggle_reveal(),
            Key::Backspace => self.vault.backspace(),
            Key::Escape => return Command::Navigate(NavAction::Back),
            Key::Char(ch) => self.vault.type_char(ch),
            _ => {}
        }
        Command::None
    }

    fn update_unlocked(&mut self, event: &InputEvent) -> Command {
        let Some(filter) = self.vault.filter() else {
            return Command::None;
        };
        if let InputEvent::Key(key) = event {
            if key.key == Key::Tab {
                self.vault.set_filter(filter.next());
                return Command::None;
            }
            if matches!(key.key, Key::Char('d')) {
                return Command::Notify("Downloads are not available in this preview".to_owned());
            }
        }
        match translate_input(event) {
            UiAction::MoveRight => self.vault.set_filter(filter.next()),
            UiAction::MoveLeft => self.vault.set_filter(filter.prev()),
            UiAction::Delete => {
                return Command::Notify("Vault files are read-only".to_owned());
            }
            _ => {}
        }
        Command::None
    }

    fn render_locked(&self, frame: &mut RenderFrame, y: usize) {
        let width = frame.size().width;
        let spec = WidgetSpec::vault_lock();
        let inner = frame.draw_panel(
            Rect {
                x: 1,
                y,
                width: width.saturating_sub(2),
                height: 8,
            },
            spec.title,
            spec.border,
            frame.color_for_role(TextRole::Focus),
        );
        let display = self.vault.password_display();
        if display.is_empty() {
            frame.draw_text_in_rect(inner, 1, 0, "Enter password▏", TextRole::Muted);
        } else {
            frame.draw_text_in_rect(inner, 1, 0, &format!("{display}▏"), TextRole::Primary);
        }
        if let Some(required) = self.vault.last_refusal() {
            let hint = format!("Password must be at least {required} characters");
            frame.draw_text_in_rect(inner, 1, 1, &hint, TextRole::Warning);
        }
        frame.draw_text_in_rect(
            inner,
            1,
            3,
            "enter Unlock Vault   tab show/hide   esc back",
            TextRole::Muted,
        );
        draw_paragraph(
            frame,
            inner.x + 1,
            inner.y + 4,
            inner.width.saturating_sub(2),
            2,
            LOCKED_NOTE,
            TextRole::Info,
        );
    }

    fn render_unlocked(&self, frame: &mut RenderFrame, mut y: usize, filter: VaultFilter) {
        let width = frame.size().width;
        y += draw_paragraph(
            frame,
            1,
            y,
            width.saturating_sub(2),
            2,
            UNLOCKED_BANNER,
            TextRole::Info,
        );
        y += 1;

        let mut x = 1;
        for option in VaultFilter::ALL {
            let (label, role) = if option == filter {
                (format!("[{}]", option.label()), TextRole::Focus)
            } else {
                (format!(" {} ", option.label()), TextRole::Muted)
            };
            frame.draw_text(x, y, &label, role);
            x += label.chars().count() + 1;
        }
        y += 2;

        let columns = vault_item_columns();
        let header: String = columns
            .iter()
            .map(|column| column.fit(column.title))
            .collect::<Vec<_>>()
            .join(" ");
        frame.draw_text(1, y, &header, TextRole::Muted);
        y += 1;

        let items = self.vault.visible_items();
        if items.is_empty() {
            frame.draw_text(3, y + 1, &empty_state_message(filter), TextRole::Muted);
            return;
        }
        for item in items {
            let cells = [
                item.kind.glyph().to_string(),
                item.name.clone(),
                item.date.clone(),
                item.size.clone(),
            ];
            let line: String = columns
                .iter()
                .zip(cells.iter())
                .map(|(column, cell)| column.fit(cell))
                .collect::<Vec<_>>()
                .join(" ");
            frame.draw_text(1, y, &line, TextRole::Primary);
            y += 1;
        }
        frame.draw_text(
            1,
            y + 1,
            "←→ filter   d download   x delete",
            TextRole::Muted,
        );
    }
}

impl View for VaultView {
    fn screen(&self) -> Screen {
        Screen::Vault
    }

    fn captures_text(&self) -> bool {
        !self.vault.is_unlocked()
    }

    fn update(&mut self, event: InputEvent) -> Command {
        let InputEvent::Key(key) = event else {
            return Command::None;
        };
        if key.modifiers.ctrl || key.modifiers.alt {
            return Command::None;
        }
        if self.vault.is_unlocked() {
            self.update_unlocked(&event)
        } else {
            self.update_locked(key.key)
        }
    }

    fn view(&self, size: FrameSize, theme: ThemeSpec, _ctx: &ViewContext<'_>) -> RenderFrame {
        let mut frame = RenderFrame::new(size, theme);
        let y = draw_heading(
            &mut frame,
            "Secure Vault",
            "Your evidence is stored securely and encrypted",
        );
        match self.vault.filter() {
            Some(filter) => self.render_unlocked(&mut frame, y, filter),
            None => self.render_locked(&mut frame, y),
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use crate::logging::LogLevel;
    use haven_core::navigation::AlertMode;
    use haven_core::vault::{sample_items, VaultItem};
    use haven_ftui_adapter::input::KeyEvent;

    fn key(k: Key) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(k))
    }

    fn type_text(view: &mut VaultView, text: &str) {
        for ch in text.chars() {
            view.update(key(Key::Char(ch)));
        }
    }

    fn render(view: &VaultView) -> RenderFrame {
        let profile = ProfileConfig::default();
        view.view(
            FrameSize {
                width: 80,
                height: 22,
            },
            ThemeSpec::default(),
            &ViewContext {
                alert: AlertMode::Active,
                profile: &profile,
            },
        )
    }

    fn unlocked() -> VaultView {
        let mut view = VaultView::new(4, Logger::discard());
        type_text(&mut view, "1234");
        view.update(key(Key::Enter));
        view
    }

    #[test]
    fn short_password_shows_hint_and_stays_locked() {
        let mut view = VaultView::new(4, Logger::discard());
        type_text(&mut view, "abc");
        view.update(key(Key::Enter));
        assert!(!view.vault().is_unlocked());
        assert!(view.captures_text());
        let frame = render(&view);
        assert!(frame.contains_text("•••▏"));
        assert!(frame.contains_text("Password must be at least 4 characters"));
    }

    #[test]
    fn reveal_toggle_shows_plain_text() {
        let mut view = VaultView::new(4, Logger::discard());
        type_text(&mut view, "abc");
        view.update(key(Key::Tab));
        assert!(render(&view).contains_text("abc▏"));
    }

    #[test]
    fn unlock_lists_all_items() {
        let view = unlocked();
        assert!(!view.captures_text());
        let frame = render(&view);
        assert!(frame.contains_text("[All]"));
        assert!(frame.contains_text("Recording_2024_11_14_15_30.mp3"));
        assert!(frame.contains_text("Evidence_IMG_001.jpg"));
        assert!(frame.contains_text("Video_Evidence_001.mp4"));
    }

    #[test]
    fn filter_cycle_narrows_listing() {
        let mut view = unlocked();
        view.update(key(Key::Right));
        let frame = render(&view);
        assert!(frame.contains_text("[Images]"));
        assert!(frame.contains_text("Evidence_IMG_001.jpg"));
        assert!(!frame.contains_text("Video_Evidence_001.mp4"));
        view.update(key(Key::Left));
        view.update(key(Key::Left));
        assert_eq!(view.vault().filter(), Some(VaultFilter::Audio));
    }

    #[test]
    fn empty_filter_names_category() {
        let items: Vec<VaultItem> = sample_items()
            .into_iter()
            .filter(|item| item.kind != haven_core::vault::MediaKind::Video)
            .collect();
        let mut view = unlocked();
        view.vault = VaultState::new(items);
        view.vault.set_password("1234");
        let _ = view.vault.try_unlock(&view.policy);
        view.vault.set_filter(VaultFilter::Videos);
        assert!(render(&view).contains_text("No videos yet"));
    }

    #[test]
    fn escape_while_locked_goes_back() {
        let mut view = VaultView::new(4, Logger::discard());
        assert_eq!(
            view.update(key(Key::Escape)),
            Command::Navigate(NavAction::Back)
        );
    }

    #[test]
    fn unlock_attempts_never_log_the_password() {
        let (logger, buffer) = Logger::memory(LogLevel::Debug);
        let mut view = VaultView::new(4, logger);
        type_text(&mut view, "s3c");
        view.update(key(Key::Enter));
        type_text(&mut view, "ret");
        view.update(key(Key::Enter));
        let lines = buffer.borrow();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| !line.contains("s3c")));
        assert!(lines[1].ends_with("vault unlocked"));
    }
}
