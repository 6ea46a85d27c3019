//! Settings: profile, bounded emergency-contact list with its add form, and
//! the app toggles.

use haven_core::navigation::Screen;
use haven_core::settings::{AddContactOutcome, AppToggle, AppToggles, ContactBook, ContactField};
use haven_ftui_adapter::input::{translate_input, InputEvent, Key, UiAction};
use haven_ftui_adapter::render::{truncate, FrameSize, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::style::ThemeSpec;
use haven_ftui_adapter::widgets::WidgetSpec;

use super::{draw_paragraph, marker, step};
use crate::app::{Command, View, ViewContext};
use crate::logging::Logger;

const SMS_INFO: &str = "When you activate the alert, all contacts will receive an SMS with your location and emergency message.";

/// Cursor targets outside the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Contact(usize),
    Add,
    Toggle(AppToggle),
}

pub struct SettingsView {
    book: ContactBook,
    toggles: AppToggles,
    cursor: usize,
    incomplete: bool,
    logger: Logger,
}

impl SettingsView {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            book: ContactBook::with_sample_contacts(),
            toggles: AppToggles::default(),
            cursor: 0,
            incomplete: false,
            logger,
        }
    }

    #[must_use]
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    #[must_use]
    pub fn toggles(&self) -> AppToggles {
        self.toggles
    }

    fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = (0..self.book.len()).map(Row::Contact).collect();
        rows.push(Row::Add);
        rows.extend(AppToggle::ALL.iter().copied().map(Row::Toggle));
        rows
    }

    fn current(&self) -> Option<Row> {
        self.rows().get(self.cursor).copied()
    }

    fn open_form(&mut self) -> Command {
        if self.book.open_form() {
            self.incomplete = false;
            Command::None
        } else {
            self.logger.info("add contact refused at capacity");
            Command::Notify("Maximum contacts reached".to_owned())
        }
    }

    fn delete_current(&mut self) {
        let Some(Row::Contact(index)) = self.current() else {
            return;
        };
        let Some(id) = self.book.contacts().get(index).map(|c| c.id.clone()) else {
            return;
        };
        if self.book.delete(&id) {
            self.logger.info_with("contact removed", &[("contact_id", id.as_str())]);
            self.cursor = step(self.cursor, self.rows().len(), 0);
        }
    }

    fn update_form(&mut self, key: Key) -> Command {
        match key {
            Key::Escape => {
                self.book.cancel_form();
                self.incomplete = false;
            }
            Key::Tab | Key::Down => self.book.focus_next(),
            Key::Backspace => self.book.backspace(),
            Key::Char(ch) => self.book.type_char(ch),
            Key::Enter => return self.save(),
            _ => {}
        }
        Command::None
    }

    fn save(&mut self) -> Command {
        match self.book.submit_form() {
            AddContactOutcome::Added { id } => {
                self.logger.info_with("contact added", &[("contact_id", id.as_str())]);
                self.incomplete = false;
                Command::Notify("Contact saved".to_owned())
            }
            AddContactOutcome::Incomplete => {
                self.logger.debug("contact form incomplete");
                self.incomplete = true;
                Command::None
            }
            AddContactOutcome::AtCapacity => {
                self.logger.info("add contact refused at capacity");
                self.book.cancel_form();
                Command::Notify("Maximum contacts reached".to_owned())
            }
        }
    }

    fn render_form(&self, frame: &mut RenderFrame, rect: Rect) {
        let spec = WidgetSpec::contact_form();
        let inner = frame.draw_panel(
            rect,
            spec.title,
            spec.border,
            frame.color_for_role(TextRole::Focus),
        );
        let draft = self.book.draft();
        for (row, field) in ContactField::ALL.iter().enumerate() {
            let focused = *field == self.book.focus();
            let value = draft.field(*field);
            let (text, role) = if value.is_empty() && !focused {
                (field.placeholder().to_owned(), TextRole::Muted)
            } else if focused {
                (format!("{value}▏"), TextRole::Focus)
            } else {
                (value.to_owned(), TextRole::Primary)
            };
            frame.draw_text_in_rect(inner, 0, row, marker(focused), TextRole::Focus);
            frame.draw_text_in_rect(inner, 2, row, &text, role);
        }
        let (hint, role) = if self.incomplete {
            ("Name and phone number are required", TextRole::Warning)
        } else {
            ("tab next field   enter Save Contact   esc Cancel", TextRole::Muted)
        };
        frame.draw_text_in_rect(inner, 0, 3, hint, role);
    }
}

impl View for SettingsView {
    fn screen(&self) -> Screen {
        Screen::Settings
    }

    fn captures_text(&self) -> bool {
        self.book.form_open()
    }

    fn update(&mut self, event: InputEvent) -> Command {
        let InputEvent::Key(key) = event else {
            return Command::None;
        };
        if key.modifiers.ctrl || key.modifiers.alt {
            return Command::None;
        }
        if self.book.form_open() {
            return self.update_form(key.key);
        }
        if key.key == Key::Char('n') {
            return self.open_form();
        }
        let len = self.rows().len();
        match translate_input(&event) {
            UiAction::MoveUp => self.cursor = step(self.cursor, len, -1),
            UiAction::MoveDown => self.cursor = step(self.cursor, len, 1),
            UiAction::Delete => self.delete_current(),
            UiAction::Confirm | UiAction::Toggle => match self.current() {
                Some(Row::Add) => return self.open_form(),
                Some(Row::Toggle(toggle)) => {
                    let on = self.toggles.toggle(toggle);
                    self.logger.info_with(
                        "setting toggled",
                        &[("setting", toggle.title()), ("on", if on { "true" } else { "false" })],
                    );
                }
                Some(Row::Contact(_)) | None => {}
            },
            _ => {}
        }
        Command::None
    }

    fn view(&self, size: FrameSize, theme: ThemeSpec, ctx: &ViewContext<'_>) -> RenderFrame {
        let mut frame = RenderFrame::new(size, theme);
        let width = size.width;
        let text_width = width.saturating_sub(2);
        frame.draw_text(1, 0, "Settings", TextRole::Accent);

        frame.draw_text(1, 2, "Profile", TextRole::Accent);
        let profile = format!(
            "{}  ·  Member since {}",
            ctx.profile.name, ctx.profile.member_since
        );
        frame.draw_text(3, 3, &truncate(&profile, text_width), TextRole::Primary);

        frame.draw_text(1, 5, "Emergency Contacts", TextRole::Accent);
        let counter = format!(
            "{} • Will receive SMS when activated",
            self.book.counter_label()
        );
        frame.draw_text(3, 6, &truncate(&counter, text_width), TextRole::Muted);
        let mut y = 7;
        y += draw_paragraph(
            &mut frame,
            3,
            y,
            text_width.saturating_sub(2),
            2,
            SMS_INFO,
            TextRole::Info,
        );

        let current = self.current();
        for (index, contact) in self.book.contacts().iter().enumerate() {
            let focused = current == Some(Row::Contact(index)) && !self.book.form_open();
            let line = format!(
                "{}{:<16} {:<18} {}",
                marker(focused),
                contact.name,
                contact.phone,
                contact.relationship
            );
            let role = if focused {
                TextRole::Focus
            } else {
                TextRole::Primary
            };
            frame.draw_text(1, y, &truncate(&line, text_width), role);
            if focused && width > 12 {
                frame.draw_text(width - 11, y, "x remove", TextRole::Danger);
            }
            y += 1;
        }

        if self.book.form_open() {
            self.render_form(
                &mut frame,
                Rect {
                    x: 1,
                    y,
                    width: text_width,
                    height: 6,
                },
            );
            y += 6;
        } else {
            let focused = current == Some(Row::Add);
            let (label, role) = if self.book.is_full() {
                ("  Maximum contacts reached".to_owned(), TextRole::Muted)
            } else {
                (
                    format!("{}+ Add Emergency Contact [n]", marker(focused)),
                    if focused {
                        TextRole::Focus
                    } else {
                        TextRole::Accent
                    },
                )
            };
            frame.draw_text(1, y, &label, role);
            y += 1;
        }

        y += 1;
        frame.draw_text(1, y, "App Settings", TextRole::Accent);
        y += 1;
        for toggle in AppToggle::ALL {
            let focused = current == Some(Row::Toggle(toggle)) && !self.book.form_open();
            let on = self.toggles.get(toggle);
            let switch = if on { "[on ]" } else { "[off]" };
            let line = format!(
                "{}{switch} {:<18} {}",
                marker(focused),
                toggle.title(),
                toggle.description()
            );
            let role = if focused {
                TextRole::Focus
            } else if on {
                TextRole::Success
            } else {
                TextRole::Muted
            };
            frame.draw_text(1, y, &truncate(&line, text_width), role);
            y += 1;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use haven_core::navigation::AlertMode;
    use haven_core::settings::MAX_CONTACTS;
    use haven_ftui_adapter::input::KeyEvent;

    fn key(k: Key) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(k))
    }

    fn type_text(view: &mut SettingsView, text: &str) {
        for ch in text.chars() {
            view.update(key(Key::Char(ch)));
        }
    }

    fn add_contact(view: &mut SettingsView, name: &str, phone: &str) -> Command {
        view.update(key(Key::Char('n')));
        type_text(view, name);
        view.update(key(Key::Tab));
        type_text(view, phone);
        view.update(key(Key::Enter))
    }

    fn render(view: &SettingsView) -> RenderFrame {
        let profile = ProfileConfig::default();
        view.view(
            FrameSize {
                width: 80,
                height: 30,
            },
            ThemeSpec::default(),
            &ViewContext {
                alert: AlertMode::Active,
                profile: &profile,
            },
        )
    }

    #[test]
    fn renders_profile_contacts_and_toggles() {
        let frame = render(&SettingsView::new(Logger::discard()));
        assert!(frame.contains_text("Vuyiswa  ·  Member since 2025"));
        assert!(frame.contains_text("2/5 contacts • Will receive SMS when activated"));
        assert!(frame.contains_text("Mom"));
        assert!(frame.contains_text("+27 81 234 5678"));
        assert!(frame.contains_text("+ Add Emergency Contact"));
        assert!(frame.contains_text("[on ] Notifications"));
        assert!(frame.contains_text("[on ] Location Services"));
    }

    #[test]
    fn form_captures_text_and_saves() {
        let mut view = SettingsView::new(Logger::discard());
        view.update(key(Key::Char('n')));
        assert!(view.captures_text());
        assert!(render(&view).contains_text("Add Emergency Contact"));
        type_text(&mut view, "Thandi");
        view.update(key(Key::Tab));
        type_text(&mut view, "083 000 1111");
        view.update(key(Key::Tab));
        type_text(&mut view, "Friend");
        assert_eq!(
            view.update(key(Key::Enter)),
            Command::Notify("Contact saved".to_owned())
        );
        assert!(!view.captures_text());
        assert_eq!(view.book().len(), 3);
        assert_eq!(view.book().contacts()[2].relationship, "Friend");
    }

    #[test]
    fn incomplete_form_shows_hint() {
        let mut view = SettingsView::new(Logger::discard());
        view.update(key(Key::Char('n')));
        type_text(&mut view, "No Phone");
        assert_eq!(view.update(key(Key::Enter)), Command::None);
        assert!(view.captures_text());
        assert!(render(&view).contains_text("Name and phone number are required"));
    }

    #[test]
    fn cancel_clears_draft() {
        let mut view = SettingsView::new(Logger::discard());
        view.update(key(Key::Char('n')));
        type_text(&mut view, "half");
        view.update(key(Key::Escape));
        assert!(!view.captures_text());
        assert!(view.book().draft().name.is_empty());
    }

    #[test]
    fn capacity_disables_add() {
        let mut view = SettingsView::new(Logger::discard());
        for i in 0..3 {
            add_contact(&mut view, &format!("Friend {i}"), "0820000000");
        }
        assert_eq!(view.book().len(), MAX_CONTACTS);
        assert!(render(&view).contains_text("Maximum contacts reached"));
        assert_eq!(
            view.update(key(Key::Char('n'))),
            Command::Notify("Maximum contacts reached".to_owned())
        );
        assert!(!view.captures_text());
        assert_eq!(view.book().len(), MAX_CONTACTS);
    }

    #[test]
    fn delete_removes_focused_contact() {
        let mut view = SettingsView::new(Logger::discard());
        view.update(key(Key::Delete));
        assert_eq!(view.book().len(), 1);
        assert_eq!(view.book().contacts()[0].name, "Sister Sarah");
    }

    #[test]
    fn toggles_flip_from_cursor() {
        let mut view = SettingsView::new(Logger::discard());
        // two contacts, add row, then notifications
        for _ in 0..3 {
            view.update(key(Key::Down));
        }
        view.update(key(Key::Enter));
        assert!(!view.toggles().notifications);
        assert!(render(&view).contains_text("[off] Notifications"));
    }
}
