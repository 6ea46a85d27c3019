//! Home screen: profile header, alert button, feature tiles and the
//! emergency support card.

use haven_core::navigation::{HomePage, NavAction, Screen};
use haven_core::safety::{DialRequest, SUPPORT_RESOURCES};
use haven_ftui_adapter::input::{translate_input, InputEvent, Key, UiAction};
use haven_ftui_adapter::render::{FrameSize, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::style::ThemeSpec;
use haven_ftui_adapter::widgets::{BorderStyle, WidgetSpec};

use super::{draw_heading, step};
use crate::app::{Command, View, ViewContext};
use crate::cards::{FeatureCard, SupportCard};

/// Focusable targets in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Alert,
    Tile(usize),
    Support(usize),
}

pub struct HomeView {
    tiles: [FeatureCard; 3],
    support: Vec<SupportCard>,
    focus: usize,
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeView {
    #[must_use]
    pub fn new() -> Self {
        let tile = |title: &'static str,
                    subtitle: &'static str,
                    glyph: char,
                    shortcut: char,
                    page: HomePage| FeatureCard {
            title,
            subtitle,
            glyph,
            shortcut,
            action: Some(Command::Navigate(NavAction::OpenPage(page))),
        };
        Self {
            tiles: [
                tile("Vault", "Secure storage", '▣', 'v', HomePage::Vault),
                tile("Guides", "Safety tips", '✎', 'g', HomePage::Guides),
                tile("Safety", "Quick help", '✚', 's', HomePage::Safety),
            ],
            support: SUPPORT_RESOURCES
                .iter()
                .map(|resource| SupportCard {
                    resource: *resource,
                    action: Some(Command::Dial(DialRequest::new(
                        resource.number,
                        resource.name,
                    ))),
                })
                .collect(),
            focus: 0,
        }
    }

    fn targets(&self) -> Vec<Focus> {
        let mut targets = vec![Focus::Alert];
        targets.extend((0..self.tiles.len()).map(Focus::Tile));
        targets.extend((0..self.support.len()).map(Focus::Support));
        targets
    }

    fn focused(&self) -> Focus {
        self.targets()
            .get(self.focus)
            .copied()
            .unwrap_or(Focus::Alert)
    }

    fn activate(&self) -> Command {
        match self.focused() {
            Focus::Alert => Command::ToggleAlert,
            Focus::Tile(index) => self
                .tiles
                .get(index)
                .map_or(Command::None, FeatureCard::activate),
            Focus::Support(index) => self
                .support
                .get(index)
                .map_or(Command::None, SupportCard::activate),
        }
    }

    fn render_alert(&self, frame: &mut RenderFrame, rect: Rect, ctx: &ViewContext<'_>) {
        let focused = self.focused() == Focus::Alert;
        let role = if ctx.alert.is_active() {
            TextRole::Danger
        } else {
            TextRole::Muted
        };
        let border = if focused {
            frame.color_for_role(TextRole::Focus)
        } else {
            frame.color_for_role(role)
        };
        let inner = frame.draw_panel(rect, "Alert Mode [a]", BorderStyle::Heavy, border);
        let status = format!("{}  {}", ctx.alert.icon(), ctx.alert.label());
        frame.draw_text_centered(inner.x, inner.y, inner.width, &status, role);
        frame.draw_text_centered(
            inner.x,
            inner.y + 1,
            inner.width,
            ctx.alert.caption(),
            TextRole::Muted,
        );
    }
}

impl View for HomeView {
    fn screen(&self) -> Screen {
        Screen::Home
    }

    fn update(&mut self, event: InputEvent) -> Command {
        let InputEvent::Key(key) = event else {
            return Command::None;
        };
        if !key.modifiers.ctrl && !key.modifiers.alt {
            match key.key {
                Key::Char('a') => return Command::ToggleAlert,
                Key::Char('v') => return self.tiles[0].activate(),
                Key::Char('g') => return self.tiles[1].activate(),
                Key::Char('s') => return self.tiles[2].activate(),
                Key::Tab => {
                    self.focus = (self.focus + 1) % self.targets().len();
                    return Command::None;
                }
                _ => {}
            }
        }
        let len = self.targets().len();
        match translate_input(&event) {
            UiAction::MoveUp | UiAction::MoveLeft => self.focus = step(self.focus, len, -1),
            UiAction::MoveDown | UiAction::MoveRight => self.focus = step(self.focus, len, 1),
            UiAction::Confirm | UiAction::Toggle => return self.activate(),
            _ => {}
        }
        Command::None
    }

    fn view(&self, size: FrameSize, theme: ThemeSpec, ctx: &ViewContext<'_>) -> RenderFrame {
        let mut frame = RenderFrame::new(size, theme);
        let width = size.width;
        let title = format!("Welcome, {}", ctx.profile.name);
        let mut y = draw_heading(&mut frame, &title, "You're protected and safe");

        let inner_width = width.saturating_sub(2);
        self.render_alert(
            &mut frame,
            Rect {
                x: 1,
                y,
                width: inner_width,
                height: 4,
            },
            ctx,
        );
        y += 5;

        let row = Rect {
            x: 1,
            y,
            width: inner_width,
            height: 4,
        };
        for (index, (card, rect)) in self.tiles.iter().zip(row.columns(3, 1)).enumerate() {
            card.render(&mut frame, rect, self.focused() == Focus::Tile(index));
        }
        y += 5;

        let spec = WidgetSpec::support_card();
        let panel = Rect {
            x: 1,
            y,
            width: inner_width,
            height: self.support.len() + 2,
        };
        let inner = frame.draw_panel(
            panel,
            spec.title,
            spec.border,
            frame.color_for_role(TextRole::Danger),
        );
        for (index, card) in self.support.iter().enumerate() {
            card.render(
                &mut frame,
                inner.x,
                inner.y + index,
                inner.width,
                self.focused() == Focus::Support(index),
            );
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use haven_core::navigation::AlertMode;
    use haven_ftui_adapter::input::KeyEvent;

    fn key(k: Key) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(k))
    }

    fn render(view: &HomeView, alert: AlertMode) -> RenderFrame {
        let profile = ProfileConfig::default();
        view.view(
            FrameSize {
                width: 72,
                height: 20,
            },
            ThemeSpec::default(),
            &ViewContext {
                alert,
                profile: &profile,
            },
        )
    }

    #[test]
    fn header_and_tiles_render() {
        let view = HomeView::new();
        let frame = render(&view, AlertMode::Active);
        assert!(frame.row_text(0).contains("Welcome, Vuyiswa"));
        assert!(frame.row_text(1).contains("You're protected and safe"));
        assert!(frame.contains_text("◉  Active"));
        assert!(frame.contains_text("Recording & alerting"));
        for label in ["Secure storage", "Safety tips", "Quick help"] {
            assert!(frame.contains_text(label), "missing {label}");
        }
        assert!(frame.contains_text("Emergency Support"));
        assert!(frame.contains_text("GBV Hotline"));
        assert!(frame.contains_text("Childline"));
    }

    #[test]
    fn silent_presentation_is_derived_from_mode() {
        let view = HomeView::new();
        let frame = render(&view, AlertMode::Silent);
        assert!(frame.contains_text("◌  Silent"));
        assert!(frame.contains_text("Tap to activate"));
        assert!(!frame.contains_text("Recording"));
    }

    #[test]
    fn shortcuts_open_pages() {
        let mut view = HomeView::new();
        assert_eq!(
            view.update(key(Key::Char('g'))),
            Command::Navigate(NavAction::OpenPage(HomePage::Guides))
        );
        assert_eq!(view.update(key(Key::Char('a'))), Command::ToggleAlert);
    }

    #[test]
    fn focus_walks_to_support_lines() {
        let mut view = HomeView::new();
        assert_eq!(view.update(key(Key::Enter)), Command::ToggleAlert);
        for _ in 0..4 {
            view.update(key(Key::Down));
        }
        assert_eq!(
            view.update(key(Key::Enter)),
            Command::Dial(DialRequest::new("66", "GBV Hotline"))
        );
        view.update(key(Key::Down));
        view.update(key(Key::Down));
        assert_eq!(
            view.update(key(Key::Enter)),
            Command::Dial(DialRequest::new("07", "Childline"))
        );
    }

    #[test]
    fn tab_wraps_focus() {
        let mut view = HomeView::new();
        for _ in 0..6 {
            view.update(key(Key::Tab));
        }
        assert_eq!(view.update(key(Key::Enter)), Command::ToggleAlert);
    }
}
