//! Stateless presentational cards. Each takes display data plus an optional
//! activation command and renders into a region it is given.

use haven_core::safety::SupportResource;
use haven_ftui_adapter::render::{truncate, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::widgets::WidgetSpec;

use crate::app::Command;

/// Home-screen tile leading to a sub-page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub glyph: char,
    pub shortcut: char,
    pub action: Option<Command>,
}

impl FeatureCard {
    /// The command to run on activation; inert cards yield `Command::None`.
    #[must_use]
    pub fn activate(&self) -> Command {
        self.action.clone().unwrap_or(Command::None)
    }

    pub fn render(&self, frame: &mut RenderFrame, rect: Rect, focused: bool) {
        let spec = WidgetSpec::feature_tile(self.title);
        let border = frame.color_for_role(if focused {
            TextRole::Focus
        } else {
            TextRole::Muted
        });
        let inner = frame.draw_panel(rect, spec.title, spec.border, border);
        if inner.height == 0 {
            return;
        }
        let heading = format!("{} [{}]", self.glyph, self.shortcut);
        frame.draw_text_centered(inner.x, inner.y, inner.width, &heading, TextRole::Accent);
        if inner.height > 1 {
            frame.draw_text_centered(
                inner.x,
                inner.y + 1,
                inner.width,
                self.subtitle,
                TextRole::Muted,
            );
        }
    }
}

/// One support line inside the emergency support card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportCard {
    pub resource: SupportResource,
    pub action: Option<Command>,
}

impl SupportCard {
    #[must_use]
    pub fn activate(&self) -> Command {
        self.action.clone().unwrap_or(Command::None)
    }

    /// Render on a single row: marker, name, description, number.
    pub fn render(&self, frame: &mut RenderFrame, x: usize, y: usize, width: usize, focused: bool) {
        let marker = if focused { "▸ " } else { "  " };
        let number = format!("☎ {}", self.resource.number);
        let number_width = number.chars().count();
        let name_role = if focused {
            TextRole::Focus
        } else {
            TextRole::Primary
        };
        frame.draw_text(x, y, marker, TextRole::Focus);
        let body_width = width.saturating_sub(number_width + 3);
        let name = truncate(self.resource.name, body_width);
        frame.draw_text(x + 2, y, &name, name_role);
        let used = name.chars().count() + 3;
        if body_width > used {
            let description = truncate(self.resource.description, body_width - used);
            frame.draw_text(x + 2 + used, y, &description, TextRole::Muted);
        }
        if width > number_width {
            frame.draw_text(x + width - number_width, y, &number, TextRole::Danger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::navigation::{HomePage, NavAction};
    use haven_core::safety::{DialRequest, SUPPORT_RESOURCES};
    use haven_ftui_adapter::render::FrameSize;
    use haven_ftui_adapter::style::ThemeSpec;

    fn frame(width: usize, height: usize) -> RenderFrame {
        RenderFrame::new(FrameSize { width, height }, ThemeSpec::default())
    }

    #[test]
    fn inert_card_activates_to_none() {
        let card = FeatureCard {
            title: "Vault",
            subtitle: "Secure storage",
            glyph: '▣',
            shortcut: 'v',
            action: None,
        };
        assert_eq!(card.activate(), Command::None);
    }

    #[test]
    fn feature_card_renders_title_and_subtitle() {
        let card = FeatureCard {
            title: "Vault",
            subtitle: "Secure storage",
            glyph: '▣',
            shortcut: 'v',
            action: Some(Command::Navigate(NavAction::OpenPage(HomePage::Vault))),
        };
        let mut f = frame(20, 4);
        let area = f.area();
        card.render(&mut f, area, true);
        assert_eq!(f.row_text(0), "╭ Vault ───────────╮");
        assert!(f.row_text(1).contains("▣ [v]"));
        assert!(f.row_text(2).contains("Secure storage"));
        assert_eq!(
            card.activate(),
            Command::Navigate(NavAction::OpenPage(HomePage::Vault))
        );
    }

    #[test]
    fn support_card_row() {
        let card = SupportCard {
            resource: SUPPORT_RESOURCES[0],
            action: Some(Command::Dial(DialRequest::new("66", "GBV Hotline"))),
        };
        let mut f = frame(50, 1);
        card.render(&mut f, 0, 0, 50, false);
        let row = f.row_text(0);
        assert!(row.starts_with("  GBV Hotline   Gender-based"));
        assert!(row.trim_end().ends_with("☎ 66"));
    }
}
