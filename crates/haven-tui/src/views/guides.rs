//! Safety guides: progress, module catalog and achievements.

use haven_core::guides::{default_catalog, GuideCatalog, SelectOutcome};
use haven_core::navigation::Screen;
use haven_ftui_adapter::input::{translate_input, InputEvent, UiAction};
use haven_ftui_adapter::render::{truncate, FrameSize, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::style::ThemeSpec;
use haven_ftui_adapter::widgets::WidgetSpec;

use super::{draw_heading, draw_paragraph, marker, step};
use crate::app::{Command, View, ViewContext};
use crate::logging::Logger;

const INFO: &str = "Learn at your own pace. Each module gives you practical knowledge to stay safe and protect yourself.";

pub struct GuidesView {
    catalog: GuideCatalog,
    cursor: usize,
    logger: Logger,
}

impl GuidesView {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            catalog: GuideCatalog::new(default_catalog()),
            cursor: 0,
            logger,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &GuideCatalog {
        &self.catalog
    }

    fn select_current(&mut self) {
        let Some(id) = self.catalog.modules().get(self.cursor).map(|m| m.id.clone()) else {
            return;
        };
        match self.catalog.select(&id) {
            SelectOutcome::Selected => {
                self.logger.debug_with("module selected", &[("module", id.as_str())]);
            }
            SelectOutcome::Locked => {
                self.logger.debug_with("locked module ignored", &[("module", id.as_str())]);
            }
            SelectOutcome::Unknown => {}
        }
    }
}

impl View for GuidesView {
    fn screen(&self) -> Screen {
        Screen::Guides
    }

    fn update(&mut self, event: InputEvent) -> Command {
        let len = self.catalog.modules().len();
        match translate_input(&event) {
            UiAction::MoveUp => self.cursor = step(self.cursor, len, -1),
            UiAction::MoveDown => self.cursor = step(self.cursor, len, 1),
            UiAction::Confirm | UiAction::Toggle => self.select_current(),
            _ => {}
        }
        Command::None
    }

    fn view(&self, size: FrameSize, theme: ThemeSpec, _ctx: &ViewContext<'_>) -> RenderFrame {
        let mut frame = RenderFrame::new(size, theme);
        let width = size.width;
        let text_width = width.saturating_sub(2);
        let mut y = draw_heading(&mut frame, "Safety Guides", "Learn to protect yourself");

        let progress = self.catalog.progress();
        let summary = format!(
            "Your Progress   {}   {} points",
            progress.label(),
            self.catalog.total_points()
        );
        frame.draw_text(1, y, &truncate(&summary, text_width), TextRole::Primary);
        y += 1;
        frame.draw_gauge(
            1,
            y,
            text_width,
            progress.ratio(),
            frame.color_for_role(TextRole::Accent),
            frame.color_for_role(TextRole::Muted),
        );
        y += 2;
        y += draw_paragraph(&mut frame, 1, y, text_width, 2, INFO, TextRole::Warning);
        y += 1;

        for (index, module) in self.catalog.modules().iter().enumerate() {
            let focused = index == self.cursor;
            let selected = self.catalog.selected() == Some(module.id.as_str());
            let badge = if selected { "●" } else { " " };
            let line = format!(
                "{}{badge} {} {:<20} +{:<4}",
                marker(focused),
                module.icon,
                module.title,
                module.points
            );
            let role = if module.locked {
                TextRole::Muted
            } else if focused {
                TextRole::Focus
            } else {
                TextRole::Primary
            };
            frame.draw_text(1, y, &truncate(&line, text_width), role);
            let status = module.status_label();
            let status_role = if module.locked {
                TextRole::Muted
            } else if module.completed {
                TextRole::Success
            } else {
                TextRole::Accent
            };
            let status_x = 1 + line.chars().count() + 1;
            if status_x + status.chars().count() <= width {
                frame.draw_text(status_x, y, status, status_role);
            }
            y += 1;
        }
        if let Some(module) = self.catalog.modules().get(self.cursor) {
            frame.draw_text(
                3,
                y,
                &truncate(&module.description, text_width.saturating_sub(2)),
                TextRole::Muted,
            );
        }
        y += 1;

        let spec = WidgetSpec::achievements();
        let inner = frame.draw_panel(
            Rect {
                x: 1,
                y,
                width: text_width,
                height: 3,
            },
            spec.title,
            spec.border,
            frame.color_for_role(TextRole::Muted),
        );
        let mut x = 1;
        for achievement in self.catalog.achievements() {
            let label = format!("{} {}", achievement.glyph, achievement.title);
            let role = if achievement.earned {
                TextRole::Success
            } else {
                TextRole::Muted
            };
            frame.draw_text_in_rect(inner, x, 0, &label, role);
            x += label.chars().count() + 4;
        }
        frame
    }
}
