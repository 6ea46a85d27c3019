//! Emergency help: quick-dial, location card and the service directory.

use haven_core::navigation::Screen;
use haven_core::safety::{SafetyDirectory, ServiceCategory, NEARBY_RESOURCES, SAFETY_TIPS};
use haven_ftui_adapter::input::{translate_input, InputEvent, Key, UiAction};
use haven_ftui_adapter::render::{truncate, FrameSize, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::style::ThemeSpec;
use haven_ftui_adapter::widgets::{BorderStyle, WidgetSpec};

use super::{draw_heading, marker};
use crate::app::{Command, View, ViewContext};
use crate::logging::Logger;

/// Style role for each service category.
#[must_use]
pub fn category_role(category: ServiceCategory) -> TextRole {
    match category {
        ServiceCategory::Police => TextRole::Info,
        ServiceCategory::Medical => TextRole::Danger,
        ServiceCategory::GenderViolence => TextRole::Accent,
        ServiceCategory::Child => TextRole::Success,
    }
}

const HEADING_ROWS: usize = 3;
const QUICK_ROWS: usize = 5;
const LOCATION_ROWS: usize = 3;

/// What the cursor rests on. Only `Service` carries a directory highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Top,
    Service(usize),
    Tips,
    Nearby,
}

/// Row offsets of each section in the unscrolled screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    services_top: usize,
    tips_top: usize,
    nearby_top: usize,
    height: usize,
}

impl Layout {
    fn new(service_count: usize) -> Self {
        let services_top = HEADING_ROWS + QUICK_ROWS + LOCATION_ROWS + 1;
        let tips_top = services_top + service_count + 2;
        let nearby_top = tips_top + SAFETY_TIPS.len() + 3;
        Self {
            services_top,
            tips_top,
            nearby_top,
            height: nearby_top + 1 + NEARBY_RESOURCES.len(),
        }
    }

    /// First and last row that must be on screen for `focus`.
    fn rows(self, focus: Focus, service_count: usize) -> (usize, usize) {
        match focus {
            Focus::Top => (0, 0),
            Focus::Service(index) => (
                self.services_top + index,
                self.services_top + service_count,
            ),
            Focus::Tips => (self.tips_top, self.tips_top + SAFETY_TIPS.len() + 1),
            Focus::Nearby => (self.nearby_top, self.height - 1),
        }
    }

    fn scroll(self, focus: Focus, service_count: usize, visible: usize) -> usize {
        let (top, bottom) = self.rows(focus, service_count);
        (bottom + 1).saturating_sub(visible).min(top)
    }
}

pub struct SafetyView {
    directory: SafetyDirectory,
    focus: Focus,
    logger: Logger,
}

impl SafetyView {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            directory: SafetyDirectory::default(),
            focus: Focus::Top,
            logger,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &SafetyDirectory {
        &self.directory
    }

    fn move_focus(&mut self, down: bool) {
        let last = self.directory.services().len().saturating_sub(1);
        self.focus = if down {
            match self.focus {
                Focus::Top => Focus::Service(0),
                Focus::Service(index) if index < last => Focus::Service(index + 1),
                Focus::Service(_) => Focus::Tips,
                Focus::Tips | Focus::Nearby => Focus::Nearby,
            }
        } else {
            match self.focus {
                Focus::Top | Focus::Service(0) => Focus::Top,
                Focus::Service(index) => Focus::Service(index - 1),
                Focus::Tips => Focus::Service(last),
                Focus::Nearby => Focus::Tips,
            }
        };
        if let Focus::Service(index) = self.focus {
            if let Some(service) = self.directory.services().get(index) {
                self.directory.select(service.id);
            }
        }
    }

    fn call_selected(&self) -> Command {
        if !matches!(self.focus, Focus::Service(_)) {
            return Command::None;
        }
        let Some(id) = self.directory.selected() else {
            return Command::None;
        };
        match self.directory.call(id) {
            Some(request) => {
                self.logger.info_with(
                    "call requested",
                    &[("service", id), ("number", request.number.as_str())],
                );
                Command::Dial(request)
            }
            None => Command::None,
        }
    }

    fn quick_emergency(&self) -> Command {
        match self.directory.quick_emergency() {
            Some(request) => {
                self.logger
                    .info_with("quick emergency", &[("number", request.number.as_str())]);
                Command::Dial(request)
            }
            None => Command::None,
        }
    }

    fn render_full(&self, frame: &mut RenderFrame, layout: Layout, ctx: &ViewContext<'_>) {
        let text_width = frame.size().width.saturating_sub(2);
        draw_heading(frame, "Emergency Help", "Help is one call away");

        let quick = frame.draw_panel(
            Rect {
                x: 1,
                y: HEADING_ROWS,
                width: text_width,
                height: QUICK_ROWS - 1,
            },
            "Quick Emergency",
            BorderStyle::Heavy,
            frame.color_for_role(TextRole::Danger),
        );
        frame.draw_text_in_rect(
            quick,
            1,
            0,
            "Tap the button below for immediate help",
            TextRole::Muted,
        );
        let button = self
            .directory
            .quick_emergency()
            .map(|request| format!("[!] CALL {} NOW", request.number))
            .unwrap_or_default();
        frame.draw_text_in_rect(quick, 1, 1, &button, TextRole::Danger);

        let y = HEADING_ROWS + QUICK_ROWS;
        let location = format!("⌖ Current Location: {}", ctx.profile.location);
        frame.draw_text(1, y, &truncate(&location, text_width), TextRole::Primary);
        frame.draw_text(
            3,
            y + 1,
            &truncate(
                "Location shared when you call emergency services",
                text_width.saturating_sub(2),
            ),
            TextRole::Muted,
        );

        let services = self.directory.services();
        frame.draw_text(
            1,
            layout.services_top - 1,
            "Emergency Services",
            TextRole::Accent,
        );
        for (index, service) in services.iter().enumerate() {
            let selected = self.directory.selected() == Some(service.id);
            let line = format!(
                "{}{:<20} {:>13}  {}",
                marker(self.focus == Focus::Service(index)),
                service.name,
                service.number,
                service.available
            );
            let role = if selected {
                TextRole::Focus
            } else {
                category_role(service.category)
            };
            frame.draw_text(
                1,
                layout.services_top + index,
                &truncate(&line, text_width),
                role,
            );
        }
        if let Some(service) = services
            .iter()
            .find(|service| self.directory.selected() == Some(service.id))
        {
            let detail = format!("{}   enter to call", service.description);
            frame.draw_text(
                3,
                layout.services_top + services.len(),
                &truncate(&detail, text_width.saturating_sub(2)),
                TextRole::Muted,
            );
        }

        let spec = WidgetSpec::safety_tips();
        let tips_role = if self.focus == Focus::Tips {
            TextRole::Focus
        } else {
            TextRole::Warning
        };
        let tips = frame.draw_panel(
            Rect {
                x: 1,
                y: layout.tips_top,
                width: text_width,
                height: SAFETY_TIPS.len() + 2,
            },
            spec.title,
            spec.border,
            frame.color_for_role(tips_role),
        );
        for (index, tip) in SAFETY_TIPS.iter().enumerate() {
            frame.draw_text_in_rect(tips, 1, index, &format!("• {tip}"), TextRole::Primary);
        }

        let nearby_role = if self.focus == Focus::Nearby {
            TextRole::Focus
        } else {
            TextRole::Accent
        };
        frame.draw_text(1, layout.nearby_top, "Nearby Resources", nearby_role);
        for (index, resource) in NEARBY_RESOURCES.iter().enumerate() {
            let line = format!("{:<40} {:.1} km away", resource.name, resource.distance_km);
            frame.draw_text(
                3,
                layout.nearby_top + 1 + index,
                &truncate(&line, text_width.saturating_sub(2)),
                TextRole::Primary,
            );
        }
    }
}

impl View for SafetyView {
    fn screen(&self) -> Screen {
        Screen::Safety
    }

    fn update(&mut self, event: InputEvent) -> Command {
        if let InputEvent::Key(key) = event {
            if !key.modifiers.ctrl && matches!(key.key, Key::Char('!') | Key::Char('e')) {
                return self.quick_emergency();
            }
        }
        match translate_input(&event) {
            UiAction::MoveUp => self.move_focus(false),
            UiAction::MoveDown => self.move_focus(true),
            UiAction::Confirm => return self.call_selected(),
            _ => {}
        }
        Command::None
    }

    fn view(&self, size: FrameSize, theme: ThemeSpec, ctx: &ViewContext<'_>) -> RenderFrame {
        let service_count = self.directory.services().len();
        let layout = Layout::new(service_count);
        let mut full = RenderFrame::new(
            FrameSize {
                width: size.width,
                height: layout.height.max(size.height),
            },
            theme,
        );
        self.render_full(&mut full, layout, ctx);
        let scroll = layout.scroll(self.focus, service_count, size.height);
        full.viewport(scroll, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use haven_core::navigation::AlertMode;
    use haven_core::safety::DialRequest;
    use haven_ftui_adapter::input::KeyEvent;

    fn key(k: Key) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(k))
    }

    fn render(view: &SafetyView, height: usize) -> RenderFrame {
        let profile = ProfileConfig::default();
        view.view(
            FrameSize { width: 80, height },
            ThemeSpec::default(),
            &ViewContext {
                alert: AlertMode::Active,
                profile: &profile,
            },
        )
    }

    #[test]
    fn directory_renders_with_numbers() {
        let frame = render(&SafetyView::new(Logger::discard()), 40);
        assert!(frame.contains_text("[!] CALL 10111 NOW"));
        assert!(frame.contains_text("Current Location: Johannesburg, Gauteng"));
        assert!(frame.contains_text("GBV Command Centre"));
        assert!(frame.contains_text("0800 428 428"));
        assert!(frame.contains_text("• Stay on the line until help arrives"));
        assert!(frame.contains_text("Charlotte Maxeke Hospital"));
        assert!(frame.contains_text("3.7 km away"));
    }

    #[test]
    fn enter_calls_highlighted_service() {
        let mut view = SafetyView::new(Logger::discard());
        for _ in 0..3 {
            view.update(key(Key::Down));
        }
        assert_eq!(view.directory().selected(), Some("gbv"));
        assert_eq!(
            view.update(key(Key::Enter)),
            Command::Dial(DialRequest::new("0800 428 428", "GBV Command Centre"))
        );
    }

    #[test]
    fn nothing_is_highlighted_on_mount() {
        let mut view = SafetyView::new(Logger::discard());
        assert_eq!(view.directory().selected(), None);
        assert!(!render(&view, 40).contains_text("▸"));
        assert_eq!(view.update(key(Key::Enter)), Command::None);
    }

    #[test]
    fn nearby_resources_scroll_into_a_short_screen() {
        let mut view = SafetyView::new(Logger::discard());
        let top = render(&view, 21);
        assert!(top.contains_text("[!] CALL 10111 NOW"));
        assert!(!top.contains_text("Nearby Resources"));

        for _ in 0..view.directory().services().len() + 2 {
            view.update(key(Key::Down));
        }
        let bottom = render(&view, 21);
        assert!(bottom.contains_text("Nearby Resources"));
        assert!(bottom.contains_text("Charlotte Maxeke Hospital"));
        assert!(bottom.contains_text("3.7 km away"));
        assert!(bottom.contains_text("• Use the Silent Alert mode if you can't speak"));
        assert_eq!(view.update(key(Key::Enter)), Command::None);

        for _ in 0..10 {
            view.update(key(Key::Up));
        }
        assert!(render(&view, 21).contains_text("[!] CALL 10111 NOW"));
    }

    #[test]
    fn focused_service_stays_visible_with_its_detail() {
        let mut view = SafetyView::new(Logger::discard());
        for _ in 0..4 {
            view.update(key(Key::Down));
        }
        let frame = render(&view, 14);
        assert_eq!(view.directory().selected(), Some("childline"));
        assert!(frame.contains_text("▸ Childline"));
        assert!(frame.contains_text("enter to call"));
    }

    #[test]
    fn quick_emergency_dials_police() {
        let mut view = SafetyView::new(Logger::discard());
        view.update(key(Key::Down));
        assert_eq!(
            view.update(key(Key::Char('!'))),
            Command::Dial(DialRequest::new("10111", "Police"))
        );
    }

    #[test]
    fn categories_map_to_distinct_roles() {
        let roles = [
            ServiceCategory::Police,
            ServiceCategory::Medical,
            ServiceCategory::GenderViolence,
            ServiceCategory::Child,
        ]
        .map(category_role);
        for (i, a) in roles.iter().enumerate() {
            for b in roles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
