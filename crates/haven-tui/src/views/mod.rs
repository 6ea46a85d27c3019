//! The six screens and the factory the shell mounts them through.

pub mod feed;
pub mod guides;
pub mod home;
pub mod safety;
pub mod settings;
pub mod vault;

use haven_core::navigation::Screen;
use haven_ftui_adapter::render::{truncate, wrap, RenderFrame, TextRole};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::{Clock, View};
use crate::logging::Logger;

/// Construction inputs shared by every mount.
#[derive(Debug, Clone)]
pub struct MountContext {
    pub logger: Logger,
    pub min_password_len: usize,
    pub clock: Clock,
    pub seed: Option<u64>,
}

impl MountContext {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Build fresh state for `screen`.
#[must_use]
pub fn mount(screen: Screen, ctx: &MountContext) -> Box<dyn View> {
    match screen {
        Screen::Home => Box::new(home::HomeView::new()),
        Screen::Feed => Box::new(feed::FeedView::new(
            ctx.rng(),
            ctx.clock,
            ctx.logger.component("feed"),
        )),
        Screen::Settings => Box::new(settings::SettingsView::new(
            ctx.logger.component("settings"),
        )),
        Screen::Vault => Box::new(vault::VaultView::new(
            ctx.min_password_len,
            ctx.logger.component("vault"),
        )),
        Screen::Guides => Box::new(guides::GuidesView::new(ctx.logger.component("guides"))),
        Screen::Safety => Box::new(safety::SafetyView::new(ctx.logger.component("safety"))),
    }
}

/// Two-row screen heading. Returns the next free row.
fn draw_heading(frame: &mut RenderFrame, title: &str, subtitle: &str) -> usize {
    let width = frame.size().width;
    frame.draw_text(1, 0, &truncate(title, width.saturating_sub(1)), TextRole::Accent);
    frame.draw_text(1, 1, &truncate(subtitle, width.saturating_sub(1)), TextRole::Muted);
    3
}

/// Word-wrapped paragraph starting at row `y`, at most `max_rows` rows.
/// Returns the number of rows drawn.
fn draw_paragraph(
    frame: &mut RenderFrame,
    x: usize,
    y: usize,
    width: usize,
    max_rows: usize,
    text: &str,
    role: TextRole,
) -> usize {
    let lines = wrap(text, width);
    let drawn = lines.len().min(max_rows);
    for (offset, line) in lines.iter().take(drawn).enumerate() {
        frame.draw_text(x, y + offset, line, role);
    }
    drawn
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "▸ "
    } else {
        "  "
    }
}

/// Keep `cursor` inside `0..len` after a move of `delta`.
fn step(cursor: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
