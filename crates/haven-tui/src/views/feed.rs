//! Anonymous community feed.

use haven_core::feed::{FeedState, LikeOutcome, Post, SubmitOutcome};
use haven_core::navigation::Screen;
use haven_ftui_adapter::input::{translate_input, InputEvent, Key, UiAction};
use haven_ftui_adapter::render::{truncate, wrap, FrameSize, Rect, RenderFrame, TextRole};
use haven_ftui_adapter::style::ThemeSpec;
use haven_ftui_adapter::widgets::WidgetSpec;
use rand::rngs::StdRng;

use super::{draw_heading, marker, step};
use crate::app::{Clock, Command, View, ViewContext};
use crate::logging::Logger;

const PLACEHOLDER: &str = "Share your experience anonymously...";
const BANNER: &str = "100% Anonymous • Share safely • Alert others";
/// Rows per post: author line, two body lines, action line, gap.
const POST_ROWS: usize = 5;

pub struct FeedView {
    feed: FeedState,
    selected: usize,
    composing: bool,
    rng: StdRng,
    clock: Clock,
    logger: Logger,
}

impl FeedView {
    #[must_use]
    pub fn new(rng: StdRng, clock: Clock, logger: Logger) -> Self {
        Self {
            feed: FeedState::with_sample_posts(clock()),
            selected: 0,
            composing: false,
            rng,
            clock,
            logger,
        }
    }

    #[must_use]
    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    fn submit(&mut self) -> Command {
        match self.feed.submit(&mut self.rng, (self.clock)()) {
            SubmitOutcome::Posted { id } => {
                self.logger.info_with("post submitted", &[("post_id", id.as_str())]);
                self.selected = 0;
                self.composing = false;
                Command::Notify("Shared anonymously".to_owned())
            }
            SubmitOutcome::Empty => {
                self.logger.debug("empty post ignored");
                Command::None
            }
        }
    }

    fn toggle_like(&mut self) {
        let Some(id) = self.feed.posts().get(self.selected).map(|p| p.id.clone()) else {
            return;
        };
        match self.feed.toggle_like(&id) {
            LikeOutcome::Liked { likes } | LikeOutcome::Unliked { likes } => {
                let likes = likes.to_string();
                self.logger.debug_with(
                    "like toggled",
                    &[("post_id", id.as_str()), ("likes", likes.as_str())],
                );
            }
            LikeOutcome::UnknownPost => {}
        }
    }

    fn update_composing(&mut self, key: Key) -> Command {
        match key {
            Key::Enter => return self.submit(),
            Key::Escape => self.composing = false,
            Key::Backspace => self.feed.pop_char(),
            Key::Char(ch) => self.feed.push_char(ch),
            _ => {}
        }
        Command::None
    }

    fn render_post(&self, frame: &mut RenderFrame, rect: Rect, post: &Post, focused: bool) {
        let now = (self.clock)();
        let head = format!("{}{}  · {}", marker(focused), post.author, post.age_label(now));
        let role = if focused {
            TextRole::Focus
        } else {
            TextRole::Accent
        };
        frame.draw_text_in_rect(rect, 0, 0, &head, role);

        let body_width = rect.width.saturating_sub(4);
        let mut lines = wrap(&post.body, body_width);
        if lines.len() > 2 {
            lines.truncate(2);
            if let Some(last) = lines.last_mut() {
                *last = truncate(&format!("{last} …"), body_width);
            }
        }
        for (offset, line) in lines.iter().enumerate() {
            frame.draw_text_in_rect(rect, 4, 1 + offset, line, TextRole::Primary);
        }

        let heart = if post.liked { '♥' } else { '♡' };
        let actions = format!(
            "{heart} {}   ✉ {} comments   ↗ Share",
            post.likes, post.comments
        );
        let action_role = if post.liked {
            TextRole::Danger
        } else {
            TextRole::Muted
        };
        frame.draw_text_in_rect(rect, 4, 3, &actions, action_role);
    }
}

impl View for FeedView {
    fn screen(&self) -> Screen {
        Screen::Feed
    }

    fn captures_text(&self) -> bool {
        self.composing
    }

    fn update(&mut self, event: InputEvent) -> Command {
        let InputEvent::Key(key) = event else {
            return Command::None;
        };
        if key.modifiers.ctrl || key.modifiers.alt {
            return Command::None;
        }
        if self.composing {
            return self.update_composing(key.key);
        }
        match key.key {
            Key::Char('c') | Key::Char('i') | Key::Tab => {
                self.composing = true;
                return Command::None;
            }
            Key::Char('l') | Key::Char(' ') => {
                self.toggle_like();
                return Command::None;
            }
            _ => {}
        }
        let len = self.feed.posts().len();
        match translate_input(&event) {
            UiAction::MoveUp => self.selected = step(self.selected, len, -1),
            UiAction::MoveDown => self.selected = step(self.selected, len, 1),
            _ => {}
        }
        Command::None
    }

    fn view(&self, size: FrameSize, theme: ThemeSpec, _ctx: &ViewContext<'_>) -> RenderFrame {
        let mut frame = RenderFrame::new(size, theme);
        let width = size.width;
        let mut y = draw_heading(&mut frame, "Anonymous Community", "Share your story safely");

        let spec = WidgetSpec::feed_composer();
        let border = frame.color_for_role(if self.composing {
            TextRole::Focus
        } else {
            TextRole::Muted
        });
        let inner = frame.draw_panel(
            Rect {
                x: 1,
                y,
                width: width.saturating_sub(2),
                height: 4,
            },
            spec.title,
            spec.border,
            border,
        );
        let draft = self.feed.draft();
        if self.composing {
            let shown = format!("{draft}▏");
            let count = shown.chars().count();
            let tail: String = if count > inner.width {
                shown.chars().skip(count - inner.width).collect()
            } else {
                shown
            };
            frame.draw_text_in_rect(inner, 0, 0, &tail, TextRole::Primary);
            frame.draw_text_in_rect(
                inner,
                0,
                1,
                "enter Share Anonymously   esc done",
                TextRole::Muted,
            );
        } else {
            let text = if draft.is_empty() { PLACEHOLDER } else { draft };
            frame.draw_text_in_rect(inner, 0, 0, text, TextRole::Muted);
            frame.draw_text_in_rect(
                inner,
                0,
                1,
                "c compose   l like   ↑↓ select",
                TextRole::Muted,
            );
        }
        y += 5;

        let banner_y = size.height.saturating_sub(1);
        let visible = banner_y.saturating_sub(y) / POST_ROWS;
        let start = if visible == 0 {
            self.selected
        } else {
            self.selected.saturating_sub(visible - 1)
        };
        for (offset, post) in self
            .feed
            .posts()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
        {
            let rect = Rect {
                x: 1,
                y: y + (offset - start) * POST_ROWS,
                width: width.saturating_sub(2),
                height: POST_ROWS - 1,
            };
            self.render_post(&mut frame, rect, post, offset == self.selected);
        }

        frame.draw_text_centered(0, banner_y, width, BANNER, TextRole::Info);
        frame
    }
}
