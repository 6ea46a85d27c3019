//! Root shell: navigation, alert mode, the mounted view and global keys.
//!
//! Exactly one [`View`] is mounted at a time. Every screen change drops the
//! old view and mounts a fresh one, so per-view state never outlives its
//! screen. Views talk to the shell only through returned [`Command`]s.

use chrono::{DateTime, Utc};
use haven_core::navigation::{AlertMode, HomePage, NavAction, NavigationState, Screen, Tab};
use haven_core::safety::DialRequest;
use haven_ftui_adapter::input::{InputEvent, Key, KeyEvent};
use haven_ftui_adapter::render::{truncate, FrameSize, RenderFrame, TextRole};
use haven_ftui_adapter::style::{ThemeKind, ThemeSpec};

use crate::config::{ConfigError, HavenConfig, ProfileConfig};
use crate::logging::Logger;
use crate::views::{self, MountContext};

/// Wall clock used for post timestamps. Tests pin it.
pub type Clock = fn() -> DateTime<Utc>;

/// Rows reserved by the shell: header, tab bar and status line.
const CHROME_ROWS: usize = 3;

/// Requests a view (or the shell itself) hands upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Navigate(NavAction),
    ToggleAlert,
    Dial(DialRequest),
    Notify(String),
    Quit,
    Batch(Vec<Command>),
}

impl Command {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Shell-owned values a view reads while rendering.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub alert: AlertMode,
    pub profile: &'a ProfileConfig,
}

/// A mounted screen.
pub trait View {
    fn screen(&self) -> Screen;

    fn update(&mut self, event: InputEvent) -> Command;

    fn view(&self, size: FrameSize, theme: ThemeSpec, ctx: &ViewContext<'_>) -> RenderFrame;

    /// While `true`, plain keystrokes go to the view before global keys.
    fn captures_text(&self) -> bool {
        false
    }
}

/// Everything needed to build an [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub start_tab: Tab,
    pub start_page: HomePage,
    pub theme: ThemeKind,
    pub profile: ProfileConfig,
    pub min_password_len: usize,
    pub logger: Logger,
    pub clock: Clock,
    pub seed: Option<u64>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            start_tab: Tab::Home,
            start_page: HomePage::Home,
            theme: ThemeKind::Dark,
            profile: ProfileConfig::default(),
            min_password_len: haven_core::vault::DEFAULT_MIN_PASSWORD_LEN,
            logger: Logger::discard(),
            clock: Utc::now,
            seed: None,
        }
    }
}

impl AppOptions {
    pub fn from_config(config: &HavenConfig, logger: Logger) -> Result<Self, ConfigError> {
        Ok(Self {
            start_tab: config.start_tab,
            start_page: config.start_page,
            theme: config.theme_kind()?,
            profile: config.profile.clone(),
            min_password_len: config.vault.min_password_len,
            logger,
            ..Self::default()
        })
    }
}

pub struct App {
    nav: NavigationState,
    alert: AlertMode,
    view: Box<dyn View>,
    mount: MountContext,
    profile: ProfileConfig,
    logger: Logger,

    width: usize,
    height: usize,
    theme: ThemeSpec,

    show_help: bool,
    toast: String,
    quitting: bool,
}

impl App {
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        let logger = options.logger.component("shell");
        let mount = MountContext {
            logger: options.logger.clone(),
            min_password_len: options.min_password_len,
            clock: options.clock,
            seed: options.seed,
        };
        let nav = NavigationState::starting_at(options.start_tab, options.start_page);
        let view = views::mount(nav.screen(), &mount);
        Self {
            nav,
            alert: AlertMode::default(),
            view,
            mount,
            profile: options.profile,
            logger,
            width: 80,
            height: 24,
            theme: ThemeSpec::for_kind(options.theme),
            show_help: false,
            toast: String::new(),
            quitting: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.nav
    }

    #[must_use]
    pub fn alert(&self) -> AlertMode {
        self.alert
    }

    #[must_use]
    pub fn theme(&self) -> ThemeSpec {
        self.theme
    }

    #[must_use]
    pub fn toast(&self) -> &str {
        &self.toast
    }

    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    #[must_use]
    pub fn quitting(&self) -> bool {
        self.quitting
    }

    /// Mounted screen as reported by the view itself.
    #[must_use]
    pub fn mounted_screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Process one input event. Shell-level commands are resolved here; what
    /// comes back (`Dial`, `Quit`) is for the runtime.
    pub fn update(&mut self, event: InputEvent) -> Command {
        if let InputEvent::Resize(resize) = event {
            self.set_size(resize.width, resize.height);
            return Command::None;
        }

        if let InputEvent::Key(key_event) = event {
            self.toast.clear();
            let (cmd, handled) = self.handle_global_key(key_event);
            if handled {
                return self.resolve_command(cmd);
            }
        }

        let cmd = self.view.update(event);
        self.resolve_command(cmd)
    }

    #[must_use]
    pub fn render(&self) -> RenderFrame {
        let width = self.width.max(1);
        let height = self.height.max(CHROME_ROWS + 1);
        let content_height = height - CHROME_ROWS;
        let mut frame = RenderFrame::new(FrameSize { width, height }, self.theme);

        self.render_header(&mut frame, width);
        if self.show_help {
            self.render_help_overlay(&mut frame, width, content_height, 1);
        } else {
            let ctx = ViewContext {
                alert: self.alert,
                profile: &self.profile,
            };
            let view_frame = self.view.view(
                FrameSize {
                    width,
                    height: content_height,
                },
                self.theme,
                &ctx,
            );
            frame.blit(&view_frame, 0, 1);
        }
        self.render_tab_bar(&mut frame, width, height - 2);
        self.render_status(&mut frame, width, height - 1);
        frame
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> (Command, bool) {
        if key.modifiers.ctrl {
            match key.key {
                Key::Char('c') => return (Command::Quit, true),
                Key::Char('t') => {
                    self.cycle_theme();
                    return (Command::None, true);
                }
                _ => {}
            }
        }

        if self.show_help {
            self.show_help = false;
            if matches!(key.key, Key::Char('?') | Key::Escape) {
                return (Command::None, true);
            }
        }

        if self.view.captures_text() {
            return (Command::None, false);
        }

        match key.key {
            Key::Char('q') => (Command::Quit, true),
            Key::Char('?') => {
                self.show_help = true;
                (Command::None, true)
            }
            Key::Char('1') => (Command::Navigate(NavAction::SelectTab(Tab::Home)), true),
            Key::Char('2') => (Command::Navigate(NavAction::SelectTab(Tab::Chats)), true),
            Key::Char('3') => (Command::Navigate(NavAction::SelectTab(Tab::Settings)), true),
            Key::Escape => (Command::Navigate(NavAction::Back), true),
            _ => (Command::None, false),
        }
    }

    fn resolve_command(&mut self, cmd: Command) -> Command {
        match cmd {
            Command::None => Command::None,
            Command::Navigate(action) => self.navigate(action),
            Command::ToggleAlert => {
                self.alert = self.alert.toggled();
                self.logger
                    .info_with("alert mode changed", &[("mode", self.alert.label())]);
                Command::None
            }
            Command::Dial(request) => {
                self.toast = format!("Calling {}", request.number);
                Command::Dial(request)
            }
            Command::Notify(message) => {
                self.toast = message;
                Command::None
            }
            Command::Quit => {
                self.quitting = true;
                self.logger.info("quit requested");
                Command::Quit
            }
            Command::Batch(cmds) => {
                let mut resolved = Vec::with_capacity(cmds.len());
                for c in cmds {
                    let r = self.resolve_command(c);
                    if !r.is_none() {
                        resolved.push(r);
                    }
                }
                match resolved.len() {
                    0 => Command::None,
                    1 => resolved.into_iter().next().unwrap_or(Command::None),
                    _ => Command::Batch(resolved),
                }
            }
        }
    }

    fn navigate(&mut self, action: NavAction) -> Command {
        let from = self.nav.screen();
        if !self.nav.apply(action) {
            return Command::None;
        }
        let to = self.nav.screen();
        self.logger
            .info_with("navigate", &[("from", from.as_str()), ("to", to.as_str())]);
        self.view = views::mount(to, &self.mount);
        Command::None
    }

    fn cycle_theme(&mut self) {
        let next = self.theme.kind.next();
        self.theme = ThemeSpec::for_kind(next);
        self.toast = format!("Theme: {}", next.as_str());
        self.logger.debug_with("theme changed", &[("theme", next.as_str())]);
    }

    fn render_header(&self, frame: &mut RenderFrame, width: usize) {
        frame.draw_text(0, 0, " HAVEN ", TextRole::Accent);
        let title = truncate(self.nav.screen().label(), width.saturating_sub(8));
        frame.draw_text(8, 0, &title, TextRole::Primary);

        let alert = format!("{} {} ", self.alert.icon(), self.alert.label());
        let role = if self.alert.is_active() {
            TextRole::Danger
        } else {
            TextRole::Muted
        };
        let alert_width = alert.chars().count();
        if width > 8 + title.chars().count() + alert_width {
            frame.draw_text(width - alert_width, 0, &alert, role);
        }
    }

    fn render_tab_bar(&self, frame: &mut RenderFrame, width: usize, y: usize) {
        frame.draw_horizontal_rule(0, y, width, TextRole::Muted);
        let slots = frame.area().columns(Tab::ALL.len(), 0);
        for ((index, tab), slot) in Tab::ALL.iter().enumerate().zip(slots) {
            let active = *tab == self.nav.tab();
            let label = if active {
                format!("[{}] {}", index + 1, tab.label())
            } else {
                format!(" {}  {}", index + 1, tab.label())
            };
            let role = if active {
                TextRole::Focus
            } else {
                TextRole::Muted
            };
            frame.draw_text_centered(slot.x, y, slot.width, &label, role);
        }
    }

    fn render_status(&self, frame: &mut RenderFrame, width: usize, y: usize) {
        if !self.toast.is_empty() {
            frame.draw_text(
                1,
                y,
                &truncate(&self.toast, width.saturating_sub(1)),
                TextRole::Warning,
            );
            return;
        }
        let hint = if self.show_help {
            "? close help"
        } else if self.view.captures_text() {
            "esc leave field  ctrl+c quit"
        } else {
            "? help  q quit  esc back  1-3 tabs"
        };
        frame.draw_text(1, y, &truncate(hint, width.saturating_sub(1)), TextRole::Muted);
    }

    fn render_help_overlay(&self, frame: &mut RenderFrame, width: usize, height: usize, y: usize) {
        let lines = [
            "Haven keys",
            "",
            "Tabs:",
            "  1 home   2 chats   3 settings",
            "  esc      back to the previous screen",
            "",
            "Home:",
            "  a        toggle alert mode",
            "  v g s    vault, guides, safety",
            "  arrows   move focus   enter  activate",
            "",
            "Global:",
            "  ?        toggle help",
            "  ctrl+t   cycle theme",
            "  q        quit (ctrl+c inside text fields)",
        ];
        for (i, line) in lines.iter().enumerate().take(height) {
            let role = if i == 0 {
                TextRole::Accent
            } else {
                TextRole::Primary
            };
            frame.draw_text(1, y + i, &truncate(line, width.saturating_sub(1)), role);
        }
    }
}
