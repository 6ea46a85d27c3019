//! Interactive crossterm runtime: raw mode, the event loop and frame output.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, Event as TerminalEvent, KeyCode as TerminalKeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use haven_ftui_adapter::input::{InputEvent, Key, KeyEvent, Modifiers, ResizeEvent};
use haven_ftui_adapter::render::{CellStyle, RenderFrame, TermColor};

use crate::app::{App, Command};
use crate::logging::Logger;
use crate::telephony::Telephony;

/// Run until the app asks to quit. Terminal state is restored on every exit
/// path, including errors.
pub fn run(app: &mut App, telephony: &mut dyn Telephony, logger: &Logger) -> Result<(), String> {
    let logger = logger.component("runtime");
    let mut session =
        TerminalSession::enter().map_err(|err| format!("enter tui terminal mode: {err}"))?;

    let (width, height) = terminal_size().map_err(|err| format!("read terminal size: {err}"))?;
    let _ = app.update(InputEvent::Resize(ResizeEvent { width, height }));
    logger.info_with(
        "terminal ready",
        &[
            ("width", width.to_string().as_str()),
            ("height", height.to_string().as_str()),
        ],
    );

    let mut dirty = true;
    loop {
        if dirty {
            let frame = app.render();
            render_frame(&mut session.stdout, &frame)
                .map_err(|err| format!("render frame: {err}"))?;
            dirty = false;
        }

        if app.quitting() {
            break;
        }

        let event = event::read().map_err(|err| format!("read terminal event: {err}"))?;
        if let Some(input) = map_terminal_event(event) {
            let command = app.update(input);
            dispatch_command(command, telephony);
            dirty = true;
        }
    }

    logger.info("terminal released");
    Ok(())
}

/// Execute what the shell could not resolve on its own.
pub fn dispatch_command(command: Command, telephony: &mut dyn Telephony) {
    match command {
        Command::Dial(request) => telephony.dial(&request),
        Command::Batch(commands) => {
            for command in commands {
                dispatch_command(command, telephony);
            }
        }
        Command::None
        | Command::Navigate(_)
        | Command::ToggleAlert
        | Command::Notify(_)
        | Command::Quit => {}
    }
}

fn terminal_size() -> io::Result<(usize, usize)> {
    let (width, height) = terminal::size()?;
    Ok((usize::from(width), usize::from(height)))
}

fn map_terminal_event(event: TerminalEvent) -> Option<InputEvent> {
    match event {
        TerminalEvent::Resize(width, height) => Some(InputEvent::Resize(ResizeEvent {
            width: usize::from(width),
            height: usize::from(height),
        })),
        TerminalEvent::Key(key_event) => {
            if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return None;
            }

            let key = match key_event.code {
                TerminalKeyCode::Char(ch) => Key::Char(ch),
                TerminalKeyCode::Enter => Key::Enter,
                TerminalKeyCode::Esc => Key::Escape,
                TerminalKeyCode::Tab | TerminalKeyCode::BackTab => Key::Tab,
                TerminalKeyCode::Backspace => Key::Backspace,
                TerminalKeyCode::Delete => Key::Delete,
                TerminalKeyCode::Up => Key::Up,
                TerminalKeyCode::Down => Key::Down,
                TerminalKeyCode::Left => Key::Left,
                TerminalKeyCode::Right => Key::Right,
                _ => return None,
            };

            let modifiers = Modifiers {
                shift: key_event.modifiers.contains(KeyModifiers::SHIFT)
                    || matches!(key_event.code, TerminalKeyCode::BackTab),
                ctrl: key_event.modifiers.contains(KeyModifiers::CONTROL),
                alt: key_event.modifiers.contains(KeyModifiers::ALT),
            };

            Some(InputEvent::Key(KeyEvent { key, modifiers }))
        }
        _ => None,
    }
}

fn render_frame<W: Write>(out: &mut W, frame: &RenderFrame) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    let size = frame.size();

    for y in 0..size.height {
        queue!(out, MoveTo(0, to_u16(y)))?;
        let mut style = None;
        for x in 0..size.width {
            if let Some(cell) = frame.cell(x, y) {
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                queue!(out, Print(cell.glyph))?;
            }
        }
    }

    queue!(out, SetAttribute(Attribute::Reset))?;
    out.flush()
}

fn to_crossterm(color: TermColor) -> Color {
    match color {
        TermColor::Ansi256(idx) => Color::AnsiValue(idx),
        TermColor::Rgb(r, g, b) => Color::Rgb { r, g, b },
    }
}

fn queue_style<W: Write>(out: &mut W, style: CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_crossterm(style.fg)),
        SetBackgroundColor(to_crossterm(style.bg)),
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    } else if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            LeaveAlternateScreen,
            Show,
            MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent as TerminalKeyEvent;
    use haven_core::safety::DialRequest;
    use haven_ftui_adapter::render::FrameSize;
    use haven_ftui_adapter::style::ThemeSpec;

    use crate::telephony::RecordingDialer;

    #[test]
    fn maps_ctrl_keys_and_backtab() {
        let ctrl_t = TerminalEvent::Key(TerminalKeyEvent::new(
            TerminalKeyCode::Char('t'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(
            map_terminal_event(ctrl_t),
            Some(InputEvent::Key(KeyEvent::ctrl('t')))
        );
        let backtab = TerminalEvent::Key(TerminalKeyEvent::new(
            TerminalKeyCode::BackTab,
            KeyModifiers::NONE,
        ));
        assert!(matches!(
            map_terminal_event(backtab),
            Some(InputEvent::Key(KeyEvent {
                key: Key::Tab,
                modifiers: Modifiers { shift: true, .. }
            }))
        ));
    }

    #[test]
    fn maps_resize_and_drops_focus_events() {
        assert_eq!(
            map_terminal_event(TerminalEvent::Resize(90, 30)),
            Some(InputEvent::Resize(ResizeEvent {
                width: 90,
                height: 30
            }))
        );
        assert_eq!(map_terminal_event(TerminalEvent::FocusGained), None);
    }

    #[test]
    fn dispatch_hands_dials_to_telephony() {
        let mut dialer = RecordingDialer::default();
        dispatch_command(
            Command::Batch(vec![
                Command::Dial(DialRequest::new("10111", "Police")),
                Command::Quit,
                Command::Dial(DialRequest::new("116", "Childline")),
            ]),
            &mut dialer,
        );
        let numbers: Vec<&str> = dialer.calls.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["10111", "116"]);
    }

    #[test]
    fn render_frame_writes_glyphs() {
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 4,
                height: 1,
            },
            ThemeSpec::default(),
        );
        frame.draw_text(0, 0, "SOS", haven_ftui_adapter::render::TextRole::Danger);
        let mut out = Vec::new();
        assert!(render_frame(&mut out, &frame).is_ok());
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('S'));
        assert!(text.contains('O'));
    }
}
