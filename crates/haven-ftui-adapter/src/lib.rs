//! haven-ftui-adapter: render and input boundary for the Haven TUI.
//!
//! App crates draw into a [`render::RenderFrame`] cell buffer and consume
//! canonical [`input::InputEvent`]s. Only the runtime translates between these
//! and the terminal backend.

/// Style and theme primitives consumed by Haven TUI crates.
pub mod style {
    /// Logical theme choices supported by the adapter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ThemeKind {
        Dark,
        Light,
        HighContrast,
    }

    impl ThemeKind {
        pub const ALL: [ThemeKind; 3] = [Self::Dark, Self::Light, Self::HighContrast];

        #[must_use]
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Dark => "dark",
                Self::Light => "light",
                Self::HighContrast => "high-contrast",
            }
        }

        /// Parse a theme name (case-insensitive, `_` and `-` interchangeable).
        #[must_use]
        pub fn from_name(name: &str) -> Option<Self> {
            match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
                "dark" => Some(Self::Dark),
                "light" => Some(Self::Light),
                "high-contrast" | "contrast" => Some(Self::HighContrast),
                _ => None,
            }
        }

        /// Next theme in the ctrl+t cycle.
        #[must_use]
        pub fn next(self) -> Self {
            match self {
                Self::Dark => Self::Light,
                Self::Light => Self::HighContrast,
                Self::HighContrast => Self::Dark,
            }
        }
    }

    /// Stable style tokens exposed to application crates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StyleToken {
        Background,
        Surface,
        Foreground,
        Muted,
        Accent,
        Success,
        Danger,
        Warning,
        Info,
        Focus,
    }

    /// Adapter palette uses terminal 256-color indexes for portability.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        pub background: u8,
        pub surface: u8,
        pub foreground: u8,
        pub muted: u8,
        pub accent: u8,
        pub success: u8,
        pub danger: u8,
        pub warning: u8,
        pub info: u8,
        pub focus: u8,
    }

    /// Typography emphasis policy per theme.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypographySpec {
        pub accent_bold: bool,
        pub success_bold: bool,
        pub danger_bold: bool,
        pub warning_bold: bool,
        pub muted_dim: bool,
        pub focus_underline: bool,
    }

    /// Theme palette and typography handed to views.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ThemeSpec {
        pub kind: ThemeKind,
        pub palette: Palette,
        pub typography: TypographySpec,
    }

    impl ThemeSpec {
        /// Returns the color index for a stable style token.
        #[must_use]
        pub fn color(self, token: StyleToken) -> u8 {
            match token {
                StyleToken::Background => self.palette.background,
                StyleToken::Surface => self.palette.surface,
                StyleToken::Foreground => self.palette.foreground,
                StyleToken::Muted => self.palette.muted,
                StyleToken::Accent => self.palette.accent,
                StyleToken::Success => self.palette.success,
                StyleToken::Danger => self.palette.danger,
                StyleToken::Warning => self.palette.warning,
                StyleToken::Info => self.palette.info,
                StyleToken::Focus => self.palette.focus,
            }
        }

        /// Builds a theme for the requested style family.
        #[must_use]
        pub fn for_kind(kind: ThemeKind) -> Self {
            let palette = match kind {
                ThemeKind::Dark => Palette {
                    background: 16,
                    surface: 236,
                    foreground: 252,
                    muted: 244,
                    accent: 135,
                    success: 42,
                    danger: 203,
                    warning: 214,
                    info: 111,
                    focus: 213,
                },
                ThemeKind::Light => Palette {
                    background: 255,
                    surface: 254,
                    foreground: 235,
                    muted: 245,
                    accent: 91,
                    success: 29,
                    danger: 160,
                    warning: 130,
                    info: 25,
                    focus: 162,
                },
                ThemeKind::HighContrast => Palette {
                    background: 16,
                    surface: 232,
                    foreground: 231,
                    muted: 250,
                    accent: 177,
                    success: 118,
                    danger: 196,
                    warning: 226,
                    info: 159,
                    focus: 219,
                },
            };
            let typography = TypographySpec {
                accent_bold: true,
                success_bold: kind == ThemeKind::HighContrast,
                danger_bold: true,
                warning_bold: true,
                muted_dim: kind == ThemeKind::Dark,
                focus_underline: true,
            };
            Self {
                kind,
                palette,
                typography,
            }
        }
    }

    impl Default for ThemeSpec {
        fn default() -> Self {
            Self::for_kind(ThemeKind::Dark)
        }
    }
}

/// Render and frame primitives consumed by Haven TUI crates.
pub mod render {
    use super::style::{StyleToken, ThemeSpec};
    use super::widgets::BorderStyle;

    /// Terminal color: ANSI256 index or 24-bit RGB.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TermColor {
        Ansi256(u8),
        Rgb(u8, u8, u8),
    }

    /// Frame dimensions in terminal cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameSize {
        pub width: usize,
        pub height: usize,
    }

    /// A rectangular region within a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rect {
        pub x: usize,
        pub y: usize,
        pub width: usize,
        pub height: usize,
    }

    impl Rect {
        /// Inner region after removing border (1 cell each side).
        #[must_use]
        pub fn inner(self) -> Self {
            if self.width < 2 || self.height < 2 {
                return Self {
                    x: self.x,
                    y: self.y,
                    width: 0,
                    height: 0,
                };
            }
            Self {
                x: self.x + 1,
                y: self.y + 1,
                width: self.width - 2,
                height: self.height - 2,
            }
        }

        /// Split into `count` equal columns separated by `gap` cells. The last
        /// column absorbs any remainder.
        #[must_use]
        pub fn columns(self, count: usize, gap: usize) -> Vec<Self> {
            if count == 0 {
                return Vec::new();
            }
            let gaps = gap.saturating_mul(count - 1);
            let each = self.width.saturating_sub(gaps) / count;
            (0..count)
                .map(|i| {
                    let x = self.x + i * (each + gap);
                    let width = if i + 1 == count {
                        (self.x + self.width).saturating_sub(x)
                    } else {
                        each
                    };
                    Self {
                        x,
                        y: self.y,
                        width,
                        height: self.height,
                    }
                })
                .collect()
        }
    }

    /// Cell style represented as terminal colors and text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellStyle {
        pub fg: TermColor,
        pub bg: TermColor,
        pub bold: bool,
        pub dim: bool,
        pub underline: bool,
    }

    /// A single frame cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameCell {
        pub glyph: char,
        pub style: CellStyle,
    }

    /// Semantic role for rendered text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TextRole {
        Primary,
        Muted,
        Accent,
        Success,
        Danger,
        Warning,
        Info,
        Focus,
    }

    struct BorderChars {
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    }

    fn border_chars(style: BorderStyle) -> BorderChars {
        match style {
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Plain => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Dashed => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '╌',
                vertical: '╎',
            },
            BorderStyle::Heavy => BorderChars {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
            },
        }
    }

    /// Truncate to at most `width` chars, ending in `…` when cut.
    #[must_use]
    pub fn truncate(text: &str, width: usize) -> String {
        let count = text.chars().count();
        if count <= width {
            return text.to_owned();
        }
        if width == 0 {
            return String::new();
        }
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }

    /// Greedy word wrap to `width` columns. Words longer than a line are split.
    #[must_use]
    pub fn wrap(text: &str, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        let mut lines = Vec::new();
        let mut line = String::new();
        for word in text.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..width).collect());
            }
            if word.is_empty() {
                continue;
            }
            let line_len = line.chars().count();
            let needed = if line.is_empty() {
                word.len()
            } else {
                line_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Cell buffer the views draw into.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderFrame {
        size: FrameSize,
        cells: Vec<FrameCell>,
        theme: ThemeSpec,
    }

    impl RenderFrame {
        /// Create a blank frame using the provided adapter theme.
        #[must_use]
        pub fn new(size: FrameSize, theme: ThemeSpec) -> Self {
            let default_cell = FrameCell {
                glyph: ' ',
                style: CellStyle {
                    fg: TermColor::Ansi256(theme.color(StyleToken::Foreground)),
                    bg: TermColor::Ansi256(theme.color(StyleToken::Background)),
                    bold: false,
                    dim: false,
                    underline: false,
                },
            };
            Self {
                size,
                cells: vec![default_cell; size.width.saturating_mul(size.height)],
                theme,
            }
        }

        #[must_use]
        pub fn theme(&self) -> ThemeSpec {
            self.theme
        }

        #[must_use]
        pub fn size(&self) -> FrameSize {
            self.size
        }

        /// Whole-frame rect.
        #[must_use]
        pub fn area(&self) -> Rect {
            Rect {
                x: 0,
                y: 0,
                width: self.size.width,
                height: self.size.height,
            }
        }

        /// Returns one frame cell for assertions/snapshot helpers.
        #[must_use]
        pub fn cell(&self, x: usize, y: usize) -> Option<FrameCell> {
            if x >= self.size.width || y >= self.size.height {
                return None;
            }
            Some(self.cells[y * self.size.width + x])
        }

        /// Write a single cell, clipped to frame bounds.
        pub fn set_cell(&mut self, x: usize, y: usize, cell: FrameCell) {
            if x >= self.size.width || y >= self.size.height {
                return;
            }
            self.cells[y * self.size.width + x] = cell;
        }

        /// Copy another frame into this one at an offset.
        pub fn blit(&mut self, src: &RenderFrame, x_offset: usize, y_offset: usize) {
            let src_size = src.size();
            for sy in 0..src_size.height {
                for sx in 0..src_size.width {
                    if let Some(cell) = src.cell(sx, sy) {
                        self.set_cell(x_offset + sx, y_offset + sy, cell);
                    }
                }
            }
        }

        /// Rows `top..top + height` of this frame as a new frame. Rows past
        /// the bottom come back blank.
        #[must_use]
        pub fn viewport(&self, top: usize, height: usize) -> RenderFrame {
            let mut out = RenderFrame::new(
                FrameSize {
                    width: self.size.width,
                    height,
                },
                self.theme,
            );
            for y in 0..height {
                for x in 0..self.size.width {
                    if let Some(cell) = self.cell(x, top + y) {
                        out.set_cell(x, y, cell);
                    }
                }
            }
            out
        }

        /// Draw text on a single row, clipped to frame width.
        pub fn draw_text(&mut self, x: usize, y: usize, text: &str, role: TextRole) {
            let style = self.text_style(role);
            self.put_str(x, y, text, style, self.size.width);
        }

        /// Draw text centered within `width` columns starting at `x`.
        pub fn draw_text_centered(
            &mut self,
            x: usize,
            y: usize,
            width: usize,
            text: &str,
            role: TextRole,
        ) {
            let text = truncate(text, width);
            let pad = width.saturating_sub(text.chars().count()) / 2;
            self.draw_text(x + pad, y, &text, role);
        }

        /// Draw text within a rect, clipped to rect bounds.
        pub fn draw_text_in_rect(
            &mut self,
            rect: Rect,
            x_offset: usize,
            y_offset: usize,
            text: &str,
            role: TextRole,
        ) {
            if y_offset >= rect.height {
                return;
            }
            let style = self.text_style(role);
            self.put_str(
                rect.x + x_offset,
                rect.y + y_offset,
                text,
                style,
                rect.x + rect.width,
            );
        }

        /// Draw a bordered panel with a title into a rectangular region.
        ///
        /// Returns the inner `Rect` (content area inside the border).
        pub fn draw_panel(
            &mut self,
            rect: Rect,
            title: &str,
            border: BorderStyle,
            border_color: TermColor,
        ) -> Rect {
            if rect.width < 2 || rect.height < 2 {
                return Rect {
                    x: rect.x,
                    y: rect.y,
                    width: 0,
                    height: 0,
                };
            }
            let chars = border_chars(border);
            let bg = TermColor::Ansi256(self.theme.color(StyleToken::Background));
            let border_style = CellStyle {
                fg: border_color,
                bg,
                bold: false,
                dim: false,
                underline: false,
            };
            self.fill_bg(rect, bg);

            let right = rect.x + rect.width - 1;
            let bottom = rect.y + rect.height - 1;
            for col in rect.x + 1..right {
                self.set_cell(col, rect.y, glyph(chars.horizontal, border_style));
                self.set_cell(col, bottom, glyph(chars.horizontal, border_style));
            }
            for row in rect.y + 1..bottom {
                self.set_cell(rect.x, row, glyph(chars.vertical, border_style));
                self.set_cell(right, row, glyph(chars.vertical, border_style));
            }
            self.set_cell(rect.x, rect.y, glyph(chars.top_left, border_style));
            self.set_cell(right, rect.y, glyph(chars.top_right, border_style));
            self.set_cell(rect.x, bottom, glyph(chars.bottom_left, border_style));
            self.set_cell(right, bottom, glyph(chars.bottom_right, border_style));

            if !title.is_empty() && rect.width > 4 {
                let title_text = format!(" {} ", truncate(title, rect.width - 4));
                let title_style = CellStyle {
                    bold: true,
                    ..border_style
                };
                self.put_str(rect.x + 1, rect.y, &title_text, title_style, right);
            }
            rect.inner()
        }

        /// Draw a horizontal rule across a row within a region.
        pub fn draw_horizontal_rule(&mut self, x: usize, y: usize, width: usize, role: TextRole) {
            let style = self.text_style(role);
            for col in x..x + width {
                self.set_cell(col, y, glyph('─', style));
            }
        }

        /// Draw a gauge/progress bar at (x, y) with given width.
        /// `ratio` is 0.0..=1.0. Uses eighth-block characters for sub-cell
        /// precision.
        pub fn draw_gauge(
            &mut self,
            x: usize,
            y: usize,
            width: usize,
            ratio: f64,
            filled_color: TermColor,
            empty_color: TermColor,
        ) {
            if width == 0 || y >= self.size.height {
                return;
            }
            let bg = TermColor::Ansi256(self.theme.color(StyleToken::Background));
            let filled_exact = ratio.clamp(0.0, 1.0) * width as f64;
            let full_blocks = filled_exact as usize;
            let remainder = filled_exact - full_blocks as f64;
            let filled_style = CellStyle {
                fg: filled_color,
                bg,
                bold: false,
                dim: false,
                underline: false,
            };
            let empty_style = CellStyle {
                fg: empty_color,
                ..filled_style
            };
            const PARTIAL: [char; 8] = ['░', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];
            for i in 0..width {
                let cell = if i < full_blocks {
                    glyph('█', filled_style)
                } else if i == full_blocks && remainder > 0.0 {
                    let idx = ((remainder * 8.0) as usize).min(7);
                    glyph(PARTIAL[idx], filled_style)
                } else {
                    glyph('░', empty_style)
                };
                self.set_cell(x + i, y, cell);
            }
        }

        /// Fill a rectangular region with a background color.
        pub fn fill_bg(&mut self, rect: Rect, bg: TermColor) {
            let style = CellStyle {
                fg: TermColor::Ansi256(self.theme.color(StyleToken::Foreground)),
                bg,
                bold: false,
                dim: false,
                underline: false,
            };
            for row in rect.y..rect.y + rect.height {
                for col in rect.x..rect.x + rect.width {
                    self.set_cell(col, row, glyph(' ', style));
                }
            }
        }

        #[must_use]
        pub fn row_text(&self, y: usize) -> String {
            if y >= self.size.height {
                return String::new();
            }
            let start = y * self.size.width;
            let end = start + self.size.width;
            self.cells[start..end].iter().map(|cell| cell.glyph).collect()
        }

        /// Returns `true` if any row contains `needle`.
        #[must_use]
        pub fn contains_text(&self, needle: &str) -> bool {
            (0..self.size.height).any(|row| self.row_text(row).contains(needle))
        }

        /// Index of the first row containing `needle`.
        #[must_use]
        pub fn find_row(&self, needle: &str) -> Option<usize> {
            (0..self.size.height).find(|row| self.row_text(*row).contains(needle))
        }

        /// Text-only snapshot helper for lightweight regression tests.
        #[must_use]
        pub fn snapshot(&self) -> String {
            (0..self.size.height)
                .map(|row| self.row_text(row))
                .collect::<Vec<_>>()
                .join("\n")
        }

        /// Returns the `TermColor` for a semantic role.
        #[must_use]
        pub fn color_for_role(&self, role: TextRole) -> TermColor {
            TermColor::Ansi256(match role {
                TextRole::Primary => self.theme.color(StyleToken::Foreground),
                TextRole::Muted => self.theme.color(StyleToken::Muted),
                TextRole::Accent => self.theme.color(StyleToken::Accent),
                TextRole::Success => self.theme.color(StyleToken::Success),
                TextRole::Danger => self.theme.color(StyleToken::Danger),
                TextRole::Warning => self.theme.color(StyleToken::Warning),
                TextRole::Info => self.theme.color(StyleToken::Info),
                TextRole::Focus => self.theme.color(StyleToken::Focus),
            })
        }

        fn text_style(&self, role: TextRole) -> CellStyle {
            let typography = self.theme.typography;
            let (bold, dim, underline) = match role {
                TextRole::Primary | TextRole::Info => (false, false, false),
                TextRole::Muted => (false, typography.muted_dim, false),
                TextRole::Accent => (typography.accent_bold, false, false),
                TextRole::Success => (typography.success_bold, false, false),
                TextRole::Danger => (typography.danger_bold, false, false),
                TextRole::Warning => (typography.warning_bold, false, false),
                TextRole::Focus => (true, false, typography.focus_underline),
            };
            CellStyle {
                fg: self.color_for_role(role),
                bg: TermColor::Ansi256(self.theme.color(StyleToken::Background)),
                bold,
                dim,
                underline,
            }
        }

        fn put_str(&mut self, x: usize, y: usize, text: &str, style: CellStyle, limit: usize) {
            if y >= self.size.height {
                return;
            }
            let limit = limit.min(self.size.width);
            for (offset, ch) in text.chars().enumerate() {
                let col = x + offset;
                if col >= limit {
                    break;
                }
                self.cells[y * self.size.width + col] = glyph(ch, style);
            }
        }
    }

    fn glyph(ch: char, style: CellStyle) -> FrameCell {
        FrameCell { glyph: ch, style }
    }
}

/// Stable widget primitives consumed by Haven TUI crates.
pub mod widgets {
    /// Border treatment exposed by the adapter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BorderStyle {
        Plain,
        Rounded,
        Dashed,
        Heavy,
    }

    /// Text alignment for widget headers and columns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TextAlign {
        Left,
        Center,
        Right,
    }

    /// Visual emphasis for panels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Emphasis {
        Subtle,
        Normal,
        Strong,
        Critical,
    }

    /// Stable panel primitive shared by views and cards.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WidgetSpec {
        pub id: &'static str,
        pub title: &'static str,
        pub border: BorderStyle,
        pub emphasis: Emphasis,
    }

    impl WidgetSpec {
        /// Home-screen feature tile (Vault / Guides / Safety).
        #[must_use]
        pub fn feature_tile(title: &'static str) -> Self {
            Self {
                id: "home.feature",
                title,
                border: BorderStyle::Rounded,
                emphasis: Emphasis::Normal,
            }
        }

        /// Emergency support card on the home screen.
        #[must_use]
        pub fn support_card() -> Self {
            Self {
                id: "home.support",
                title: "Emergency Support",
                border: BorderStyle::Rounded,
                emphasis: Emphasis::Critical,
            }
        }

        /// Feed compose box.
        #[must_use]
        pub fn feed_composer() -> Self {
            Self {
                id: "feed.composer",
                title: "Share your experience anonymously",
                border: BorderStyle::Rounded,
                emphasis: Emphasis::Strong,
            }
        }

        /// Settings add-contact form.
        #[must_use]
        pub fn contact_form() -> Self {
            Self {
                id: "settings.contact_form",
                title: "Add Emergency Contact",
                border: BorderStyle::Dashed,
                emphasis: Emphasis::Strong,
            }
        }

        /// Vault password prompt.
        #[must_use]
        pub fn vault_lock() -> Self {
            Self {
                id: "vault.lock",
                title: "Enter Vault Password",
                border: BorderStyle::Heavy,
                emphasis: Emphasis::Strong,
            }
        }

        /// Guides achievements block.
        #[must_use]
        pub fn achievements() -> Self {
            Self {
                id: "guides.achievements",
                title: "Your Achievements",
                border: BorderStyle::Rounded,
                emphasis: Emphasis::Subtle,
            }
        }

        /// Safety tips block.
        #[must_use]
        pub fn safety_tips() -> Self {
            Self {
                id: "safety.tips",
                title: "Safety Tips",
                border: BorderStyle::Plain,
                emphasis: Emphasis::Subtle,
            }
        }
    }

    /// Table column primitive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TableColumnSpec {
        pub key: &'static str,
        pub title: &'static str,
        pub width: u16,
        pub align: TextAlign,
    }

    impl TableColumnSpec {
        /// Pad or truncate `text` to this column's width and alignment.
        #[must_use]
        pub fn fit(&self, text: &str) -> String {
            let width = usize::from(self.width);
            let text = super::render::truncate(text, width);
            let pad = width.saturating_sub(text.chars().count());
            match self.align {
                TextAlign::Left => format!("{text}{}", " ".repeat(pad)),
                TextAlign::Right => format!("{}{text}", " ".repeat(pad)),
                TextAlign::Center => {
                    let left = pad / 2;
                    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
                }
            }
        }
    }

    /// Columns of the vault file listing.
    #[must_use]
    pub fn vault_item_columns() -> [TableColumnSpec; 4] {
        [
            TableColumnSpec {
                key: "kind",
                title: "",
                width: 2,
                align: TextAlign::Left,
            },
            TableColumnSpec {
                key: "name",
                title: "Name",
                width: 32,
                align: TextAlign::Left,
            },
            TableColumnSpec {
                key: "date",
                title: "Date",
                width: 22,
                align: TextAlign::Left,
            },
            TableColumnSpec {
                key: "size",
                title: "Size",
                width: 8,
                align: TextAlign::Right,
            },
        ]
    }
}

/// Snapshot helpers for adapter-based render abstractions.
pub mod snapshot;

/// Stable input/event abstraction shielding TUI crates from backend key models.
pub mod input {
    /// Canonical key set exposed to Haven TUI crates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Key {
        Char(char),
        Enter,
        Escape,
        Tab,
        Backspace,
        Delete,
        Up,
        Down,
        Left,
        Right,
    }

    /// Canonical keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers {
        pub shift: bool,
        pub ctrl: bool,
        pub alt: bool,
    }

    impl Modifiers {
        #[must_use]
        pub const fn none() -> Self {
            Self {
                shift: false,
                ctrl: false,
                alt: false,
            }
        }
    }

    /// Canonical key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyEvent {
        pub key: Key,
        pub modifiers: Modifiers,
    }

    impl KeyEvent {
        #[must_use]
        pub const fn plain(key: Key) -> Self {
            Self {
                key,
                modifiers: Modifiers::none(),
            }
        }

        #[must_use]
        pub const fn ctrl(ch: char) -> Self {
            Self {
                key: Key::Char(ch),
                modifiers: Modifiers {
                    shift: false,
                    ctrl: true,
                    alt: false,
                },
            }
        }
    }

    /// Canonical frame resize event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResizeEvent {
        pub width: usize,
        pub height: usize,
    }

    /// Input stream event consumed by the shell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum InputEvent {
        Key(KeyEvent),
        Resize(ResizeEvent),
        Tick,
    }

    /// High-level actions produced by input translation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UiAction {
        Noop,
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        Confirm,
        Cancel,
        Toggle,
        Delete,
    }

    /// Default keymap for list navigation outside text fields. Modified keys
    /// belong to the shell and map to [`UiAction::Noop`].
    #[must_use]
    pub fn translate_input(event: &InputEvent) -> UiAction {
        let InputEvent::Key(KeyEvent { key, modifiers }) = event else {
            return UiAction::Noop;
        };
        if modifiers.ctrl || modifiers.alt {
            return UiAction::Noop;
        }
        match key {
            Key::Up | Key::Char('k') => UiAction::MoveUp,
            Key::Down | Key::Char('j') => UiAction::MoveDown,
            Key::Left | Key::Char('h') => UiAction::MoveLeft,
            Key::Right | Key::Char('l') => UiAction::MoveRight,
            Key::Enter => UiAction::Confirm,
            Key::Escape => UiAction::Cancel,
            Key::Char(' ') => UiAction::Toggle,
            Key::Delete | Key::Char('x') => UiAction::Delete,
            _ => UiAction::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::input::{translate_input, InputEvent, Key, KeyEvent, ResizeEvent, UiAction};
    use super::render::{truncate, wrap, FrameSize, Rect, RenderFrame, TermColor, TextRole};
    use super::style::{StyleToken, ThemeKind, ThemeSpec};
    use super::widgets::{self, BorderStyle, TextAlign, WidgetSpec};

    fn frame(width: usize, height: usize) -> RenderFrame {
        RenderFrame::new(FrameSize { width, height }, ThemeSpec::default())
    }

    #[test]
    fn default_theme_is_dark() {
        let theme = ThemeSpec::default();
        assert_eq!(theme.kind, ThemeKind::Dark);
        assert_eq!(theme.color(StyleToken::Accent), 135);
    }

    #[test]
    fn theme_names_round_trip() {
        for kind in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(
            ThemeKind::from_name("HIGH_CONTRAST"),
            Some(ThemeKind::HighContrast)
        );
        assert_eq!(ThemeKind::from_name("sepia"), None);
    }

    #[test]
    fn theme_cycle_returns_to_start() {
        let start = ThemeKind::Dark;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn render_frame_text_snapshot() {
        let mut frame = frame(12, 2);
        frame.draw_text(0, 0, "haven", TextRole::Accent);
        frame.draw_text(0, 1, "safe", TextRole::Muted);
        assert_eq!(frame.snapshot(), "haven       \nsafe        ");
    }

    #[test]
    fn render_frame_uses_role_color_tokens() {
        let theme = ThemeSpec::for_kind(ThemeKind::Dark);
        let mut frame = frame(4, 1);
        frame.draw_text(1, 0, "!", TextRole::Focus);
        let cell = frame.cell(1, 0);
        assert_eq!(
            cell.map(|c| c.style.fg),
            Some(TermColor::Ansi256(theme.color(StyleToken::Focus)))
        );
        assert_eq!(cell.map(|c| c.style.underline), Some(true));
    }

    #[test]
    fn muted_role_uses_dim_when_typography_enables_it() {
        let mut frame = frame(5, 1);
        frame.draw_text(0, 0, "muted", TextRole::Muted);
        assert_eq!(frame.cell(0, 0).map(|cell| cell.style.dim), Some(true));
    }

    #[test]
    fn centered_text() {
        let mut frame = frame(9, 1);
        frame.draw_text_centered(0, 0, 9, "abc", TextRole::Primary);
        assert_eq!(frame.row_text(0), "   abc   ");
    }

    #[test]
    fn viewport_crops_rows() {
        let mut frame = frame(3, 4);
        for (row, text) in ["one", "two", "six", "ten"].iter().enumerate() {
            frame.draw_text(0, row, text, TextRole::Primary);
        }
        let window = frame.viewport(2, 3);
        assert_eq!(window.size().height, 3);
        assert_eq!(window.row_text(0), "six");
        assert_eq!(window.row_text(1), "ten");
        assert_eq!(window.row_text(2), "   ");
    }

    #[test]
    fn panel_snapshot() {
        let mut frame = frame(10, 3);
        let inner = frame.draw_panel(
            frame.area(),
            "Vault",
            BorderStyle::Rounded,
            TermColor::Ansi256(135),
        );
        frame.draw_text_in_rect(inner, 0, 0, "locked-and-more", TextRole::Primary);
        assert_eq!(
            frame.snapshot(),
            "╭ Vault ─╮\n│locked-a│\n╰────────╯"
        );
    }

    #[test]
    fn gauge_fills_proportionally() {
        let mut frame = frame(8, 1);
        frame.draw_gauge(
            0,
            0,
            8,
            3.0 / 8.0,
            TermColor::Ansi256(1),
            TermColor::Ansi256(2),
        );
        assert_eq!(frame.row_text(0), "███░░░░░");
    }

    #[test]
    fn columns_split_with_gap() {
        let rect = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 3,
        };
        let cols = rect.columns(3, 1);
        let spans: Vec<(usize, usize)> = cols.iter().map(|c| (c.x, c.width)).collect();
        assert_eq!(spans, vec![(0, 6), (7, 6), (14, 6)]);
    }

    #[test]
    fn truncate_and_wrap() {
        assert_eq!(truncate("emergency", 6), "emerg…");
        assert_eq!(truncate("sos", 6), "sos");
        assert_eq!(
            wrap("stay on the line until help arrives", 12),
            vec!["stay on the", "line until", "help arrives"]
        );
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn widget_panel_snapshot() {
        let specs = [
            WidgetSpec::support_card(),
            WidgetSpec::vault_lock(),
            WidgetSpec::contact_form(),
        ];
        let rows: Vec<String> = specs
            .iter()
            .map(|s| format!("{}|{}|{:?}|{:?}", s.id, s.title, s.border, s.emphasis))
            .collect();
        assert_eq!(
            rows.join("\n"),
            "home.support|Emergency Support|Rounded|Critical\nvault.lock|Enter Vault Password|Heavy|Strong\nsettings.contact_form|Add Emergency Contact|Dashed|Strong"
        );
    }

    #[test]
    fn vault_columns_fit_text() {
        let columns = widgets::vault_item_columns();
        assert_eq!(columns[3].align, TextAlign::Right);
        assert_eq!(columns[3].fit("2.3 MB"), "  2.3 MB");
        assert_eq!(columns[1].fit("a").chars().count(), 32);
    }

    #[test]
    fn input_translation_keymap_snapshot() {
        let snapshot = format!(
            "{:?}|{:?}|{:?}|{:?}|{:?}",
            translate_input(&InputEvent::Key(KeyEvent::plain(Key::Up))),
            translate_input(&InputEvent::Key(KeyEvent::plain(Key::Char('j')))),
            translate_input(&InputEvent::Key(KeyEvent::plain(Key::Enter))),
            translate_input(&InputEvent::Key(KeyEvent::plain(Key::Char(' ')))),
            translate_input(&InputEvent::Key(KeyEvent::ctrl('j'))),
        );
        assert_eq!(snapshot, "MoveUp|MoveDown|Confirm|Toggle|Noop");
    }

    #[test]
    fn input_translation_ignores_resize() {
        assert_eq!(
            translate_input(&InputEvent::Resize(ResizeEvent {
                width: 120,
                height: 40,
            })),
            UiAction::Noop
        );
    }
}
