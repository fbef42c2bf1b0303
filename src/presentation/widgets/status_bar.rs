//! Footer status bar with key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// A key and what it does, e.g. `("Tab", "next")`.
pub type KeyHint = (&'static str, &'static str);

struct StatusBarStyle {
    label_style: Style,
    key_style: Style,
    hint_style: Style,
    info: Style,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            hint_style: Style::default().fg(Color::Gray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    label: &'a str,
    hints: &'a [KeyHint],
    right_info: Option<&'a str>,
    style: StatusBarStyle,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub fn new(label: &'a str, hints: &'a [KeyHint]) -> Self {
        Self {
            label,
            hints,
            right_info: None,
            style: StatusBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    fn left_spans(&self) -> Vec<Span<'a>> {
        let mut spans = vec![Span::styled(format!(" {} ", self.label), self.style.label_style)];
        for (key, action) in self.hints {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
            spans.push(Span::styled(format!(" {action}"), self.style.hint_style));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = self.left_spans();

        if let Some(info) = self.right_info {
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let padding = (area.width as usize).saturating_sub(used + info.width() + 1);
            if padding > 0 {
                spans.push(Span::raw(" ".repeat(padding)));
                spans.push(Span::styled(info, self.style.info));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
