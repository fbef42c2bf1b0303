use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};

const MAX_WIDTH: u16 = 60;
const MAX_HEIGHT: u16 = 10;
const DISMISS_HINT: &str = "press any key";

/// Prompt drawn over the top right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub const fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    const fn color(&self) -> Color {
        match self.notification.level {
            NotificationLevel::Info => Color::Cyan,
            NotificationLevel::Warn => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        }
    }

    const fn is_blocking(&self) -> bool {
        !matches!(self.notification.level, NotificationLevel::Info)
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notification.title);
        let message = &self.notification.message;

        let max_popup_width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);
        let hint_lines = if self.is_blocking() { 1 } else { 0 };

        let height = lines
            .saturating_add(hint_lines)
            .saturating_add(2)
            .clamp(3, MAX_HEIGHT);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 2;

        let intersection = area.intersection(Rect::new(x, y, width, height));
        if intersection.area() == 0 {
            return;
        }

        let color = self.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));

        let mut text = Text::from(Line::from(message.as_str()));
        if self.is_blocking() {
            text.push_line(Line::from(DISMISS_HINT).style(Style::default().fg(Color::DarkGray)));
        }

        let para = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}
