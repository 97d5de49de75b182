use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::ui::Component;

const MIN_OVERLAY_HEIGHT: u16 = 7;
const MIN_OVERLAY_WIDTH: u16 = 36;
const OVERLAY_HEIGHT_PERCENT: u16 = 22;
const OVERLAY_WIDTH_PERCENT: u16 = 46;

/// Centered modal popup for validation errors and persistence warnings.
///
/// The event loop dismisses it on the next key press, so the body always
/// carries the dismiss affordance.
pub struct AlertOverlay<'a> {
    message: &'a str,
    title: &'a str,
}

impl<'a> AlertOverlay<'a> {
    /// Creates an alert popup with title and body message.
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { message, title }
    }

    fn border_color(&self) -> Color {
        if self.title == "Warning" {
            Color::Yellow
        } else {
            Color::Red
        }
    }
}

impl Component for AlertOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let overlay = overlay_area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color()))
            .title(format!(" {} ", self.title))
            .padding(Padding::new(2, 2, 1, 1));

        let mut lines = vec![Line::from(self.message.to_string())];
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Press any key to dismiss",
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ));

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        f.render_widget(Clear, overlay);
        f.render_widget(body, overlay);
    }
}

/// Computes the centered popup rectangle, clamped to the frame.
fn overlay_area(area: Rect) -> Rect {
    let width = (area.width * OVERLAY_WIDTH_PERCENT / 100)
        .max(MIN_OVERLAY_WIDTH)
        .min(area.width);
    let height = (area.height * OVERLAY_HEIGHT_PERCENT / 100)
        .max(MIN_OVERLAY_HEIGHT)
        .min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}
