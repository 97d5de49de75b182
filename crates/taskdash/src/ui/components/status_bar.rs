use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

/// Top status bar showing the app name, version, and session state.
pub struct StatusBar {
    current_version: String,
    logged_in: bool,
}

impl StatusBar {
    /// Creates a status bar with the current version.
    pub fn new(current_version: String) -> Self {
        Self {
            current_version,
            logged_in: false,
        }
    }

    /// Sets whether the session indicator should be shown.
    #[must_use]
    pub fn logged_in(mut self, logged_in: bool) -> Self {
        self.logged_in = logged_in;
        self
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!(" Taskdash {}", self.current_version),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if self.logged_in {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "logged in",
                Style::default().fg(Color::Green),
            ));
        }

        let status_bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
