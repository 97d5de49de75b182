use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::LoginField;
use crate::ui::Page;
use crate::ui::text_util::{mask_secret, with_cursor};

/// Login form with username/password fields and a submit hint.
pub struct LoginPage<'a> {
    focus: LoginField,
    password: &'a str,
    username: &'a str,
}

impl<'a> LoginPage<'a> {
    /// Creates a login page renderer over the current input buffers.
    pub fn new(username: &'a str, password: &'a str, focus: LoginField) -> Self {
        Self {
            focus,
            password,
            username,
        }
    }

    fn field_border_style(&self, field: LoginField) -> Style {
        if self.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn field_text(&self, field: LoginField) -> String {
        let text = match field {
            LoginField::Username => self.username.to_string(),
            LoginField::Password => mask_secret(self.password),
        };

        if self.focus == field {
            with_cursor(&text)
        } else {
            text
        }
    }
}

impl Page for LoginPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let vertical_chunks = Layout::default()
            .constraints([
                Constraint::Percentage(25),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let form_chunks: Vec<Rect> = vertical_chunks
            .iter()
            .map(|chunk| centered_column(*chunk))
            .collect();

        let heading = Paragraph::new("Login")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(heading, form_chunks[1]);

        let username = Paragraph::new(self.field_text(LoginField::Username)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.field_border_style(LoginField::Username))
                .title("Username"),
        );
        f.render_widget(username, form_chunks[2]);

        let password = Paragraph::new(self.field_text(LoginField::Password)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.field_border_style(LoginField::Password))
                .title("Password"),
        );
        f.render_widget(password, form_chunks[3]);

        let help_message =
            Paragraph::new("Tab to switch fields, Enter to log in, Esc to quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, form_chunks[4]);
    }
}

/// Narrows a full-width chunk to a centered column for the form.
fn centered_column(area: Rect) -> Rect {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_to_text(mut page: LoginPage<'_>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");

        terminal
            .draw(|f| {
                let area = f.area();
                page.render(f, area);
            })
            .expect("failed to draw");

        let buffer = terminal.backend().buffer();
        let content = buffer.content();
        content.iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_login_page_masks_the_password() {
        // Arrange
        let page = LoginPage::new("admin", "secret", LoginField::Username);

        // Act
        let text = render_to_text(page);

        // Assert
        assert!(text.contains("admin"));
        assert!(!text.contains("secret"));
        assert!(text.contains("••••••"));
    }

    #[test]
    fn test_login_page_marks_the_focused_field_with_a_cursor() {
        // Arrange
        let page = LoginPage::new("adm", "", LoginField::Username);

        // Act
        let text = render_to_text(page);

        // Assert
        assert!(text.contains("adm█"));
    }

    #[test]
    fn test_login_page_shows_the_help_line() {
        // Arrange
        let page = LoginPage::new("", "", LoginField::Password);

        // Act
        let text = render_to_text(page);

        // Assert
        assert!(text.contains("Enter to log in"));
    }
}
