use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::domain::task::{Task, TaskList};
use crate::ui::Page;
use crate::ui::text_util::with_cursor;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";

/// Task dashboard with counters, input field, task table, and help footer.
pub struct DashboardPage<'a> {
    pub table_state: &'a mut TableState,
    pub task_input: &'a str,
    pub tasks: &'a TaskList,
}

impl<'a> DashboardPage<'a> {
    /// Creates a dashboard page renderer.
    pub fn new(
        task_input: &'a str,
        tasks: &'a TaskList,
        table_state: &'a mut TableState,
    ) -> Self {
        Self {
            table_state,
            task_input,
            tasks,
        }
    }
}

impl Page for DashboardPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .margin(1)
            .split(area);

        let counters = Paragraph::new(counter_line(self.tasks));
        f.render_widget(counters, chunks[0]);

        let input = Paragraph::new(with_cursor(self.task_input)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("New Task"),
        );
        f.render_widget(input, chunks[1]);

        if self.tasks.is_empty() {
            let hint = Paragraph::new("No tasks yet. Type a task and press Enter to add it.")
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Tasks"));
            f.render_widget(hint, chunks[2]);
        } else {
            let selected_style = Style::default().bg(Color::DarkGray);
            let header = Row::new(["St", "Task"])
                .style(Style::default().bg(Color::Gray).fg(Color::Black))
                .height(1)
                .bottom_margin(1);
            let rows = self.tasks.tasks().iter().map(render_task_row);
            let table = Table::new(rows, [Constraint::Length(3), Constraint::Fill(1)])
                .column_spacing(1)
                .header(header)
                .block(Block::default().borders(Borders::ALL).title("Tasks"))
                .row_highlight_style(selected_style)
                .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

            f.render_stateful_widget(table, chunks[2], self.table_state);
        }

        let help_message = Paragraph::new(
            "Enter to add, Up/Down to select, Tab to toggle, Del to delete, \
             Ctrl-L to log out, Esc to quit",
        )
        .style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, chunks[3]);
    }
}

/// Builds the "Total / Completed" counter line above the input field.
fn counter_line(tasks: &TaskList) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("Total Tasks: {}", tasks.len())),
        Span::raw("    "),
        Span::styled(
            format!("Completed Tasks: {}", tasks.completed_count()),
            Style::default().fg(Color::Green),
        ),
    ])
}

/// Renders one task row; completed tasks are struck through and dimmed.
fn render_task_row(task: &Task) -> Row<'static> {
    let (icon, title_style) = if task.completed {
        (
            "✅",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
        )
    } else {
        ("⏳", Style::default())
    };

    Row::new(vec![
        Cell::from(icon),
        Cell::from(task.title.clone()).style(title_style),
    ])
    .height(1)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_to_text(task_input: &str, tasks: &TaskList) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let mut table_state = TableState::default();
        let mut page = DashboardPage::new(task_input, tasks, &mut table_state);

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
    fn test_dashboard_shows_total_and_completed_counters() {
        // Arrange
        let mut tasks = TaskList::new();
        let first = tasks.add("A").expect("add should succeed");
        tasks.add("B").expect("add should succeed");
        tasks.toggle(&first.id);

        // Act
        let text = render_to_text("", &tasks);

        // Assert
        assert!(text.contains("Total Tasks: 2"));
        assert!(text.contains("Completed Tasks: 1"));
    }

    #[test]
    fn test_dashboard_lists_task_titles() {
        // Arrange
        let mut tasks = TaskList::new();
        tasks.add("Buy milk").expect("add should succeed");

        // Act
        let text = render_to_text("", &tasks);

        // Assert
        assert!(text.contains("Buy milk"));
    }

    #[test]
    fn test_dashboard_shows_a_hint_when_the_list_is_empty() {
        // Arrange
        let tasks = TaskList::new();

        // Act
        let text = render_to_text("", &tasks);

        // Assert
        assert!(text.contains("No tasks yet"));
        assert!(text.contains("Total Tasks: 0"));
    }

    #[test]
    fn test_dashboard_echoes_the_task_input_with_a_cursor() {
        // Arrange
        let tasks = TaskList::new();

        // Act
        let text = render_to_text("Buy mi", &tasks);

        // Assert
        assert!(text.contains("Buy mi█"));
    }
}
