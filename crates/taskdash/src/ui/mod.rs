//! Rendering layer: pages, shared components, and the screen router.
//!
//! Rendering is read-only over app state; all mutation happens through
//! intent methods on [`App`].

pub mod components;
pub mod pages;
pub mod text_util;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::{App, Screen};
use crate::ui::components::alert::AlertOverlay;
use crate::ui::components::status_bar::StatusBar;
use crate::ui::pages::dashboard::DashboardPage;
use crate::ui::pages::login::LoginPage;

/// Stateless chrome rendered from borrowed data.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Full-screen view; may hold interior render state such as a table state.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// Renders the status bar, the active screen, and the pending alert on top.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let chunks = Layout::default()
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    StatusBar::new(env!("CARGO_PKG_VERSION").to_string())
        .logged_in(app.is_authenticated())
        .render(f, chunks[0]);

    match &app.screen {
        Screen::Login {
            focus,
            password,
            username,
        } => {
            LoginPage::new(username, password, *focus).render(f, chunks[1]);
        }
        Screen::Dashboard { task_input } => {
            DashboardPage::new(task_input, &app.tasks, &mut app.table_state).render(f, chunks[1]);
        }
    }

    if let Some(alert) = &app.alert {
        AlertOverlay::new(&alert.title, &alert.message).render(f, area);
    }
}
