//! App-layer composition root and shared state container.
//!
//! [`App`] owns the session gate, the task list, the flag store handle,
//! and all UI state. User intents are methods here; each intent performs
//! exactly one state transition, and rendering reads the result.

use std::path::PathBuf;

use ratatui::widgets::TableState;
use tracing::{info, warn};

use crate::domain::auth::{FixedCredentials, SessionGate};
use crate::domain::task::{Task, TaskList};
use crate::infra::db::SessionFlagStore;

/// Directory name used under the home directory for all taskdash state.
pub const APP_DIR: &str = ".taskdash";
/// Environment variable overriding the taskdash home directory.
pub const HOME_ENV: &str = "TASKDASH_HOME";

/// Returns the taskdash home directory (`~/.taskdash`).
///
/// `TASKDASH_HOME` takes precedence when set and non-empty.
pub fn taskdash_home() -> PathBuf {
    if let Ok(home_override) = std::env::var(HOME_ENV)
        && !home_override.trim().is_empty()
    {
        return PathBuf::from(home_override);
    }

    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

/// Which login form field receives typed input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    /// Returns the other field.
    pub fn toggled(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Active screen and the input state belonging to it.
///
/// Leaving the login screen drops its buffers, which is what clears the
/// credential fields on logout.
pub enum Screen {
    Login {
        focus: LoginField,
        password: String,
        username: String,
    },
    Dashboard {
        task_input: String,
    },
}

impl Screen {
    /// Creates a fresh login screen with empty credential fields.
    pub fn login() -> Self {
        Self::Login {
            focus: LoginField::Username,
            password: String::new(),
            username: String::new(),
        }
    }

    /// Creates a fresh dashboard screen with an empty task input.
    pub fn dashboard() -> Self {
        Self::Dashboard {
            task_input: String::new(),
        }
    }
}

/// Pending modal alert. Any key press dismisses it before other input is
/// handled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alert {
    pub message: String,
    pub title: String,
}

impl Alert {
    /// Creates an error alert for the two user-visible validation failures.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: "Error".to_string(),
        }
    }

    /// Creates a warning alert for recoverable persistence failures.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: "Warning".to_string(),
        }
    }
}

pub struct App {
    pub alert: Option<Alert>,
    flag_store: Box<dyn SessionFlagStore>,
    gate: SessionGate,
    pub screen: Screen,
    pub table_state: TableState,
    pub tasks: TaskList,
}

impl App {
    /// Creates the app, restoring the persisted session exactly once.
    ///
    /// A flag-store read failure starts the session unauthenticated and
    /// queues a warning instead of failing silently.
    pub fn new(flag_store: Box<dyn SessionFlagStore>) -> Self {
        let mut alert = None;
        let authenticated = match flag_store.load_login_flag() {
            Ok(flag) => flag,
            Err(err) => {
                warn!("failed to restore session: {err}");
                alert = Some(Alert::warning(
                    "Could not restore the previous session. Please log in.",
                ));
                false
            }
        };

        let mut gate = SessionGate::new(Box::new(FixedCredentials::default()));
        gate.restore(authenticated);

        let screen = if authenticated {
            info!("session restored");
            Screen::dashboard()
        } else {
            Screen::login()
        };

        Self {
            alert,
            flag_store,
            gate,
            screen,
            table_state: TableState::default(),
            tasks: TaskList::new(),
        }
    }

    /// Returns `true` while the session gate is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    /// Attempts a login with the current credential fields.
    ///
    /// The flag is persisted before the dashboard becomes visible; when
    /// persistence fails the gate is rolled back so the session keeps its
    /// prior unauthenticated state.
    pub fn login(&mut self) {
        let Screen::Login {
            password, username, ..
        } = &self.screen
        else {
            return;
        };
        let (username, password) = (username.clone(), password.clone());

        if let Err(err) = self.gate.login(&username, &password) {
            info!("login rejected");
            self.alert = Some(Alert::error(err.to_string()));
            return;
        }

        if let Err(err) = self.flag_store.save_login_flag() {
            self.gate.logout();
            warn!("failed to persist login flag: {err}");
            self.alert = Some(Alert::warning(
                "Could not save the session. Please try again.",
            ));
            return;
        }

        info!("login succeeded");
        self.screen = Screen::dashboard();
        self.table_state.select(None);
    }

    /// Logs out, clearing the persisted flag and the credential fields.
    ///
    /// When the flag cannot be cleared the session stays authenticated
    /// rather than leaving a stale flag behind.
    pub fn logout(&mut self) {
        if let Err(err) = self.flag_store.clear_login_flag() {
            warn!("failed to clear login flag: {err}");
            self.alert = Some(Alert::warning(
                "Could not clear the saved session. Please try again.",
            ));
            return;
        }

        self.gate.logout();
        info!("logged out");
        self.screen = Screen::login();
        self.table_state.select(None);
    }

    /// Adds a task from the dashboard input buffer.
    pub fn submit_task(&mut self) {
        let Screen::Dashboard { task_input } = &self.screen else {
            return;
        };
        let title = task_input.clone();

        match self.tasks.add(&title) {
            Ok(task) => {
                info!("task added: {}", task.id);
                if let Screen::Dashboard { task_input } = &mut self.screen {
                    task_input.clear();
                }
                self.table_state.select(Some(self.tasks.len() - 1));
            }
            Err(err) => {
                self.alert = Some(Alert::error(err.to_string()));
            }
        }
    }

    /// Flips completion of the selected task.
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id.clone();

        self.tasks.toggle(&id);
    }

    /// Deletes the selected task and clamps the selection.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.table_state.selected() else {
            return;
        };
        let Some(task) = self.tasks.get(index) else {
            return;
        };
        let id = task.id.clone();

        self.tasks.remove(&id);
        info!("task deleted: {id}");

        if self.tasks.is_empty() {
            self.table_state.select(None);
        } else if index >= self.tasks.len() {
            self.table_state.select(Some(self.tasks.len() - 1));
        }
    }

    /// Moves the selection down, wrapping at the end.
    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Moves the selection up, wrapping at the start.
    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Returns the task under the selection, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.table_state
            .selected()
            .and_then(|index| self.tasks.get(index))
    }

    /// Clears the pending alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Appends a character to whichever input buffer has focus.
    pub fn push_input(&mut self, c: char) {
        match &mut self.screen {
            Screen::Login {
                focus,
                password,
                username,
            } => match focus {
                LoginField::Username => username.push(c),
                LoginField::Password => password.push(c),
            },
            Screen::Dashboard { task_input } => task_input.push(c),
        }
    }

    /// Removes the last character from the focused input buffer.
    pub fn pop_input(&mut self) {
        match &mut self.screen {
            Screen::Login {
                focus,
                password,
                username,
            } => {
                match focus {
                    LoginField::Username => username.pop(),
                    LoginField::Password => password.pop(),
                };
            }
            Screen::Dashboard { task_input } => {
                task_input.pop();
            }
        }
    }

    /// Moves login focus to the other credential field.
    pub fn switch_login_focus(&mut self) {
        if let Screen::Login { focus, .. } = &mut self.screen {
            *focus = focus.toggled();
        }
    }
}
