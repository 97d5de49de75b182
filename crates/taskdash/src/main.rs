use std::io::{self, Write as _};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use taskdash::app::{App, Screen, taskdash_home};
use taskdash::db::{DB_DIR, DB_FILE, Database};
use taskdash::ui;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "taskdash.log";
const LOG_ENV: &str = "TASKDASH_LOG";
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    init_tracing();

    let db_path = taskdash_home().join(DB_DIR).join(DB_FILE);
    let db = match Database::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                let _ = writeln!(io::stderr(), "Error: {e}");
            }
            #[allow(clippy::exit)]
            std::process::exit(1);
        }
    };
    let mut app = App::new(Box::new(db));

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Routes tracing to a file under the taskdash home; stdout belongs to the
/// terminal UI. Logging is best-effort and never blocks startup.
fn init_tracing() {
    let log_dir = taskdash_home();
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_dir.join(LOG_FILE))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if is_ctrl_c(key) {
            break;
        }

        // A pending alert swallows the key that dismisses it.
        if app.alert.is_some() {
            app.dismiss_alert();
            continue;
        }

        let on_login_screen = matches!(app.screen, Screen::Login { .. });
        if on_login_screen {
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Enter => app.login(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    app.switch_login_focus();
                }
                KeyCode::Backspace => app.pop_input(),
                KeyCode::Char(c) => app.push_input(c),
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Enter => app.submit_task(),
                KeyCode::Up => app.previous(),
                KeyCode::Down => app.next(),
                KeyCode::Tab => app.toggle_selected(),
                KeyCode::Delete => app.delete_selected(),
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.logout();
                }
                KeyCode::Backspace => app.pop_input(),
                KeyCode::Char(c) => app.push_input(c),
                _ => {}
            }
        }
    }

    Ok(())
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
