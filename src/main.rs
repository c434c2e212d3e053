//! schedview - a terminal-based viewer for class schedules.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use schedview::api::ScheduleClient;
use schedview::app::App;
use schedview::config::Settings;
use schedview::error::{AppError, Result as AppResult};
use schedview::events::{Event, EventHandler};
use schedview::logging;
use schedview::tasks::create_task_channel;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Browse a class schedule in the terminal.
#[derive(Debug, Parser)]
#[command(name = "schedview", version, about)]
struct Cli {
    /// Schedule endpoint URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Path to the config file (defaults to $SCHEDVIEW_CONFIG or the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Terminal width below which the table collapses to one data column
    #[arg(long)]
    narrow_width: Option<u16>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.url {
            settings.endpoint = url.clone();
        }
        if let Some(width) = self.narrow_width {
            settings.narrow_width = width;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, client) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let log_guard = logging::init()?;
    info!(endpoint = %client.endpoint(), "Using schedule endpoint");

    install_panic_hook();
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            error!(error = %e, "Terminal setup failed");
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };
    let result = run(&mut terminal, &settings, &client);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!(error = %e, "Application error");
        eprintln!("schedview: {:#}", e);
        eprintln!("Logs: {}", log_guard.directory().display());
    }
    logging::shutdown();
    result
}

/// Build everything that must be valid before the terminal is taken over.
fn prepare(cli: &Cli) -> AppResult<(Settings, ScheduleClient)> {
    let settings = load_settings(cli)?;
    let client = build_client(&settings)?;
    Ok((settings, client))
}

/// Load the config file and apply command-line overrides.
fn load_settings(cli: &Cli) -> AppResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);
    settings.validate()?;
    Ok(settings)
}

fn build_client(settings: &Settings) -> AppResult<ScheduleClient> {
    let timeout = Duration::from_secs(settings.timeout_secs);
    Ok(ScheduleClient::with_timeout(&settings.endpoint, timeout)?)
}

/// Drive the update/view loop until the user quits.
fn run(terminal: &mut Tui, settings: &Settings, client: &ScheduleClient) -> Result<()> {
    let (mut rx, spawner) = create_task_channel();
    let events = EventHandler::with_tick_rate(settings.tick_rate_ms);
    let mut app = App::new(settings);

    let size = terminal.size()?;
    app.update(Event::Resize(size.width, size.height));

    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;

        if let Some(load_id) = app.take_load_request() {
            debug!(load_id, "Spawning schedule load");
            let token = spawner.spawn_load_table(client, load_id);
            app.track_load(token);
        }

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }

        let event = events.next().context("Failed to read terminal event")?;
        app.update(event);
    }

    app.shutdown();
    Ok(())
}

fn setup_terminal() -> AppResult<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("enable raw mode: {}", e)))?;

    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture);
    let stdout = rollback_on_error(
        entered.map(|()| stdout),
        || {
            let _ = disable_raw_mode();
        },
    )
    .map_err(|e| AppError::terminal(format!("enter alternate screen: {}", e)))?;

    let terminal = rollback_on_error(
        Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
            terminal.hide_cursor()?;
            Ok(terminal)
        }),
        || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        },
    )?;
    Ok(terminal)
}

/// Run `rollback` if `result` is an error, then pass the result through.
fn rollback_on_error<T>(result: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        rollback();
    }
    result
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before printing a panic message.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_settings() {
        let cli = Cli::parse_from([
            "schedview",
            "--url",
            "https://example.com/horarios",
            "--narrow-width",
            "60",
            "--timeout",
            "5",
        ]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.endpoint, "https://example.com/horarios");
        assert_eq!(settings.narrow_width, 60);
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn test_rollback_runs_on_error() {
        let mut rolled_back = false;
        let result: io::Result<()> = rollback_on_error(
            Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || rolled_back = true,
        );
        assert!(result.is_err());
        assert!(rolled_back);
    }

    #[test]
    fn test_rollback_skipped_on_success() {
        let mut rolled_back = false;
        let value = rollback_on_error(Ok(5), || rolled_back = true).unwrap();
        assert_eq!(value, 5);
        assert!(!rolled_back);
    }

    #[test]
    fn test_build_client_rejects_non_http_endpoint() {
        let settings = Settings {
            endpoint: "ftp://example.com/horarios".to_string(),
            ..Settings::default()
        };

        let err = build_client(&settings).unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
        assert!(err.user_message().starts_with("Invalid schedule endpoint"));
    }

    #[test]
    fn test_build_client_uses_settings_endpoint() {
        let settings = Settings {
            endpoint: "http://127.0.0.1:3000/horarios".to_string(),
            ..Settings::default()
        };
        let client = build_client(&settings).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000/horarios");
    }

    #[test]
    fn test_cli_without_flags_keeps_settings() {
        let cli = Cli::parse_from(["schedview"]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);
        assert_eq!(settings, Settings::default());
    }
}
