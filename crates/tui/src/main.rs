use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use linedesk_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use linedesk_tui::action::{Action, RedactedAction};
use linedesk_tui::app::App;
use linedesk_tui::cli::Cli;
use linedesk_tui::runtime::{
    client::create_shared_client,
    config::load_config,
    side_effects::{SharedClient, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};
use linedesk_tui::ui::Toast;
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "linedesk.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Config and client errors surface before the terminal is taken over.
    let config = load_config(&cli)?;
    let client = create_shared_client(&config)?;
    tracing::info!(base_url = %config.connection.base_url, "Starting linedesk");

    let task_tracker = TaskTracker::new();
    let shutdown = CancellationToken::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    task_tracker.spawn(read_terminal_events(tx.clone(), shutdown.clone()));

    let mut app = App::new();
    app.toasts.push(Toast::info(format!(
        "Connected to {}",
        config.connection.base_url
    )));

    if let Some(load) = app.load_action_for_route() {
        dispatch(&mut app, load, &client, &tx, &task_tracker, &shutdown).await;
    }

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    while !app.should_quit {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                if let Some(action) = action {
                    dispatch(&mut app, action, &client, &tx, &task_tracker, &shutdown).await;
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    shutdown.cancel();
    task_tracker.close();
    task_tracker.wait().await;

    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Apply an action to the app, run its side effects, then issue the mount
/// load of the route it navigated to.
async fn dispatch(
    app: &mut App,
    action: Action,
    client: &SharedClient,
    tx: &Sender<Action>,
    task_tracker: &TaskTracker,
    shutdown: &CancellationToken,
) {
    let is_navigation = matches!(action, Action::Navigate(_));
    app.update(action.clone());
    handle_side_effects(
        action,
        client.clone(),
        tx.clone(),
        task_tracker.clone(),
        shutdown.clone(),
    )
    .await;

    if is_navigation && let Some(load) = app.load_action_for_route() {
        handle_side_effects(
            load,
            client.clone(),
            tx.clone(),
            task_tracker.clone(),
            shutdown.clone(),
        )
        .await;
    }
}

/// Forward terminal events to the action channel until shutdown.
///
/// Keys and resizes wait for channel capacity; mouse events are dropped
/// when the channel is full.
async fn read_terminal_events(tx: Sender<Action>, shutdown: CancellationToken) {
    let mut reader = EventStream::new();
    loop {
        let event = tokio::select! {
            _ = shutdown.cancelled() => break,
            event = reader.next() => event,
        };
        let Some(Ok(event)) = event else {
            break;
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if tx.send(Action::Input(key)).await.is_err() {
                    break;
                }
            }
            Event::Resize(width, height) => {
                if tx.send(Action::Resize(width, height)).await.is_err() {
                    break;
                }
            }
            Event::Mouse(mouse) => match tx.try_send(Action::Mouse(mouse)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("Input channel full, dropping mouse event");
                }
                Err(TrySendError::Closed(_)) => break,
            },
            _ => {}
        }
    }
}
