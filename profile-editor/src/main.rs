//! Profile editor - terminal front end
//!
//! 1. Event (keyboard/mouse) -> EditorUi routes it -> button dispatches into
//!    the action channel
//! 2. Main loop feeds actions to the store (reducer + logging middleware)
//! 3. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! profile-editor --profile customers.json
//! profile-editor --profile customers.json --log-file editor.log --verbose
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use profile_dispatch_core::{
    process_raw_event, spawn_event_poller, EventKind, LoggingMiddleware, RawEvent, Store,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use profile_editor::action::ProfileAction;
use profile_editor::app::EditorUi;
use profile_editor::config::EditorConfig;
use profile_editor::profile::{load_profile, Profile};
use profile_editor::reducer::reducer;
use profile_editor::state::ProfileState;
use profile_editor::terminal::{install_panic_hook, TerminalGuard};

/// Profile editor
#[derive(Parser, Debug)]
#[command(name = "profile-editor")]
#[command(about = "Browse a data profile and start a new one")]
struct Args {
    /// Profile JSON file to open
    #[arg(long, short)]
    profile: Option<PathBuf>,

    /// Keybindings JSON file (defaults to the user config dir)
    #[arg(long)]
    keybindings: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level (every dispatched action)
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(path: &Path, verbose: bool) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, args.verbose)?;
    }

    // Fail before entering TUI mode
    let config = match EditorConfig::load(args.keybindings.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let profile = match args.profile.as_deref().map(load_profile).transpose() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // ===== Terminal setup =====
    // The guard restores the terminal on every exit path, the hook on panics
    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, profile, config).await
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    profile: Option<Profile>,
    config: EditorConfig,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<ProfileAction>();
    let mut store = Store::with_middleware(ProfileState::default(), reducer, LoggingMiddleware);

    // The button gets a clone of the sender as its dispatch capability
    let mut ui = EditorUi::new(action_tx.clone());
    if let Some(profile) = profile {
        ui.open_profile(profile);
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    tracing::info!("Profile editor started");
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                let area = frame.area();
                ui.render(frame, area, store.state(), &config.keybindings);
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                if matches!(event, EventKind::Resize(..)) {
                    should_render = true;
                }
                ui.handle_event(&event, &config.keybindings);
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, ProfileAction::Quit) {
                    break;
                }
                should_render |= store.dispatch(action);
            }
        }
    }

    cancel_token.cancel();
    tracing::info!("Profile editor stopped");
    Ok(())
}
