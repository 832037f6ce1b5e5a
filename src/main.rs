mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Instant,
};

use scribble::{
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    logging::{effective_level, init_logging},
    runtime::{AppEvent, CrosstermEventSource, EventSource, Runner},
    session::SessionController,
    words::WordList,
};

/// pictionary in your terminal: draw a random word and race the clock
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Press space to get a random word to draw and start the stopwatch, press it again to stop the clock."
)]
pub struct Cli {
    /// seed the word picker to replay the same sequence of words
    #[clap(long)]
    seed: Option<u64>,

    /// hide the rounds counter for this run
    #[clap(long)]
    hide_counter: bool,

    /// log more detail (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Redraw,
    SaveConfig,
    Quit,
    Ignore,
}

#[derive(Debug)]
pub struct App {
    pub controller: SessionController,
    pub show_round_counter: bool,
}

impl App {
    pub fn new(controller: SessionController, show_round_counter: bool) -> Self {
        Self {
            controller,
            show_round_counter,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::Ignore;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(' ') | KeyCode::Enter => {
                let phase = self.controller.toggle_at(now);
                tracing::debug!(%phase, "activation control pressed");
                KeyAction::Redraw
            }
            KeyCode::Char('c') => {
                self.show_round_counter = !self.show_round_counter;
                KeyAction::SaveConfig
            }
            _ => KeyAction::Ignore,
        }
    }

    /// Close out the session before exit: a running round is stopped
    /// and its tick schedule released.
    pub fn shutdown(&mut self) {
        self.controller.stop();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();

    if let Some(log_path) = AppDirs::log_file() {
        let directive = effective_level(&config.log_level, cli.verbose);
        if let Err(err) = init_logging(&log_path, &directive) {
            eprintln!("logging disabled: {err}");
        }
    }

    let words = WordList::bundled()?;
    tracing::info!(deck = words.name(), size = words.len(), "word list loaded");

    let controller = match cli.seed {
        Some(seed) => SessionController::seeded(words, seed),
        None => SessionController::from_entropy(words),
    };
    let mut app = App::new(controller, config.show_round_counter && !cli.hide_counter);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new());
    let result = start_tui(&mut terminal, &mut app, &runner, |show| {
        config.show_round_counter = show;
        store.save(&config)
    });

    app.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn start_tui<B, E, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
    mut save_counter: S,
) -> Result<(), Box<dyn Error>>
where
    B: Backend,
    E: EventSource,
    S: FnMut(bool) -> Result<(), scribble::error::ConfigError>,
{
    terminal.draw(|f| ui(app, f))?;

    loop {
        let event = runner.step(app.controller.until_next_tick(Instant::now()));
        let now = Instant::now();

        let mut redraw = app.controller.poll_ticks(now) > 0;

        match event {
            AppEvent::Tick => {}
            AppEvent::Closed => {
                tracing::warn!("terminal input closed, leaving the event loop");
                break;
            }
            AppEvent::Resize => redraw = true,
            AppEvent::Key(key) => match app.handle_key(key, now) {
                KeyAction::Quit => break,
                KeyAction::Redraw => redraw = true,
                KeyAction::SaveConfig => {
                    if let Err(err) = save_counter(app.show_round_counter) {
                        tracing::warn!(error = %err, "could not save config");
                    }
                    redraw = true;
                }
                KeyAction::Ignore => {}
            },
        }

        if redraw {
            terminal.draw(|f| ui(app, f))?;
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
