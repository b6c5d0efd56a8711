//! # timed-quiz
//!
//! A terminal quiz: pick a category, answer ten randomly drawn
//! multiple-choice questions against a ten-second countdown each, and get
//! a scored result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Config, Quiz, QuizError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), QuizError> {
//!     // Questions are read from quiz-data/<category>.json
//!     let quiz = Quiz::new(Config::default());
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session core ([`QuizSession`], driven through [`App`]) does not depend
//! on the terminal: anything implementing [`Presenter`] and [`Timers`] can
//! host it.

mod app;
mod config;
mod data;
pub mod logging;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::{Stream, StreamExt};
use thiserror::Error;
use tokio::time::{self, Interval, MissedTickBehavior};

pub use app::App;
pub use config::Config;
pub use data::{DEFAULT_DATA_DIR, LoadError, QuestionLoader, parse_questions};
pub use models::{CHOICE_COUNT, Category, Question};
pub use session::{
    Presenter, QUESTIONS_PER_SESSION, QuizSession, RESULT_DISPLAY_DELAY, Screen, TICK,
    TIME_LIMIT_SECS, Tier, TimerEvent, Timers, TokioTimers, sample,
};
pub use ui::{Highlight, QuestionView, ResultView, TerminalView};

/// How often the screen is redrawn while nothing else happens, so the
/// judge mark disappears on time.
const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for running the quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Terminal or log file IO failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The dispatcher as wired up for the terminal.
pub type TerminalApp = App<TerminalView, TokioTimers>;

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    loader: QuestionLoader,
    app: TerminalApp,
}

impl Quiz {
    pub fn new(config: Config) -> Self {
        Self {
            loader: QuestionLoader::new(config.data_dir.clone()),
            app: App::new(TerminalView::new(), TokioTimers::new(), config.rng()),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        tracing::info!(data_dir = %self.loader.data_dir().display(), "starting quiz");

        let mut guard = terminal::init()?;
        let result = run_event_loop(guard.terminal_mut(), &mut self.app, &self.loader).await;
        drop(guard);

        tracing::info!("quiz closed");
        result
    }

    pub fn app(&self) -> &TerminalApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut TerminalApp {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut TerminalApp,
    loader: &QuestionLoader,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut redraw = time::interval(REDRAW_INTERVAL);
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::render(frame, app.presenter()))?;

        if dispatch_next(app, loader, &mut events, &mut redraw).await? {
            break;
        }
    }

    Ok(())
}

/// Wait for the next input, timer or redraw event and apply it to `app`.
///
/// Returns true if the app should exit.
async fn dispatch_next<S>(
    app: &mut TerminalApp,
    loader: &QuestionLoader,
    events: &mut S,
    redraw: &mut Interval,
) -> Result<bool, QuizError>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    // Input goes first: a click and an expiry that are ready together
    // resolve in favour of the click.
    tokio::select! {
        biased;
        event = events.next() => match event {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                Ok(handle_input(app, loader, key.code).await)
            }
            Some(Ok(_)) => Ok(false),
            Some(Err(err)) => Err(err.into()),
            None => Ok(true),
        },
        timer = app.timers_mut().next_event() => {
            app.on_timer(timer);
            Ok(false)
        }
        _ = redraw.tick() => Ok(false),
    }
}

/// Returns true if the app should exit.
async fn handle_input(app: &mut TerminalApp, loader: &QuestionLoader, key: KeyCode) -> bool {
    match app.presenter().screen() {
        Screen::Category => handle_category_input(app, loader, key).await,
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Result => handle_result_input(app, key),
    }
}

async fn handle_category_input(
    app: &mut TerminalApp,
    loader: &QuestionLoader,
    key: KeyCode,
) -> bool {
    let category = match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.presenter_mut().select_previous_category();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.presenter_mut().select_next_category();
            None
        }
        KeyCode::Enter => Some(app.presenter().selected_category()),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(|index| Category::ALL.get(index).copied()),
        _ => None,
    };

    if let Some(category) = category {
        app.presenter_mut().clear_notice();
        app.select_category(loader, category).await;
    }
    false
}

fn handle_quiz_input(app: &mut TerminalApp, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.presenter_mut().select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.presenter_mut().select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let choice = app.presenter().selected_option();
            app.choice_clicked(choice);
        }
        KeyCode::Esc => app.back_to_category(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(c) => {
            if let Some(choice) = choice_for_key(c) {
                app.choice_clicked(choice);
            }
        }
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut TerminalApp, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.back_to_category();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

/// Maps `1`-`4` and `a`-`d` to a choice index.
fn choice_for_key(c: char) -> Option<usize> {
    let index = match c.to_ascii_lowercase() {
        digit @ '1'..='4' => digit as usize - '1' as usize,
        letter @ 'a'..='d' => letter as usize - 'a' as usize,
        _ => return None,
    };
    Some(index)
}
