use std::sync::Arc;

use rand::rngs::StdRng;

use crate::data::{LoadError, QuestionLoader};
use crate::models::{Category, Question};
use crate::session::{
    Presenter, QUESTIONS_PER_SESSION, QuizSession, Screen, TimerEvent, Timers, sample,
};

/// Applies inbound signals to the current session, one at a time, in the
/// order they arrive.
///
/// Owns at most one [`QuizSession`]. Starting a new category or going back
/// to category selection tears the previous session down, disarming its
/// timers before it is dropped.
pub struct App<P: Presenter, T: Timers> {
    presenter: P,
    timers: T,
    rng: StdRng,
    session: Option<QuizSession>,
    category: Option<Category>,
}

impl<P: Presenter, T: Timers> App<P, T> {
    pub fn new(mut presenter: P, timers: T, rng: StdRng) -> Self {
        presenter.switch_screen(Screen::Category);

        Self {
            presenter,
            timers,
            rng,
            session: None,
            category: None,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Category of the session in play, if any.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Load `category` and start a session from it, or report the failure.
    pub async fn select_category(&mut self, loader: &QuestionLoader, category: Category) {
        match loader.load(category).await {
            Ok(bank) => self.begin_session(category, bank),
            Err(err) => self.load_failed(category, &err),
        }
    }

    /// Sample `bank` and start playing it, replacing any current session.
    pub fn begin_session(&mut self, category: Category, bank: Vec<Question>) {
        self.discard_session();

        if bank.is_empty() {
            tracing::warn!(%category, "category has no questions");
            self.presenter
                .show_notice(&format!("No questions available for {}", category.label()));
            self.presenter.switch_screen(Screen::Category);
            return;
        }

        let bank: Vec<Arc<Question>> = bank.into_iter().map(Arc::new).collect();
        let questions = sample(&bank, QUESTIONS_PER_SESSION, &mut self.rng);
        if questions.len() < QUESTIONS_PER_SESSION {
            tracing::info!(%category, available = questions.len(), "playing a short session");
        }

        let mut session = QuizSession::new(questions);
        self.category = Some(category);
        self.presenter.show_title(category.label());
        session.start(&mut self.presenter, &mut self.timers);
        self.session = Some(session);
    }

    pub fn load_failed(&mut self, category: Category, err: &LoadError) {
        tracing::warn!(%category, error = %err, "question data unavailable");
        self.presenter.show_notice("Failed to load the question data");
        self.presenter.switch_screen(Screen::Category);
    }

    /// Returns `true` if the click resolved the current question.
    pub fn choice_clicked(&mut self, index: usize) -> bool {
        match self.session.as_mut() {
            Some(session) => session.submit_answer(index, &mut self.presenter, &mut self.timers),
            None => false,
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!(?event, "timer event without a session");
            return;
        };

        match event {
            TimerEvent::Tick => session.tick(&mut self.presenter, &mut self.timers),
            TimerEvent::Advance => session.advance(&mut self.presenter, &mut self.timers),
        }
    }

    pub fn back_to_category(&mut self) {
        self.discard_session();
        self.presenter.switch_screen(Screen::Category);
    }

    fn discard_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.teardown(&mut self.timers);
        }
        self.category = None;
    }
}
