//! The per-play-through quiz state machine.
//!
//! A question slot moves `Idle -> Active -> Resolved -> Active | Complete`.
//! Both the countdown and a click try to resolve the active question; the
//! first one flips the slot to `Resolved` and every later signal for that
//! slot is discarded.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::models::{CHOICE_COUNT, Question};

use super::presenter::{Presenter, Screen, Tier};
use super::timers::Timers;

/// Seconds allowed per question.
pub const TIME_LIMIT_SECS: u32 = 10;

/// How long a resolved question stays on screen before the next one.
pub const RESULT_DISPLAY_DELAY: Duration = Duration::from_secs(1);

/// State of the current question slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Created but not started.
    Idle,
    /// Answering is open and the countdown runs.
    Active { remaining_secs: u32 },
    /// Answer locked, waiting for the scheduled advance.
    Resolved,
    /// Every question resolved and the result reported.
    Complete,
}

/// One play-through of a sampled question sequence.
pub struct QuizSession {
    id: Uuid,
    questions: Vec<Arc<Question>>,
    current_index: usize,
    score: usize,
    phase: Phase,
}

impl QuizSession {
    pub fn new(questions: Vec<Arc<Question>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            current_index: 0,
            score: 0,
            phase: Phase::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions resolved so far, including one still on display.
    pub fn answered(&self) -> usize {
        match self.phase {
            Phase::Resolved => self.current_index + 1,
            _ => self.current_index,
        }
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        match self.phase {
            Phase::Active { remaining_secs } => Some(remaining_secs),
            _ => None,
        }
    }

    pub fn is_answer_locked(&self) -> bool {
        self.phase == Phase::Resolved
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index).map(Arc::as_ref)
    }

    /// Show the first question and arm its countdown.
    pub fn start<P: Presenter, T: Timers>(&mut self, presenter: &mut P, timers: &mut T) {
        assert_eq!(self.phase, Phase::Idle, "session {} started twice", self.id);

        self.current_index = 0;
        self.score = 0;
        tracing::info!(session = %self.id, questions = self.total(), "session started");

        presenter.switch_screen(Screen::Quiz);
        self.present_current_question(presenter, timers);
    }

    /// Count one second off the active question, resolving it as a timeout at zero.
    pub fn tick<P: Presenter, T: Timers>(&mut self, presenter: &mut P, timers: &mut T) {
        let Phase::Active { remaining_secs } = self.phase else {
            tracing::trace!(session = %self.id, phase = ?self.phase, "tick ignored");
            return;
        };

        let remaining_secs = remaining_secs.saturating_sub(1);
        self.phase = Phase::Active { remaining_secs };
        presenter.update_timer_display(remaining_secs);

        if remaining_secs == 0 {
            tracing::debug!(session = %self.id, index = self.current_index, "time expired");
            self.resolve(false, None, presenter, timers);
        }
    }

    /// Answer the active question with `choice`.
    ///
    /// Returns `false` when the question was already resolved and the answer
    /// was discarded.
    ///
    /// # Panics
    ///
    /// Panics if `choice` is not a valid choice index.
    pub fn submit_answer<P: Presenter, T: Timers>(
        &mut self,
        choice: usize,
        presenter: &mut P,
        timers: &mut T,
    ) -> bool {
        assert!(
            choice < CHOICE_COUNT,
            "choice index {choice} out of range 0..{CHOICE_COUNT}"
        );

        if !matches!(self.phase, Phase::Active { .. }) {
            tracing::debug!(session = %self.id, choice, phase = ?self.phase, "answer discarded");
            return false;
        }

        let is_correct = self.questions[self.current_index].is_correct(choice);
        self.resolve(is_correct, Some(choice), presenter, timers);
        true
    }

    /// Move past the resolved question once its display delay elapsed.
    pub fn advance<P: Presenter, T: Timers>(&mut self, presenter: &mut P, timers: &mut T) {
        if self.phase != Phase::Resolved {
            tracing::warn!(session = %self.id, phase = ?self.phase, "advance ignored");
            return;
        }

        self.current_index += 1;
        self.present_current_question(presenter, timers);
    }

    /// Disarm every timer the session owns. Consumes the session.
    pub fn teardown<T: Timers>(self, timers: &mut T) {
        timers.stop_countdown();
        timers.cancel_advance();
        tracing::info!(
            session = %self.id,
            index = self.current_index,
            score = self.score,
            complete = self.is_complete(),
            "session discarded"
        );
    }

    fn present_current_question<P: Presenter, T: Timers>(
        &mut self,
        presenter: &mut P,
        timers: &mut T,
    ) {
        let Some(question) = self.questions.get(self.current_index).cloned() else {
            self.finish(presenter);
            return;
        };

        self.phase = Phase::Active {
            remaining_secs: TIME_LIMIT_SECS,
        };
        presenter.render_question(
            &question.text,
            &question.choices,
            self.current_index + 1,
            self.total(),
        );
        presenter.set_choices_enabled(true);
        presenter.update_timer_display(TIME_LIMIT_SECS);
        timers.start_countdown();
    }

    fn resolve<P: Presenter, T: Timers>(
        &mut self,
        is_correct: bool,
        chosen: Option<usize>,
        presenter: &mut P,
        timers: &mut T,
    ) {
        self.phase = Phase::Resolved;
        timers.stop_countdown();
        presenter.set_choices_enabled(false);

        let correct_index = self.questions[self.current_index].answer_index;
        presenter.highlight_answer(correct_index, chosen.filter(|_| !is_correct));

        if is_correct {
            self.score += 1;
        }
        debug_assert!(self.score <= self.answered());

        presenter.show_judge(is_correct);
        tracing::debug!(
            session = %self.id,
            index = self.current_index,
            ?chosen,
            is_correct,
            score = self.score,
            "question resolved"
        );

        timers.schedule_advance(RESULT_DISPLAY_DELAY);
    }

    fn finish<P: Presenter>(&mut self, presenter: &mut P) {
        self.phase = Phase::Complete;

        let total = self.total();
        let tier = Tier::for_score(self.score, total);
        tracing::info!(session = %self.id, score = self.score, total, ?tier, "session complete");

        presenter.switch_screen(Screen::Result);
        presenter.show_result(self.score, total, tier);
    }
}
