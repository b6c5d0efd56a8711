#![allow(dead_code)]

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use timed_quiz::{App, CHOICE_COUNT, Presenter, Question, Screen, Tier, TimerEvent, Timers};

/// Presenter that records every command it receives.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub screen: Option<Screen>,
    pub title: Option<String>,
    pub notices: Vec<String>,
    pub rendered: Vec<(String, usize, usize)>,
    pub timer_display: Vec<u32>,
    pub judges: Vec<bool>,
    pub highlights: Vec<(usize, Option<usize>)>,
    pub choices_enabled: bool,
    pub results: Vec<(usize, usize, Tier)>,
}

impl Presenter for RecordingPresenter {
    fn show_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn render_question(
        &mut self,
        text: &str,
        _choices: &[String; CHOICE_COUNT],
        number: usize,
        total: usize,
    ) {
        self.rendered.push((text.to_string(), number, total));
    }

    fn update_timer_display(&mut self, remaining_secs: u32) {
        self.timer_display.push(remaining_secs);
    }

    fn show_judge(&mut self, is_correct: bool) {
        self.judges.push(is_correct);
    }

    fn highlight_answer(&mut self, correct_index: usize, chosen_index: Option<usize>) {
        self.highlights.push((correct_index, chosen_index));
    }

    fn set_choices_enabled(&mut self, enabled: bool) {
        self.choices_enabled = enabled;
    }

    fn show_result(&mut self, score: usize, total: usize, tier: Tier) {
        self.results.push((score, total, tier));
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }
}

/// Timers that only record what is armed; tests deliver events by hand.
#[derive(Debug, Default)]
pub struct ManualTimers {
    pub countdown_armed: bool,
    pub advance_armed: Option<Duration>,
}

impl Timers for ManualTimers {
    fn start_countdown(&mut self) {
        self.countdown_armed = true;
    }

    fn stop_countdown(&mut self) {
        self.countdown_armed = false;
    }

    fn schedule_advance(&mut self, delay: Duration) {
        self.advance_armed = Some(delay);
    }

    fn cancel_advance(&mut self) {
        self.advance_armed = None;
    }
}

pub type TestApp = App<RecordingPresenter, ManualTimers>;

pub fn app() -> TestApp {
    App::new(
        RecordingPresenter::default(),
        ManualTimers::default(),
        StdRng::seed_from_u64(5),
    )
}

pub fn question(text: &str, answer_index: usize) -> Question {
    Question {
        text: text.to_string(),
        choices: ["A", "B", "C", "D"].map(String::from),
        answer_index,
    }
}

pub fn bank(size: usize) -> Vec<Question> {
    (0..size).map(|i| question(&format!("Q{i}"), i % 4)).collect()
}

/// Answer index of the question currently on screen.
pub fn current_answer(app: &TestApp) -> usize {
    app.session()
        .and_then(|s| s.current_question())
        .map(|q| q.answer_index)
        .expect("a question is active")
}

/// Deliver a tick, as the runtime would, only while the countdown is armed.
pub fn fire_tick(app: &mut TestApp) -> bool {
    if !app.timers().countdown_armed {
        return false;
    }
    app.on_timer(TimerEvent::Tick);
    true
}

/// Deliver the scheduled advance, disarming it first as a one-shot does.
pub fn fire_advance(app: &mut TestApp) -> bool {
    if app.timers_mut().advance_armed.take().is_none() {
        return false;
    }
    app.on_timer(TimerEvent::Advance);
    true
}

/// Check the score/progress invariants of the live session.
pub fn assert_invariants(app: &TestApp) {
    let Some(session) = app.session() else {
        return;
    };
    assert!(session.score() <= session.answered());
    assert!(session.answered() <= session.total());
    assert!(session.current_index() <= session.total());

    let active = session.remaining_secs().is_some();
    let states = [active, session.is_answer_locked(), session.is_complete()];
    assert_eq!(states.iter().filter(|s| **s).count(), 1);
    assert_eq!(active, app.timers().countdown_armed);
}
