//! Terminal-side state of what the session last asked to show.

use std::time::{Duration, Instant};

use crate::models::{CHOICE_COUNT, Category};
use crate::session::{Presenter, Screen, Tier};

/// How long the correct/wrong mark stays visible.
pub const JUDGE_DURATION: Duration = Duration::from_secs(1);

pub struct QuestionView {
    pub text: String,
    pub choices: [String; CHOICE_COUNT],
    pub number: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub correct: usize,
    pub wrong: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub tier: Tier,
}

struct Judge {
    is_correct: bool,
    shown_at: Instant,
}

/// [`Presenter`] for the ratatui front end, plus the cursor state the
/// key bindings move around.
#[derive(Default)]
pub struct TerminalView {
    screen: Screen,
    title: String,
    notice: Option<String>,
    category_cursor: usize,
    question: Option<QuestionView>,
    selected_option: usize,
    remaining_secs: u32,
    judge: Option<Judge>,
    highlight: Option<Highlight>,
    choices_enabled: bool,
    result: Option<ResultView>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn question(&self) -> Option<&QuestionView> {
        self.question.as_ref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    pub fn choices_enabled(&self) -> bool {
        self.choices_enabled
    }

    pub fn result(&self) -> Option<ResultView> {
        self.result
    }

    /// The judge mark, while it is still within its display window.
    pub fn visible_judge(&self) -> Option<bool> {
        self.judge
            .as_ref()
            .filter(|judge| judge.shown_at.elapsed() < JUDGE_DURATION)
            .map(|judge| judge.is_correct)
    }

    pub fn selected_category(&self) -> Category {
        Category::ALL[self.category_cursor]
    }

    pub fn category_cursor(&self) -> usize {
        self.category_cursor
    }

    pub fn select_next_category(&mut self) {
        self.category_cursor = (self.category_cursor + 1) % Category::ALL.len();
    }

    pub fn select_previous_category(&mut self) {
        let count = Category::ALL.len();
        self.category_cursor = (self.category_cursor + count - 1) % count;
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % CHOICE_COUNT;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + CHOICE_COUNT - 1) % CHOICE_COUNT;
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

impl Presenter for TerminalView {
    fn show_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    fn render_question(
        &mut self,
        text: &str,
        choices: &[String; CHOICE_COUNT],
        number: usize,
        total: usize,
    ) {
        self.question = Some(QuestionView {
            text: text.to_string(),
            choices: choices.clone(),
            number,
            total,
        });
        self.selected_option = 0;
        self.highlight = None;
        self.judge = None;
    }

    fn update_timer_display(&mut self, remaining_secs: u32) {
        self.remaining_secs = remaining_secs;
    }

    fn show_judge(&mut self, is_correct: bool) {
        self.judge = Some(Judge {
            is_correct,
            shown_at: Instant::now(),
        });
    }

    fn highlight_answer(&mut self, correct_index: usize, chosen_index: Option<usize>) {
        self.highlight = Some(Highlight {
            correct: correct_index,
            wrong: chosen_index,
        });
    }

    fn set_choices_enabled(&mut self, enabled: bool) {
        self.choices_enabled = enabled;
    }

    fn show_result(&mut self, score: usize, total: usize, tier: Tier) {
        self.result = Some(ResultView { score, total, tier });
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen == Screen::Quiz {
            self.notice = None;
            self.result = None;
        }
        if screen == Screen::Category {
            self.question = None;
            self.judge = None;
            self.highlight = None;
        }
        self.screen = screen;
    }
}
