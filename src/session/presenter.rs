//! The presentation interface the session drives.

use crate::models::CHOICE_COUNT;

/// The screens the front end switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Category,
    Quiz,
    Result,
}

/// Result band determined by the final score ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Every question answered correctly.
    Perfect,
    /// At least 70% correct.
    Mid,
    Low,
}

impl Tier {
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Tier::Perfect
        } else if score * 10 >= total * 7 {
            Tier::Mid
        } else {
            Tier::Low
        }
    }
}

/// Commands the session issues to whatever renders it.
///
/// Calls are one-way; the presenter never feeds state back into the session
/// except through the inbound signals handled by [`crate::App`].
pub trait Presenter {
    /// Show the label of the category being played.
    fn show_title(&mut self, title: &str);

    /// Show a transient notice, such as a load failure.
    fn show_notice(&mut self, message: &str);

    /// Render a question. `number` is 1-based.
    fn render_question(
        &mut self,
        text: &str,
        choices: &[String; CHOICE_COUNT],
        number: usize,
        total: usize,
    );

    fn update_timer_display(&mut self, remaining_secs: u32);

    /// Show the correct/wrong mark. The presenter clears it on its own.
    fn show_judge(&mut self, is_correct: bool);

    /// Highlight the correct choice and, for a wrong click, the chosen one.
    fn highlight_answer(&mut self, correct_index: usize, chosen_index: Option<usize>);

    fn set_choices_enabled(&mut self, enabled: bool);

    fn show_result(&mut self, score: usize, total: usize, tier: Tier);

    fn switch_screen(&mut self, screen: Screen);
}
