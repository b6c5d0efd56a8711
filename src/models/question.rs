use serde::Deserialize;

/// Number of choices every question offers.
pub const CHOICE_COUNT: usize = 4;

/// A single multiple-choice question as stored in a category data file.
///
/// The on-disk field names are `question`, `choices` and `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub choices: [String; CHOICE_COUNT],
    #[serde(rename = "answer")]
    pub answer_index: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}
