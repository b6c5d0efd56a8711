use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{CHOICE_COUNT, Category, Question};

/// Directory searched for `<category>.json` files when none is configured.
pub const DEFAULT_DATA_DIR: &str = "quiz-data";

/// The ways a category's question data can be unavailable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: question {index} has answer {answer}, expected below {max}", .path.display(), max = CHOICE_COUNT)]
    AnswerOutOfRange {
        path: PathBuf,
        index: usize,
        answer: usize,
    },
}

/// Reads question banks from a directory holding one JSON file per category.
#[derive(Debug, Clone)]
pub struct QuestionLoader {
    data_dir: PathBuf,
}

impl QuestionLoader {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.data_dir.join(format!("{}.json", category.id()))
    }

    /// Load every question of `category`. The bank may be empty.
    pub async fn load(&self, category: Category) -> Result<Vec<Question>, LoadError> {
        let path = self.path_for(category);

        let json_content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(source) => return Err(LoadError::Read { path, source }),
        };

        let questions = parse_questions(&json_content, &path)?;
        tracing::debug!(%category, count = questions.len(), "loaded question bank");
        Ok(questions)
    }
}

/// Parse and validate a question bank. `path` is only used for error reporting.
pub fn parse_questions(json_content: &str, path: &Path) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some((index, question)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.answer_index >= CHOICE_COUNT)
    {
        return Err(LoadError::AnswerOutOfRange {
            path: path.to_path_buf(),
            index,
            answer: question.answer_index,
        });
    }

    Ok(questions)
}
