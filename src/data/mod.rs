mod loader;

pub use loader::{DEFAULT_DATA_DIR, LoadError, QuestionLoader, parse_questions};
