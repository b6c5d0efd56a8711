mod category;
mod question;

pub use category::Category;
pub use question::{CHOICE_COUNT, Question};
