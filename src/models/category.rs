use std::fmt;

/// A named topic partition of the question data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    History,
    Science,
    Geography,
    Trivia,
    Manga,
    Anime,
}

impl Category {
    /// Every category, in the order the selection screen lists them.
    pub const ALL: [Category; 6] = [
        Category::History,
        Category::Science,
        Category::Geography,
        Category::Trivia,
        Category::Manga,
        Category::Anime,
    ];

    /// Identifier used to name the category's data file.
    pub fn id(self) -> &'static str {
        match self {
            Category::History => "history",
            Category::Science => "science",
            Category::Geography => "geography",
            Category::Trivia => "trivia",
            Category::Manga => "manga",
            Category::Anime => "anime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::History => "Japanese History Quiz",
            Category::Science => "Science Quiz",
            Category::Geography => "Geography Quiz",
            Category::Trivia => "Trivia Quiz",
            Category::Manga => "Manga Quiz",
            Category::Anime => "Anime Quiz",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
