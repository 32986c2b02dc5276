//! Client-side route table
//!
//! Pure parser/formatter for the navigation surface. Unknown paths fall
//! back to the home view.

/// A resolved client route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Knowledge,
    KnowledgeView { id: String },
    Collections,
    CreateCollection,
    Notes,
    StudyGuides,
    Quizzes,
    Flashcards,
}

impl Route {
    /// Resolve a path; anything unmatched is the home view
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["knowledge"] => Self::Knowledge,
            ["knowledge", id] => Self::KnowledgeView { id: (*id).to_string() },
            ["collections"] => Self::Collections,
            ["collections", "create"] => Self::CreateCollection,
            ["notes"] => Self::Notes,
            ["study-guides"] => Self::StudyGuides,
            ["quizzes"] => Self::Quizzes,
            ["flashcards"] => Self::Flashcards,
            _ => Self::Home,
        }
    }

    /// Canonical path for the route
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Knowledge => "/knowledge".to_string(),
            Self::KnowledgeView { id } => format!("/knowledge/{id}"),
            Self::Collections => "/collections".to_string(),
            Self::CreateCollection => "/collections/create".to_string(),
            Self::Notes => "/notes".to_string(),
            Self::StudyGuides => "/study-guides".to_string(),
            Self::Quizzes => "/quizzes".to_string(),
            Self::Flashcards => "/flashcards".to_string(),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/knowledge"), Route::Knowledge);
        assert_eq!(
            Route::parse("/knowledge/k3"),
            Route::KnowledgeView { id: "k3".to_string() }
        );
        assert_eq!(Route::parse("/collections"), Route::Collections);
        assert_eq!(Route::parse("/collections/create"), Route::CreateCollection);
        assert_eq!(Route::parse("/notes"), Route::Notes);
        assert_eq!(Route::parse("/study-guides"), Route::StudyGuides);
        assert_eq!(Route::parse("/quizzes"), Route::Quizzes);
        assert_eq!(Route::parse("/flashcards"), Route::Flashcards);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/settings"), Route::Home);
        assert_eq!(Route::parse("/flashcards/create"), Route::Home);
        assert_eq!(Route::parse("/knowledge/k3/extra"), Route::Home);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/knowledge/"), Route::Knowledge);
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::KnowledgeView { id: "k1".to_string() };
        assert_eq!(Route::parse(&route.path()), route);
    }
}
