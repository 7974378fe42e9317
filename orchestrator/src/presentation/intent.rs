//! User intents parsed from console input

use shared::RecipeId;

/// One user action, as understood by the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    SubmitSearch(String),
    /// `None` clears the filter ("All")
    SelectCategory(Option<String>),
    OpenRecipe(RecipeId),
    CloseDetail,
    ReturnHome,
    /// One-based position in the recent-search list, as displayed
    RerunRecent(usize),
    Help,
    Quit,
    /// A slash command that could not be understood
    Invalid(String),
}

impl UserIntent {
    /// Parse one input line.
    ///
    /// Anything not starting with `/` is a search; blank lines become blank
    /// searches, which the orchestrator ignores.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return UserIntent::SubmitSearch(line.to_string());
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match (name.to_ascii_lowercase().as_str(), argument) {
            ("category" | "c", "") | ("all", _) => UserIntent::SelectCategory(None),
            ("category" | "c", name) => UserIntent::SelectCategory(Some(name.to_string())),
            ("open" | "o", id) if !id.is_empty() && !id.contains(char::is_whitespace) => {
                UserIntent::OpenRecipe(RecipeId::new(id))
            }
            ("close", "") => UserIntent::CloseDetail,
            ("home", "") => UserIntent::ReturnHome,
            ("recent" | "r", position) => match position.parse::<usize>() {
                Ok(position) if position > 0 => UserIntent::RerunRecent(position),
                _ => UserIntent::Invalid(line.to_string()),
            },
            ("help" | "h" | "?", _) => UserIntent::Help,
            ("quit" | "q" | "exit", _) => UserIntent::Quit,
            _ => UserIntent::Invalid(line.to_string()),
        }
    }
}
