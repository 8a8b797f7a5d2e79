//! Affordances: URLs for the actions a client may take next.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::instrument;
use xogo_tictactoe::{Game, Position};

/// Builds affordance URLs under a fixed public prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    base_url: String,
}

impl Links {
    /// Creates links under `base_url`. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Public URL prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL that starts a new game.
    pub fn new_game(&self) -> String {
        format!("{}/new", self.base_url)
    }

    /// URL that marks `pos`.
    pub fn mark(&self, pos: Position) -> String {
        format!("{}/mark/{}", self.base_url, pos.to_index())
    }

    /// Affordances for the legal moves of `game`, plus "new game".
    #[instrument(skip(self, game), fields(legal = game.legal_moves().len()))]
    pub fn valid_actions(&self, game: &Game) -> ValidActions {
        ValidActions {
            new_game: self.new_game(),
            marks: game
                .legal_moves()
                .iter()
                .map(|pos| (pos, self.mark(pos)))
                .collect(),
        }
    }
}

/// The `validActions` object of a response.
///
/// Serializes as `{"newGame": url, "markTopLeft": url, ...}` with one
/// `mark*` key per legal square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidActions {
    new_game: String,
    marks: Vec<(Position, String)>,
}

impl ValidActions {
    /// URL that starts a new game.
    pub fn new_game(&self) -> &str {
        &self.new_game
    }

    /// URL that marks `pos`, if that square is currently legal.
    pub fn mark(&self, pos: Position) -> Option<&str> {
        self.marks
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|(_, url)| url.as_str())
    }

    /// Number of mark affordances.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }
}

impl Serialize for ValidActions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.marks.len()))?;
        map.serialize_entry("newGame", &self.new_game)?;
        for (pos, url) in &self.marks {
            map.serialize_entry(pos.action_name(), url)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_trim_trailing_slash() {
        let links = Links::new("http://localhost:8080/");
        assert_eq!(links.new_game(), "http://localhost:8080/new");
        assert_eq!(links.mark(Position::BottomRight), "http://localhost:8080/mark/8");
    }

    #[test]
    fn test_fresh_game_offers_every_square() {
        let actions = Links::new("http://h").valid_actions(&Game::new());
        assert_eq!(actions.mark_count(), 9);
        assert_eq!(actions.mark(Position::Center), Some("http://h/mark/4"));
    }

    #[test]
    fn test_filled_squares_omitted() {
        let game = Game::replay(&[Position::Center, Position::TopLeft]);
        let actions = Links::new("http://h").valid_actions(&game);
        assert_eq!(actions.mark_count(), 7);
        assert_eq!(actions.mark(Position::Center), None);
        assert_eq!(actions.mark(Position::TopLeft), None);
    }

    #[test]
    fn test_serialized_keys() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
        ]);
        let actions = Links::new("http://h").valid_actions(&game);
        let value = serde_json::to_value(&actions).expect("serialize");
        assert_eq!(value, serde_json::json!({ "newGame": "http://h/new" }));
    }
}
