//! Player identity: a display name bound to one mark for the session.

use crate::board::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A participant in one game session.
///
/// Exactly two players exist per session, one per mark. Names and marks
/// are fixed for the lifetime of the session; a reset clears the board
/// but never touches player identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player with the given display name.
    ///
    /// An empty or whitespace-only name falls back to the mark's symbol,
    /// so an unnamed first player shows up as "X".
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            mark.to_string()
        } else {
            trimmed.to_string()
        };
        Self { name, mark }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_supplied_name() {
        let player = Player::new("Ada", Mark::X);
        assert_eq!(player.name(), "Ada");
        assert_eq!(*player.mark(), Mark::X);
    }

    #[test]
    fn empty_name_defaults_to_symbol() {
        assert_eq!(Player::new("", Mark::X).name(), "X");
        assert_eq!(Player::new("   ", Mark::O).name(), "O");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(Player::new("  Grace ", Mark::O).name(), "Grace");
    }
}
