use blackjack_lib::BlackjackGameError;
use std::fmt::Display;
use std::str::FromStr;

/// A choice the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

impl FromStr for Decision {
    type Err = BlackjackGameError;

    /// Accepts `hit`, `h`, `stand` or `s` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hit" | "h" => Ok(Decision::Hit),
            "stand" | "s" => Ok(Decision::Stand),
            other => Err(BlackjackGameError::new(format!(
                "'{other}' is not a valid choice"
            ))),
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Hit => write!(f, "hit"),
            Decision::Stand => write!(f, "stand"),
        }
    }
}
