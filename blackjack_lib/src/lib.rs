//! Core model for a single-player game of blackjack against a scripted dealer.
//! Nothing in this crate performs I/O, the game driver decides where text goes.

pub mod card;
pub mod deck;
pub mod hand;
pub mod outcome;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{Hand, HandDisplay};
pub use outcome::{check_winner, compare_final, Outcome, Side};

use std::error::Error;
use std::fmt::Display;

/// Highest total a hand may reach without busting.
pub const BLACKJACK: u32 = 21;

/// The error type shared by the library and the game driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackjackGameError {
    pub message: String,
}

impl BlackjackGameError {
    pub fn new(message: String) -> BlackjackGameError {
        BlackjackGameError { message }
    }
}

impl Display for BlackjackGameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for BlackjackGameError {}

impl From<std::io::Error> for BlackjackGameError {
    fn from(value: std::io::Error) -> Self {
        BlackjackGameError::new(format!("i/o error: {value}"))
    }
}
