use blackjack_lib::{Outcome, Side};
use std::fmt::Display;

/// Tally of the rounds played during one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub draws: u32,
    pub player_blackjacks: u32,
}

impl SessionSummary {
    /// Records one finished round. `player_total` is the player's final hand value.
    pub fn record(&mut self, outcome: Outcome, player_total: u32) {
        self.games += 1;
        match outcome.winner() {
            Some(Side::Player) => self.player_wins += 1,
            Some(Side::Dealer) => self.dealer_wins += 1,
            None => self.draws += 1,
        }
        if player_total == blackjack_lib::BLACKJACK {
            self.player_blackjacks += 1;
        }
    }
}

/// Stats block logged at `info` level when a session ends, never written to the game output.
impl Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 60;
        const TEXT_WIDTH: usize = "number of player blackjacks".len() + 10;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;
        writeln!(f, "{:-^WIDTH$}", "session")?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "games played", self.games)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "games won", self.player_wins)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "games lost", self.dealer_wins)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "games drawn", self.draws)?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "number of player blackjacks", self.player_blackjacks
        )?;
        write!(f, "{}", "-".repeat(WIDTH))
    }
}
