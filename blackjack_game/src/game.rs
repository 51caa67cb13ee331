//! Module that drives a single round of blackjack. The round is a plain state machine,
//! it never reads or writes text, so every transition can be exercised directly in tests.

pub mod player;
pub mod strategy;
pub mod table;

pub mod prelude {
    pub use super::player::Decision;
    pub use super::strategy::{DealerStrategy, DecisionStrategy, DEALER_STANDS_ON};
    pub use super::table::BlackjackTable;
    pub use super::{BlackjackRound, RoundState};
    pub use blackjack_lib::{BlackjackGameError, Card, Deck, Hand, Outcome};
}

pub use prelude::*;
use blackjack_lib::{check_winner, compare_final, BLACKJACK};
use rand::Rng;
use tracing::{debug, info};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolution,
    Finished(Outcome),
}

/// A single round: a fresh deck, a player hand and a dealer hand.
pub struct BlackjackRound {
    table: BlackjackTable,
    dealer_strategy: DealerStrategy,
    state: RoundState,
}

impl BlackjackRound {
    /// Starts a round with a freshly built deck shuffled by `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> BlackjackRound {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        BlackjackRound::with_deck(deck)
    }

    /// Starts a round with a deck prepared by the caller.
    pub fn with_deck(deck: Deck) -> BlackjackRound {
        BlackjackRound {
            table: BlackjackTable::new(deck),
            dealer_strategy: DealerStrategy::new(),
            state: RoundState::Dealing,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn player(&self) -> &Hand {
        &self.table.players_hand
    }

    pub fn dealer(&self) -> &Hand {
        &self.table.dealers_hand
    }

    /// The outcome of the round once it is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Deals the opening four cards and settles natural 21s straight away.
    pub fn deal_initial(&mut self) -> Result<RoundState, BlackjackGameError> {
        self.expect_state(RoundState::Dealing, "deal")?;
        self.table.deal_hand();
        self.state = self.settle_or(RoundState::PlayerTurn);
        Ok(self.state)
    }

    /// True while the player may still hit or stand.
    pub fn player_can_act(&self) -> bool {
        self.state == RoundState::PlayerTurn && self.player().value() < BLACKJACK
    }

    /// Applies the player's decision. The turn ends on a stand or once the player reaches 21 or more.
    pub fn apply(&mut self, decision: Decision) -> Result<RoundState, BlackjackGameError> {
        if !self.player_can_act() {
            return Err(BlackjackGameError::new(format!(
                "cannot {decision} while the round is in state {:?}",
                self.state
            )));
        }
        debug!(%decision, "player decision");
        let turn_over = match decision {
            Decision::Hit => !self.table.hit() || self.player().value() >= BLACKJACK,
            Decision::Stand => true,
        };
        if turn_over {
            self.state = self.settle_or(RoundState::DealerTurn);
        }
        Ok(self.state)
    }

    /// Plays the dealer's fixed strategy, then checks for a bust or a 21.
    pub fn play_dealer(&mut self) -> Result<RoundState, BlackjackGameError> {
        self.expect_state(RoundState::DealerTurn, "play the dealer")?;
        self.table.dealer_play(&self.dealer_strategy);
        self.state = self.settle_or(RoundState::Resolution);
        Ok(self.state)
    }

    /// Compares the final totals. Always finishes the round.
    pub fn resolve(&mut self) -> Result<Outcome, BlackjackGameError> {
        self.expect_state(RoundState::Resolution, "resolve")?;
        let outcome = compare_final(self.player(), self.dealer());
        self.finish(outcome);
        Ok(outcome)
    }

    fn settle_or(&mut self, next: RoundState) -> RoundState {
        match check_winner(self.player(), self.dealer()) {
            Some(outcome) => {
                self.finish(outcome);
                self.state
            }
            None => next,
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(
            player = self.player().value(),
            dealer = self.dealer().value(),
            %outcome,
            "round finished"
        );
        self.state = RoundState::Finished(outcome);
    }

    fn expect_state(&self, expected: RoundState, action: &str) -> Result<(), BlackjackGameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BlackjackGameError::new(format!(
                "cannot {action} while the round is in state {:?}",
                self.state
            )))
        }
    }
}
