use super::player::Decision;
use blackjack_lib::Hand;

/// The total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u32 = 17;

/// Trait for anything that decides how to play a hand without asking a person.
pub trait DecisionStrategy {
    fn decide(&self, hand: &Hand) -> Decision;
}

/// The house rule: draw while below 17, then stand.
#[derive(Debug, Clone, Copy)]
pub struct DealerStrategy {
    stands_on: u32,
}

impl DealerStrategy {
    pub fn new() -> DealerStrategy {
        DealerStrategy {
            stands_on: DEALER_STANDS_ON,
        }
    }
}

impl Default for DealerStrategy {
    fn default() -> Self {
        DealerStrategy::new()
    }
}

impl DecisionStrategy for DealerStrategy {
    fn decide(&self, hand: &Hand) -> Decision {
        if hand.value() < self.stands_on {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}
