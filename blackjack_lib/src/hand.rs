use crate::card::Card;
use crate::BLACKJACK;
use std::fmt::{self, Display};

/// The cards held by the player or by the dealer during a single round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    dealer: bool,
}

impl Hand {
    /// An empty player hand.
    pub fn new() -> Hand {
        Hand {
            cards: Vec::new(),
            dealer: false,
        }
    }

    /// An empty dealer hand, its first card stays hidden until revealed.
    pub fn dealer() -> Hand {
        Hand {
            cards: Vec::new(),
            dealer: true,
        }
    }

    pub fn is_dealer(&self) -> bool {
        self.dealer
    }

    pub fn add_card<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total of the hand. Aces start at 11; when the hand holds at least one ace and the
    /// raw total is over 21, 10 is taken off exactly once no matter how many aces there are.
    pub fn value(&self) -> u32 {
        let raw: u32 = self.cards.iter().map(|c| u32::from(c.value())).sum();
        let has_ace = self.cards.iter().any(|c| c.is_ace());
        if has_ace && raw > BLACKJACK {
            raw - 10
        } else {
            raw
        }
    }

    /// True for any hand worth exactly 21, however many cards it took to get there.
    pub fn is_blackjack(&self) -> bool {
        self.value() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Text rendering of the hand. A dealer hand hides its first card unless `show_dealer`
    /// is set or the hand is already worth 21, and never prints its total.
    pub fn display(&self, show_dealer: bool) -> HandDisplay<'_> {
        HandDisplay {
            hand: self,
            show_dealer,
        }
    }
}

pub struct HandDisplay<'a> {
    hand: &'a Hand,
    show_dealer: bool,
}

impl Display for HandDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.hand;
        if hand.is_dealer() {
            writeln!(f, "Dealer's hand:")?;
        } else {
            writeln!(f, "Your hand:")?;
        }
        let hide_first = hand.is_dealer() && !self.show_dealer && !hand.is_blackjack();
        for (idx, card) in hand.cards.iter().enumerate() {
            if idx == 0 && hide_first {
                writeln!(f, "Hidden")?;
            } else {
                writeln!(f, "{}", card)?;
            }
        }
        if !hand.is_dealer() {
            writeln!(f, "Value: {}", hand.value())?;
        }
        writeln!(f)
    }
}
