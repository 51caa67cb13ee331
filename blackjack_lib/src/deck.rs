use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A single 52 card deck. Cards are dealt from the end of the internal vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck, suits in `Suit::ALL` order and ranks in `Rank::ALL` order within each suit.
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    /// Builds a deck in a caller chosen order. The last card of `cards` is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    /// Shuffles the remaining cards in place using `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() > 1 {
            self.cards.shuffle(rng);
        }
    }

    /// Removes and returns up to `n` cards, fewer when the deck runs out.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let split_at = self.cards.len().saturating_sub(n);
        let mut dealt = self.cards.split_off(split_at);
        // top of the deck comes out first
        dealt.reverse();
        dealt
    }

    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
