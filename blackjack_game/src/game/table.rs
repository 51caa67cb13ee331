use super::player::Decision;
use super::strategy::DecisionStrategy;
use blackjack_lib::{Card, Deck, Hand};
use tracing::debug;

/// The cards in play for one round: the deck plus the player's and dealer's hands.
pub struct BlackjackTable {
    deck: Deck,
    pub players_hand: Hand,
    pub dealers_hand: Hand,
}

impl BlackjackTable {
    pub fn new(deck: Deck) -> BlackjackTable {
        BlackjackTable {
            deck,
            players_hand: Hand::new(),
            dealers_hand: Hand::dealer(),
        }
    }

    /// Deals the opening cards: player, dealer, player, dealer.
    pub fn deal_hand(&mut self) {
        for _ in 0..2 {
            let card = self.deck.deal(1);
            log_card("player", &card);
            self.players_hand.add_card(card);

            let card = self.deck.deal(1);
            log_card("dealer", &card);
            self.dealers_hand.add_card(card);
        }
    }

    /// Deals one card to the player. Returns false when the deck is empty.
    pub fn hit(&mut self) -> bool {
        match self.deck.deal_one() {
            Some(card) => {
                debug!(to = "player", card = %card, "dealt");
                self.players_hand.add_card([card]);
                true
            }
            None => false,
        }
    }

    /// Plays out the dealer's hand with `strategy`, stopping early if the deck runs dry.
    pub fn dealer_play<D: DecisionStrategy>(&mut self, strategy: &D) {
        while strategy.decide(&self.dealers_hand) == Decision::Hit {
            let Some(card) = self.deck.deal_one() else {
                debug!("deck exhausted during dealer's turn");
                break;
            };
            debug!(to = "dealer", card = %card, "dealt");
            self.dealers_hand.add_card([card]);
        }
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

fn log_card(to: &str, card: &[Card]) {
    for c in card {
        debug!(to, card = %c, "dealt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::strategy::DealerStrategy;
    use blackjack_lib::{Rank, Suit};

    /// Deck that deals `ranks` in the order given.
    fn stacked(ranks: &[Rank]) -> Deck {
        Deck::from_cards(
            ranks
                .iter()
                .rev()
                .map(|r| Card::new(Suit::Hearts, *r))
                .collect(),
        )
    }

    #[test]
    fn deal_alternates_player_and_dealer() {
        let mut table =
            BlackjackTable::new(stacked(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]));
        table.deal_hand();
        let ranks = |hand: &Hand| hand.cards().iter().map(|c| c.rank).collect::<Vec<_>>();
        assert_eq!(ranks(&table.players_hand), vec![Rank::Two, Rank::Four]);
        assert_eq!(ranks(&table.dealers_hand), vec![Rank::Three, Rank::Five]);
        assert_eq!(table.cards_remaining(), 0);
    }

    #[test]
    fn dealer_draws_to_seventeen() {
        let mut table = BlackjackTable::new(stacked(&[
            Rank::Ten,
            Rank::Two,
            Rank::Nine,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::King,
        ]));
        table.deal_hand();
        table.dealer_play(&DealerStrategy::new());
        // 2 + 3 + 4 + 5 = 14, then the king busts at 24
        assert_eq!(table.dealers_hand.value(), 24);
        assert_eq!(table.cards_remaining(), 0);
    }

    #[test]
    fn hit_deals_the_top_card() {
        let mut table = BlackjackTable::new(stacked(&[
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
        ]));
        table.deal_hand();
        assert!(table.hit());
        assert_eq!(table.players_hand.cards()[2].rank, Rank::Six);
        assert_eq!(table.cards_remaining(), 0);
    }

    #[test]
    fn dealer_stops_when_deck_is_empty() {
        let mut table =
            BlackjackTable::new(stacked(&[Rank::Ten, Rank::Two, Rank::Nine, Rank::Three]));
        table.deal_hand();
        table.dealer_play(&DealerStrategy::new());
        assert_eq!(table.dealers_hand.value(), 5);
        assert!(!table.hit());
        assert_eq!(table.players_hand.len(), 2);
    }
}
