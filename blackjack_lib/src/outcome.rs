use crate::hand::Hand;
use std::fmt::{self, Display};

/// Which side took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Dealer,
}

/// How a round ended. `Display` gives the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Draw,
}

impl Outcome {
    /// The side that won, `None` for a draw.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::DealerBust | Outcome::PlayerWin => Some(Side::Player),
            Outcome::PlayerBust | Outcome::DealerWin => Some(Side::Dealer),
            Outcome::Draw => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Outcome::PlayerBust => "You busted. Dealer wins!",
            Outcome::DealerBust => "Dealer busted. You win!",
            Outcome::PlayerWin => "You win!",
            Outcome::DealerWin => "Dealer wins!",
            Outcome::Draw => "It's a draw",
        };
        write!(f, "{}", msg)
    }
}

/// Mid-round check, run after the deal, after the player's turn and after the dealer's turn.
/// The first matching rule decides the round; `None` means play continues.
pub fn check_winner(player: &Hand, dealer: &Hand) -> Option<Outcome> {
    if player.is_bust() {
        Some(Outcome::PlayerBust)
    } else if dealer.is_bust() {
        Some(Outcome::DealerBust)
    } else if player.is_blackjack() {
        Some(Outcome::PlayerWin)
    } else if dealer.is_blackjack() {
        Some(Outcome::DealerWin)
    } else if dealer.is_blackjack() && player.is_blackjack() {
        // unreachable, a shared 21 is already settled by the player arm
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Final comparison of totals once both turns are over. Busts are not rechecked here.
pub fn compare_final(player: &Hand, dealer: &Hand) -> Outcome {
    let (player_total, dealer_total) = (player.value(), dealer.value());
    if player_total > dealer_total {
        Outcome::PlayerWin
    } else if player_total < dealer_total {
        Outcome::DealerWin
    } else {
        Outcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn player(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        hand.add_card(ranks.iter().map(|r| Card::new(Suit::Hearts, *r)));
        hand
    }

    fn dealer(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::dealer();
        hand.add_card(ranks.iter().map(|r| Card::new(Suit::Spades, *r)));
        hand
    }

    #[test]
    fn player_bust_checked_first() {
        let p = player(&[Rank::Ten, Rank::Nine, Rank::Five]);
        let d = dealer(&[Rank::Ten, Rank::Nine, Rank::Four]);
        assert_eq!(check_winner(&p, &d), Some(Outcome::PlayerBust));
    }

    #[test]
    fn dealer_bust() {
        let p = player(&[Rank::Ten, Rank::Two]);
        let d = dealer(&[Rank::Ten, Rank::Six, Rank::Eight]);
        assert_eq!(check_winner(&p, &d), Some(Outcome::DealerBust));
    }

    #[test]
    fn bust_beats_twenty_one() {
        let p = player(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let d = dealer(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(check_winner(&p, &d), Some(Outcome::DealerBust));
    }

    #[test]
    fn blackjacks() {
        let p = player(&[Rank::Ace, Rank::Ten]);
        let d = dealer(&[Rank::Nine, Rank::Nine]);
        assert_eq!(check_winner(&p, &d), Some(Outcome::PlayerWin));

        let p = player(&[Rank::Nine, Rank::Nine]);
        let d = dealer(&[Rank::Ace, Rank::King]);
        assert_eq!(check_winner(&p, &d), Some(Outcome::DealerWin));
    }

    #[test]
    fn shared_twenty_one_goes_to_the_player() {
        let p = player(&[Rank::Ace, Rank::Queen]);
        let d = dealer(&[Rank::Ace, Rank::King]);
        assert_eq!(check_winner(&p, &d), Some(Outcome::PlayerWin));
    }

    #[test]
    fn undecided_round_continues() {
        let p = player(&[Rank::Ten, Rank::Six]);
        let d = dealer(&[Rank::Ten, Rank::Seven]);
        assert_eq!(check_winner(&p, &d), None);
    }

    #[test]
    fn final_comparison() {
        let eighteen = player(&[Rank::Ten, Rank::Eight]);
        let d18 = dealer(&[Rank::Nine, Rank::Nine]);
        let d17 = dealer(&[Rank::Ten, Rank::Seven]);
        let d20 = dealer(&[Rank::Ten, Rank::Queen]);
        assert_eq!(compare_final(&eighteen, &d18), Outcome::Draw);
        assert_eq!(compare_final(&eighteen, &d17), Outcome::PlayerWin);
        assert_eq!(compare_final(&eighteen, &d20), Outcome::DealerWin);
    }

    #[test]
    fn messages_and_winners() {
        assert_eq!(Outcome::PlayerBust.to_string(), "You busted. Dealer wins!");
        assert_eq!(Outcome::DealerBust.to_string(), "Dealer busted. You win!");
        assert_eq!(Outcome::PlayerWin.to_string(), "You win!");
        assert_eq!(Outcome::DealerWin.to_string(), "Dealer wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw");
        assert_eq!(Outcome::DealerBust.winner(), Some(Side::Player));
        assert_eq!(Outcome::PlayerBust.winner(), Some(Side::Dealer));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
