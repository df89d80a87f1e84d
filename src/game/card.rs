use std::cmp::Ordering;
use std::fmt;

use super::rank_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    fn from_char(ch: char) -> Option<Suit> {
        match ch {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

// Identity is rank and suit; face state is transient and excluded from
// equality and ordering.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl Card {
    pub fn is_ace(&self) -> bool {
        self.rank == 1
    }

    pub fn blackjack_value(&self) -> u8 {
        self.rank.min(10)
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    /// True when this card may sit directly on `below` inside a column:
    /// one rank lower, opposite colour.
    pub fn cascade_adjacent(&self, below: &Card) -> bool {
        below.rank == self.rank + 1 && self.suit.is_red() != below.suit.is_red()
    }

    /// True when this card may sit directly on `below` inside a foundation:
    /// one rank higher, same suit.
    pub fn foundation_adjacent(&self, below: &Card) -> bool {
        self.rank == below.rank + 1 && self.suit == below.suit
    }

    /// Secondary ordering for the sort-by-suit utility: suit first, rank
    /// breaking ties.
    pub fn suit_then_rank(&self, other: &Card) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| self.rank.cmp(&other.rank))
    }

    /// Parses a two-character code such as `AS` or `7d`. The case of the
    /// suit character carries the face state: uppercase is face up.
    pub fn from_code(code: &str) -> Option<Card> {
        let mut chars = code.chars();
        let rank_ch = chars.next()?;
        let suit_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let rank = rank_from_char(rank_ch.to_ascii_uppercase())?;
        let suit = Suit::from_char(suit_ch.to_ascii_uppercase())?;
        Some(Card {
            suit,
            rank,
            face_up: suit_ch.is_ascii_uppercase(),
        })
    }

    /// Renders the two-character code parsed by [`Card::from_code`].
    pub fn code(&self) -> String {
        let rank = rank_to_char(self.rank);
        let suit = self.suit.short();
        if self.face_up {
            format!("{rank}{suit}")
        } else {
            format!(
                "{}{}",
                rank.to_ascii_lowercase(),
                suit.to_ascii_lowercase()
            )
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

fn rank_from_char(ch: char) -> Option<u8> {
    match ch {
        'A' => Some(1),
        '2'..='9' => Some(ch as u8 - b'0'),
        'T' => Some(10),
        'J' => Some(11),
        'Q' => Some(12),
        'K' => Some(13),
        _ => None,
    }
}

fn rank_to_char(rank: u8) -> char {
    match rank {
        1 => 'A',
        2..=9 => (b'0' + rank) as char,
        10 => 'T',
        11 => 'J',
        12 => 'Q',
        13 => 'K',
        _ => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: u8) -> Card {
        Card {
            suit,
            rank,
            face_up: true,
        }
    }

    #[test]
    fn code_round_trip_preserves_rank_suit_and_face() {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                for face_up in [true, false] {
                    let original = Card {
                        suit,
                        rank,
                        face_up,
                    };
                    let parsed = Card::from_code(&original.code());
                    assert_eq!(parsed, Some(original));
                    assert_eq!(parsed.map(|c| c.face_up), Some(face_up));
                }
            }
        }
    }

    #[test]
    fn suit_case_alone_decides_face_state() {
        let up = Card::from_code("TS").unwrap();
        assert!(up.face_up);
        let down = Card::from_code("Ts").unwrap();
        assert!(!down.face_up);
        assert_eq!(down.rank, 10);
        assert_eq!(down.suit, Suit::Spades);
    }

    #[test]
    fn malformed_codes_are_rejected() {
        assert_eq!(Card::from_code(""), None);
        assert_eq!(Card::from_code("A"), None);
        assert_eq!(Card::from_code("ASX"), None);
        assert_eq!(Card::from_code("1S"), None);
        assert_eq!(Card::from_code("AZ"), None);
    }

    #[test]
    fn equality_ignores_face_state() {
        let mut a = card(Suit::Hearts, 7);
        let b = card(Suit::Hearts, 7);
        a.flip();
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_rank_then_suit() {
        assert!(card(Suit::Spades, 2) > card(Suit::Clubs, 1));
        assert!(card(Suit::Clubs, 5) < card(Suit::Diamonds, 5));
        assert_eq!(
            card(Suit::Hearts, 9).suit_then_rank(&card(Suit::Spades, 2)),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn cascade_adjacency_requires_opposite_colour_and_descending_rank() {
        let seven_hearts = card(Suit::Hearts, 7);
        let eight_spades = card(Suit::Spades, 8);
        let eight_diamonds = card(Suit::Diamonds, 8);
        let nine_spades = card(Suit::Spades, 9);
        assert!(seven_hearts.cascade_adjacent(&eight_spades));
        assert!(!seven_hearts.cascade_adjacent(&eight_diamonds));
        assert!(!seven_hearts.cascade_adjacent(&nine_spades));
    }

    #[test]
    fn foundation_adjacency_requires_same_suit_and_ascending_rank() {
        let two_clubs = card(Suit::Clubs, 2);
        let ace_clubs = card(Suit::Clubs, 1);
        let ace_spades = card(Suit::Spades, 1);
        assert!(two_clubs.foundation_adjacent(&ace_clubs));
        assert!(!two_clubs.foundation_adjacent(&ace_spades));
        assert!(!ace_clubs.foundation_adjacent(&two_clubs));
    }

    #[test]
    fn blackjack_value_caps_face_cards_at_ten() {
        assert_eq!(card(Suit::Clubs, 1).blackjack_value(), 1);
        assert_eq!(card(Suit::Clubs, 9).blackjack_value(), 9);
        assert_eq!(card(Suit::Clubs, 10).blackjack_value(), 10);
        assert_eq!(card(Suit::Clubs, 13).blackjack_value(), 10);
    }
}
