use std::fmt;

use super::card::Card;
use super::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileKind {
    Cell,
    Foundation,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Cell(usize),
    Foundation(usize),
    Column(usize),
}

impl PileId {
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Cell(_) => PileKind::Cell,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Column(_) => PileKind::Column,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Cell(i) => write!(f, "c{i}"),
            PileId::Foundation(i) => write!(f, "f{i}"),
            PileId::Column(i) => write!(f, "t{i}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    /// Builds a pile from whitespace-separated two-character card codes.
    pub fn from_codes(kind: PileKind, codes: &str) -> Option<Self> {
        let mut pile = Pile::new(kind);
        for token in codes.split_whitespace() {
            pile.cards.push(Card::from_code(token)?);
        }
        Some(pile)
    }

    pub fn kind(&self) -> PileKind {
        self.kind
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

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn remove_top(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyPileAccess)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Card, EngineError> {
        if index >= self.cards.len() {
            return Err(EngineError::EmptyPileAccess);
        }
        Ok(self.cards.remove(index))
    }

    /// Detaches the top of the pile from `start` upward, preserving order.
    pub fn split_off(&mut self, start: usize) -> Vec<Card> {
        self.cards.split_off(start.min(self.cards.len()))
    }

    /// Whether `card` may legally land on this pile right now.
    pub fn can_accept_top(&self, card: &Card) -> bool {
        match self.kind {
            PileKind::Cell => self.cards.is_empty(),
            PileKind::Foundation => match self.top() {
                None => card.is_ace(),
                Some(top) => card.foundation_adjacent(top),
            },
            PileKind::Column => match self.top() {
                None => true,
                Some(top) => card.cascade_adjacent(top),
            },
        }
    }

    /// Whether a selection starting at `index` may be lifted off this pile.
    /// Columns allow any position inside the top orderable run; cells allow
    /// their single card; foundations never release cards.
    pub fn can_pick_up_at(&self, index: usize) -> bool {
        match self.kind {
            PileKind::Foundation => false,
            PileKind::Cell => self.cards.len() == 1 && index == 0,
            PileKind::Column => {
                !self.cards.is_empty()
                    && index < self.cards.len()
                    && index >= self.cards.len() - self.longest_top_run()
            }
        }
    }

    /// Length of the maximal descending alternating-colour run ending at the
    /// top of a column. Other kinds report at most one.
    pub fn longest_top_run(&self) -> usize {
        if self.cards.is_empty() {
            return 0;
        }
        if self.kind != PileKind::Column {
            return 1;
        }
        let mut run = 1;
        for i in (1..self.cards.len()).rev() {
            if self.cards[i].cascade_adjacent(&self.cards[i - 1]) {
                run += 1;
            } else {
                break;
            }
        }
        run
    }

    pub fn sort_by_rank(&mut self) {
        self.cards.sort();
    }

    pub fn sort_by_suit(&mut self) {
        self.cards.sort_by(|a, b| a.suit_then_rank(b));
    }

    /// Best Blackjack total of the whole pile: aces count one, then promote
    /// one at a time to eleven while the total stays at or under 21.
    pub fn blackjack_value(&self) -> u32 {
        let mut total: u32 = 0;
        let mut aces = 0;
        for card in &self.cards {
            if card.is_ace() {
                aces += 1;
            }
            total += u32::from(card.blackjack_value());
        }
        while aces > 0 && total + 10 <= 21 {
            aces -= 1;
            total += 10;
        }
        total
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.blackjack_value() == 21
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", card.code())?;
            first = false;
        }
        Ok(())
    }
}
