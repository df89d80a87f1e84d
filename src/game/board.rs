use std::collections::HashMap;

use super::card::Card;
use super::pile::{Pile, PileId, PileKind};
use super::EngineError;

/// The full table: four holding cells, four foundations, eight columns.
///
/// The empty-cell and empty-column counts feed the supermove capacity
/// formula, so every mutation goes through the counter-maintaining
/// primitives below; the counters always equal the actual number of empty
/// piles of their kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Pile; 4],
    foundations: [Pile; 4],
    columns: [Pile; 8],
    free_cells: usize,
    open_columns: usize,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| Pile::new(PileKind::Cell)),
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            columns: std::array::from_fn(|_| Pile::new(PileKind::Column)),
            free_cells: 4,
            open_columns: 8,
        }
    }

    pub fn cells(&self) -> &[Pile; 4] {
        &self.cells
    }

    pub fn foundations(&self) -> &[Pile; 4] {
        &self.foundations
    }

    pub fn columns(&self) -> &[Pile; 8] {
        &self.columns
    }

    pub fn free_cells(&self) -> usize {
        self.free_cells
    }

    pub fn open_columns(&self) -> usize {
        self.open_columns
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Cell(i) => &self.cells[i],
            PileId::Foundation(i) => &self.foundations[i],
            PileId::Column(i) => &self.columns[i],
        }
    }

    fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Cell(i) => &mut self.cells[i],
            PileId::Foundation(i) => &mut self.foundations[i],
            PileId::Column(i) => &mut self.columns[i],
        }
    }

    pub fn can_accept_top(&self, id: PileId, card: &Card) -> bool {
        self.pile(id).can_accept_top(card)
    }

    pub fn can_pick_up_at(&self, id: PileId, index: usize) -> bool {
        self.pile(id).can_pick_up_at(index)
    }

    /// Appends one card, keeping the empty-pile counters in step.
    pub fn place_card(&mut self, id: PileId, card: Card) {
        let was_empty = self.pile(id).is_empty();
        self.pile_mut(id).push(card);
        if was_empty {
            self.note_filled(id.kind());
        }
    }

    /// Appends a run in its original order, keeping the counters in step.
    pub fn place_run(&mut self, id: PileId, cards: Vec<Card>) {
        if cards.is_empty() {
            return;
        }
        let was_empty = self.pile(id).is_empty();
        self.pile_mut(id).extend(cards);
        if was_empty {
            self.note_filled(id.kind());
        }
    }

    /// Pops the top card, keeping the counters in step.
    pub fn take_top(&mut self, id: PileId) -> Result<Card, EngineError> {
        let card = self.pile_mut(id).remove_top()?;
        if self.pile(id).is_empty() {
            self.note_emptied(id.kind());
        }
        Ok(card)
    }

    /// Detaches the cards of a column from `start` to the top, preserving
    /// their order, keeping the counters in step.
    pub fn lift_run(&mut self, column: usize, start: usize) -> Result<Vec<Card>, EngineError> {
        if start >= self.columns[column].len() {
            return Err(EngineError::EmptyPileAccess);
        }
        let cards = self.columns[column].split_off(start);
        if self.columns[column].is_empty() {
            self.open_columns += 1;
        }
        Ok(cards)
    }

    fn note_filled(&mut self, kind: PileKind) {
        match kind {
            PileKind::Cell => self.free_cells -= 1,
            PileKind::Column => self.open_columns -= 1,
            PileKind::Foundation => {}
        }
    }

    fn note_emptied(&mut self, kind: PileKind) {
        match kind {
            PileKind::Cell => self.free_cells += 1,
            PileKind::Column => self.open_columns += 1,
            PileKind::Foundation => {}
        }
    }

    /// Supermove ceiling for a run dropped onto column `dst`: one card per
    /// empty holding cell plus one, doubled per empty column. A column does
    /// not count as an intermediate when it is the (already lifted, hence
    /// empty) source or the destination itself.
    pub fn block_capacity(&self, source: usize, dst: usize) -> usize {
        let mut open = self.open_columns;
        if self.columns[source].is_empty() {
            open = open.saturating_sub(1);
        }
        if self.columns[dst].is_empty() {
            open = open.saturating_sub(1);
        }
        (self.free_cells + 1) * (1usize << open)
    }

    pub fn longest_top_run(&self, column: usize) -> usize {
        self.columns[column].longest_top_run()
    }

    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == 13)
    }

    pub fn total_cards(&self) -> usize {
        let cells: usize = self.cells.iter().map(Pile::len).sum();
        let foundations: usize = self.foundations.iter().map(Pile::len).sum();
        let columns: usize = self.columns.iter().map(Pile::len).sum();
        cells + foundations + columns
    }

    pub(crate) fn debug_check_counters(&self) {
        debug_assert_eq!(
            self.free_cells,
            self.cells.iter().filter(|pile| pile.is_empty()).count()
        );
        debug_assert_eq!(
            self.open_columns,
            self.columns.iter().filter(|pile| pile.is_empty()).count()
        );
    }

    pub fn encode_for_session(&self) -> String {
        let mut parts = Vec::with_capacity(16);
        for (i, pile) in self.cells.iter().enumerate() {
            parts.push(format!("c{i}={}", encode_pile(pile)));
        }
        for (i, pile) in self.foundations.iter().enumerate() {
            parts.push(format!("f{i}={}", encode_pile(pile)));
        }
        for (i, pile) in self.columns.iter().enumerate() {
            parts.push(format!("t{i}={}", encode_pile(pile)));
        }
        parts.join(";")
    }

    pub fn decode_from_session(data: &str) -> Option<Self> {
        let mut fields = HashMap::<&str, &str>::new();
        for part in data.split(';') {
            let (key, value) = part.split_once('=')?;
            fields.insert(key, value);
        }

        let mut board = Board::empty();
        for i in 0..4 {
            let key = format!("c{i}");
            let cards = decode_pile(fields.get(key.as_str())?)?;
            if cards.len() > 1 {
                return None;
            }
            for card in cards {
                board.place_card(PileId::Cell(i), card);
            }
        }
        for i in 0..4 {
            let key = format!("f{i}");
            let cards = decode_pile(fields.get(key.as_str())?)?;
            if !is_foundation_order(&cards) {
                return None;
            }
            for card in cards {
                board.place_card(PileId::Foundation(i), card);
            }
        }
        for i in 0..8 {
            let key = format!("t{i}");
            let cards = decode_pile(fields.get(key.as_str())?)?;
            for card in cards {
                board.place_card(PileId::Column(i), card);
            }
        }

        if board.total_cards() != 52 {
            return None;
        }
        Some(board)
    }
}

fn encode_pile(pile: &Pile) -> String {
    if pile.is_empty() {
        return "-".to_string();
    }
    pile.cards()
        .iter()
        .map(Card::code)
        .collect::<Vec<_>>()
        .join(".")
}

fn decode_pile(encoded: &str) -> Option<Vec<Card>> {
    if encoded == "-" {
        return Some(Vec::new());
    }
    encoded.split('.').map(Card::from_code).collect()
}

fn is_foundation_order(cards: &[Card]) -> bool {
    match cards.first() {
        None => true,
        Some(first) if !first.is_ace() => false,
        Some(_) => cards
            .windows(2)
            .all(|pair| pair[1].foundation_adjacent(&pair[0])),
    }
}
