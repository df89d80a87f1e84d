use crate::game::{Board, Card, EngineError, PileId};

/// One committed transfer as it entered the history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: PileId,
    pub to: PileId,
    pub unit: MovedUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovedUnit {
    Single(Card),
    Run(Vec<Card>),
}

impl MoveRecord {
    pub fn single(from: PileId, to: PileId, card: Card) -> Self {
        Self {
            from,
            to,
            unit: MovedUnit::Single(card),
        }
    }

    pub fn run(from: PileId, to: PileId, cards: Vec<Card>) -> Self {
        Self {
            from,
            to,
            unit: MovedUnit::Run(cards),
        }
    }

    pub fn unit_len(&self) -> usize {
        match &self.unit {
            MovedUnit::Single(_) => 1,
            MovedUnit::Run(cards) => cards.len(),
        }
    }

    /// Reverses this record: the moved unit comes off the destination's top
    /// and goes back onto the source in its original order. Sound only
    /// because the log is consumed strictly LIFO, so the destination's top
    /// is exactly what this record put there.
    pub(crate) fn revert_on(&self, board: &mut Board) -> Result<(), EngineError> {
        match &self.unit {
            MovedUnit::Single(_) => {
                let card = board.take_top(self.to)?;
                board.place_card(self.from, card);
            }
            MovedUnit::Run(cards) => {
                if board.pile(self.to).len() < cards.len() {
                    return Err(EngineError::EmptyPileAccess);
                }
                let mut lifted = Vec::with_capacity(cards.len());
                for _ in 0..cards.len() {
                    lifted.push(board.take_top(self.to)?);
                }
                lifted.reverse();
                board.place_run(self.from, lifted);
            }
        }
        Ok(())
    }
}
