use log::debug;

use crate::game::{Board, Card, PileId};

use super::moves::MoveRecord;

/// Every pile a promotion candidate may come from, in sweep order: columns
/// left to right, then holding cells.
fn sweep_sources() -> impl Iterator<Item = PileId> {
    (0..8).map(PileId::Column).chain((0..4).map(PileId::Cell))
}

/// A promotion is safe when no other pile's top card still needs the
/// candidate as a landing spot in a column. Twos are exempt: their only
/// dependents are aces, and aces never need a landing spot.
pub fn is_safe_promotion(board: &Board, source: PileId, card: &Card) -> bool {
    if card.blackjack_value() == 2 {
        return true;
    }
    for id in sweep_sources() {
        if id == source {
            continue;
        }
        if let Some(top) = board.pile(id).top() {
            if top.cascade_adjacent(card) {
                return false;
            }
        }
    }
    true
}

fn accepting_foundation(board: &Board, card: &Card) -> Option<PileId> {
    (0..4)
        .map(PileId::Foundation)
        .find(|id| board.can_accept_top(*id, card))
}

/// Promotes safe top cards onto foundations until a full pass moves
/// nothing. Every pass revisits every pile; a promotion never cuts the
/// pass short. Returns the records of the promotions in the order they
/// were made.
pub fn advance_safe_cards(board: &mut Board) -> Vec<MoveRecord> {
    let mut records = Vec::new();
    loop {
        let mut promoted = false;
        for source in sweep_sources() {
            let Some(card) = board.pile(source).top().copied() else {
                continue;
            };
            let Some(foundation) = accepting_foundation(board, &card) else {
                continue;
            };
            if !is_safe_promotion(board, source, &card) {
                continue;
            }
            let Ok(card) = board.take_top(source) else {
                continue;
            };
            board.place_card(foundation, card);
            debug!("auto-advanced {} from {source} to {foundation}", card.label());
            records.push(MoveRecord::single(source, foundation, card));
            promoted = true;
        }
        if !promoted {
            break;
        }
    }
    records
}
