//! The single live game session the input collaborator drives.
//!
//! All mutating operations funnel through here: dealing, picking a
//! selection up, dropping it, undoing, and the auto-advance sweep that
//! follows committed drops. The session owns the board, the history log
//! and the statistics aggregate; callers never mutate piles directly.

use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;

use crate::game::{Block, Board, EngineError, PileId};

use super::foundation_safety::advance_safe_cards;
use super::moves::MoveRecord;
use super::stats::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Committed,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    moves: Vec<MoveRecord>,
    stats: Statistics,
    seed: u64,
    auto_advance: bool,
    playing: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            moves: Vec::new(),
            stats: Statistics::new(),
            seed: 0,
            auto_advance: true,
            playing: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn can_undo(&self) -> bool {
        self.playing && !self.moves.is_empty()
    }

    /// Starts a fresh game. Dealing over a live game abandons it, which
    /// breaks the current win streak.
    pub fn new_deal(&mut self, seed: Option<u64>) {
        if self.playing {
            self.stats.reset_current_streak();
        }
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        self.board = Board::new_with_seed(seed);
        self.moves.clear();
        self.seed = seed;
        self.playing = true;
        self.stats.record_game_started();
        self.board.debug_check_counters();
        info!("new deal, seed {seed}");
    }

    /// Lifts a selection when pick-up legality allows it: the single card
    /// of a holding cell, or a column suffix inside the top orderable run.
    /// Returns `None` (leaving the board untouched) otherwise.
    pub fn attempt_pick_up(&mut self, pile: PileId, index: usize) -> Option<Block> {
        if !self.playing {
            return None;
        }
        if !self.board.can_pick_up_at(pile, index) {
            return None;
        }
        let cards = match pile {
            PileId::Column(col) => self.board.lift_run(col, index).ok()?,
            PileId::Cell(_) => vec![self.board.take_top(pile).ok()?],
            PileId::Foundation(_) => return None,
        };
        self.board.debug_check_counters();
        Some(Block::new(pile, cards))
    }

    /// Non-mutating twin of [`Session::attempt_pick_up`].
    pub fn can_pick_up(&self, pile: PileId, index: usize) -> bool {
        self.playing && self.board.can_pick_up_at(pile, index)
    }

    /// Drops a lifted selection onto `dst`. On rejection the cards return
    /// to their source pile unchanged. Dropping back onto the source
    /// commits without a history record when the placement is legal.
    /// Committed drops run the auto-advance sweep and the win check.
    pub fn attempt_drop(&mut self, block: Block, dst: PileId) -> DropOutcome {
        match self.commit_drop(block, dst) {
            Ok(()) => DropOutcome::Committed,
            Err((block, err)) => {
                debug!("drop on {dst} rejected: {err}");
                self.restore(block);
                DropOutcome::Rejected
            }
        }
    }

    /// Puts a lifted selection back where it came from, recording nothing
    /// and sweeping nothing (the released-over-nothing path).
    pub fn cancel_pick_up(&mut self, block: Block) {
        self.restore(block);
    }

    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Unwinds the most recent history record. Refuses when no game is
    /// live or the log is empty. Undo never triggers the sweep, otherwise
    /// an undone promotion would immediately re-promote.
    pub fn try_undo(&mut self) -> Result<(), EngineError> {
        if !self.playing || self.moves.is_empty() {
            return Err(EngineError::CorruptHistory);
        }
        let Some(record) = self.moves.last().cloned() else {
            return Err(EngineError::CorruptHistory);
        };
        record.revert_on(&mut self.board)?;
        self.moves.pop();
        self.board.debug_check_counters();
        debug!("undid {} card(s) from {}", record.unit_len(), record.to);
        Ok(())
    }

    fn commit_drop(&mut self, block: Block, dst: PileId) -> Result<(), (Block, EngineError)> {
        if !self.playing {
            return Err((block, EngineError::IllegalMove));
        }
        if !block.can_place_on(&self.board, dst) {
            return Err((block, EngineError::IllegalMove));
        }

        let source = block.source();
        let cards = block.into_cards();
        debug!("moving {} card(s) from {source} to {dst}", cards.len());
        if dst == source {
            self.board.place_run(source, cards);
        } else if cards.len() == 1 {
            self.moves.push(MoveRecord::single(source, dst, cards[0]));
            self.board.place_card(dst, cards[0]);
        } else {
            self.moves.push(MoveRecord::run(source, dst, cards.clone()));
            self.board.place_run(dst, cards);
        }

        if self.auto_advance {
            let promoted = advance_safe_cards(&mut self.board);
            self.moves.extend(promoted);
        }
        self.board.debug_check_counters();
        self.check_win();
        Ok(())
    }

    fn restore(&mut self, block: Block) {
        let source = block.source();
        self.board.place_run(source, block.into_cards());
        self.board.debug_check_counters();
    }

    fn check_win(&mut self) {
        if self.playing && self.board.is_won() {
            self.stats.record_win();
            self.playing = false;
            info!("game won, seed {}, {} moves", self.seed, self.moves.len());
        }
    }

    pub fn encode_session(&self) -> String {
        format!(
            "v=1\nseed={}\nauto={}\nplaying={}\nboard={}",
            self.seed,
            if self.auto_advance { 1 } else { 0 },
            if self.playing { 1 } else { 0 },
            self.board.encode_for_session(),
        )
    }

    /// Restores a session persisted by [`Session::encode_session`]. The
    /// history log and statistics are runtime state and come back empty;
    /// the collaborator reinstates statistics through their own codec.
    pub fn decode_session(raw: &str) -> Option<Session> {
        let mut fields = HashMap::<&str, &str>::new();
        for line in raw.lines() {
            let (key, value) = line.split_once('=')?;
            fields.insert(key.trim(), value.trim());
        }

        if *fields.get("v")? != "1" {
            return None;
        }
        let seed = fields.get("seed")?.parse::<u64>().ok()?;
        let auto_advance = match *fields.get("auto")? {
            "1" => true,
            "0" => false,
            _ => return None,
        };
        let playing = match *fields.get("playing")? {
            "1" => true,
            "0" => false,
            _ => return None,
        };
        let board = Board::decode_from_session(fields.get("board")?)?;
        Some(Session {
            board,
            moves: Vec::new(),
            stats: Statistics::new(),
            seed,
            auto_advance,
            playing,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Session {
    /// Builds a live session around an arbitrary board.
    pub(crate) fn debug_new(board: Board) -> Session {
        Session {
            board,
            moves: Vec::new(),
            stats: Statistics::new(),
            seed: 0,
            auto_advance: true,
            playing: true,
        }
    }
}
