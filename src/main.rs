/* main.rs
 *
 * Copyright 2026 emviolet
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::process::ExitCode;

use freecell_core::{Board, DropOutcome, Pile, PileId, Session};

#[derive(Debug, Clone, Default)]
struct DemoOptions {
    seed: Option<u64>,
    no_auto: bool,
}

fn parse_u64(value: Option<String>, flag: &str) -> Result<u64, String> {
    value
        .ok_or_else(|| format!("missing value for {flag}"))?
        .parse::<u64>()
        .map_err(|_| format!("invalid value for {flag}"))
}

fn parse_args(args: &[String]) -> Result<Option<DemoOptions>, String> {
    let mut idx = 1usize;
    let mut options = DemoOptions::default();

    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                options.seed = Some(parse_u64(args.get(idx + 1).cloned(), "--seed")?);
                idx += 2;
            }
            "--no-auto" => {
                options.no_auto = true;
                idx += 1;
            }
            "--help" | "-h" => {
                println!(
                    "freecell-core demo\n\
                     --seed N     deal the game with a specific seed\n\
                     --no-auto    leave safe cards on the table\n\
                     set FREECELL_LOG=debug|info|... for engine logging"
                );
                return Ok(None);
            }
            _ => {
                idx += 1;
            }
        }
    }

    Ok(Some(options))
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = match std::env::var("FREECELL_LOG").ok().as_deref() {
        Some("trace") => log::LevelFilter::Trace,
        Some("debug") => log::LevelFilter::Debug,
        Some("info") => log::LevelFilter::Info,
        Some("warn") => log::LevelFilter::Warn,
        Some("error") => log::LevelFilter::Error,
        _ => log::LevelFilter::Off,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn pile_text(pile: &Pile) -> String {
    if pile.is_empty() {
        "--".to_string()
    } else {
        pile.to_string()
    }
}

fn print_board(board: &Board) {
    let cells = board
        .cells()
        .iter()
        .map(pile_text)
        .collect::<Vec<_>>()
        .join(" | ");
    let foundations = board
        .foundations()
        .iter()
        .map(|pile| match pile.top() {
            Some(card) => card.label(),
            None => "--".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ");
    println!("Cells:       {cells}");
    println!("Foundations: {foundations}");
    for (i, column) in board.columns().iter().enumerate() {
        println!("  t{i}: {}", pile_text(column));
    }
}

/// Finds a top card with somewhere meaningful to go: a foundation first,
/// an occupied column next, a free holding cell as the fallback.
fn first_single_move(session: &Session) -> Option<(PileId, usize, PileId)> {
    let board = session.board();
    for col in 0..8 {
        let pile = &board.columns()[col];
        let Some(top) = pile.top() else {
            continue;
        };
        let source = PileId::Column(col);
        let index = pile.len() - 1;
        for f in 0..4 {
            if board.can_accept_top(PileId::Foundation(f), top) {
                return Some((source, index, PileId::Foundation(f)));
            }
        }
        for dst in 0..8 {
            if dst != col
                && !board.columns()[dst].is_empty()
                && board.can_accept_top(PileId::Column(dst), top)
            {
                return Some((source, index, PileId::Column(dst)));
            }
        }
    }
    for col in 0..8 {
        let pile = &board.columns()[col];
        if pile.is_empty() {
            continue;
        }
        for c in 0..4 {
            if board.cells()[c].is_empty() {
                return Some((PileId::Column(col), pile.len() - 1, PileId::Cell(c)));
            }
        }
    }
    None
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };
    init_logging();

    let mut session = Session::new();
    session.set_auto_advance(!options.no_auto);
    session.new_deal(options.seed);
    println!("Dealt game with seed {}", session.seed());
    print_board(session.board());

    if let Some((source, index, dst)) = first_single_move(&session) {
        if let Some(block) = session.attempt_pick_up(source, index) {
            let label = block.cards()[0].label();
            match session.attempt_drop(block, dst) {
                DropOutcome::Committed => println!("\nMoved {label} from {source} to {dst}"),
                DropOutcome::Rejected => println!("\nCould not move {label} from {source} to {dst}"),
            }
            print_board(session.board());

            let mut undone = 0;
            while session.undo() {
                undone += 1;
            }
            if undone > 0 {
                println!();
                println!("Undid {undone} move(s)");
                print_board(session.board());
            }
        }
    }

    println!();
    println!("{}", session.stats());
    ExitCode::SUCCESS
}
