use std::collections::HashMap;
use std::fmt;

/// Win/loss bookkeeping across deals. The persistence collaborator stores
/// and restores this aggregate opaquely through the text codec; the win
/// rate is always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    total_games: u32,
    total_wins: u32,
    current_streak: u32,
    longest_streak: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game_started(&mut self) {
        self.total_games += 1;
    }

    pub fn record_win(&mut self) {
        self.total_wins += 1;
        self.current_streak += 1;
        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }
    }

    pub fn reset_current_streak(&mut self) {
        self.current_streak = 0;
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn win_rate_percent(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.total_wins) * 100.0 / f64::from(self.total_games)
    }

    pub fn encode(&self) -> String {
        format!(
            "v=1\ngames={}\nwins={}\nstreak={}\nbest={}",
            self.total_games, self.total_wins, self.current_streak, self.longest_streak,
        )
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let mut fields = HashMap::<&str, &str>::new();
        for line in raw.lines() {
            let (key, value) = line.split_once('=')?;
            fields.insert(key.trim(), value.trim());
        }

        if *fields.get("v")? != "1" {
            return None;
        }
        let total_games = fields.get("games")?.parse::<u32>().ok()?;
        let total_wins = fields.get("wins")?.parse::<u32>().ok()?;
        let current_streak = fields.get("streak")?.parse::<u32>().ok()?;
        let longest_streak = fields.get("best")?.parse::<u32>().ok()?;
        if total_wins > total_games || current_streak > longest_streak {
            return None;
        }
        Some(Self {
            total_games,
            total_wins,
            current_streak,
            longest_streak,
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Games: {}", self.total_games)?;
        writeln!(f, "Number of Wins: {}", self.total_wins)?;
        writeln!(f, "Win Rate: {:.2}%", self.win_rate_percent())?;
        writeln!(f, "Current Win Streak: {}", self.current_streak)?;
        write!(f, "Longest Win Streak: {}", self.longest_streak)
    }
}
