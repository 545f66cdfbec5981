//! Game score calculators and the high score table.

use primer_common::{InputError, Result};

/// Bonus added to every finished game.
pub const DEFAULT_COMPLETION_BONUS: i32 = 2000;

/// Points a player earns per scored point in [`player_points`].
const POINTS_MULTIPLIER: i64 = 1000;

/// The state of a game at the moment its score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub game_over: bool,
    pub score: i32,
    pub levels_completed: i32,
    pub bonus: i32,
    /// Flat amount added once the game is over.
    pub completion_bonus: i32,
}

impl Round {
    pub fn new(game_over: bool, score: i32, levels_completed: i32, bonus: i32) -> Self {
        Self {
            game_over,
            score,
            levels_completed,
            bonus,
            completion_bonus: DEFAULT_COMPLETION_BONUS,
        }
    }

    pub fn with_completion_bonus(mut self, completion_bonus: i32) -> Self {
        self.completion_bonus = completion_bonus;
        self
    }
}

/// Final score of a finished game: `score + levels * bonus + completion bonus`.
pub fn calculate_score(round: &Round) -> Result<i64> {
    if !round.game_over {
        return Err(InputError::GameNotOver);
    }
    Ok(i64::from(round.score)
        + i64::from(round.levels_completed) * i64::from(round.bonus)
        + i64::from(round.completion_bonus))
}

/// Position on the high score table: 1 for 1000+, 2 for 500+, 3 for 100+, 4 otherwise.
pub fn high_score_position(player_score: i32) -> i32 {
    match player_score {
        1000.. => 1,
        500..=999 => 2,
        100..=499 => 3,
        _ => 4,
    }
}

pub fn high_score_message(player_name: &str, position: i32) -> String {
    format!("{player_name} managed to get into position {position} on the high score table.")
}

/// A score entry where both the player and the score may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: Option<String>,
    pub score: Option<i32>,
}

impl PlayerScore {
    pub fn named(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: Some(name.into()),
            score: Some(score),
        }
    }

    pub fn anonymous(score: i32) -> Self {
        Self {
            name: None,
            score: Some(score),
        }
    }

    /// One line describing who scored what.
    pub fn summary(&self) -> String {
        match (&self.name, self.score) {
            (Some(name), Some(score)) => format!("Player:{name}   score:{score} point"),
            (None, Some(score)) => format!("Unnamed player scored:{score} point"),
            (Some(name), None) => format!("Player:{name} has no score"),
            (None, None) => "No player name, no player score".to_string(),
        }
    }
}

/// Points for an entry: a thousand per scored point, nothing without a score.
pub fn player_points(entry: &PlayerScore) -> i64 {
    entry
        .score
        .map_or(0, |score| i64::from(score) * POINTS_MULTIPLIER)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
