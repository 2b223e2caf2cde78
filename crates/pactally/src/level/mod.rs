//! Level scoring constants.
//!
//! Every attribute of a [`Level`] is a pure function of its index, except the
//! cumulative optimal score which is a running sum over all earlier levels.
//! Levels are therefore only ever built from their predecessor, see
//! [`LevelCatalog`].

mod catalog;

pub use catalog::*;

use serde::Serialize;

/// Points for eating one power pill
pub const POWER_PILL_SCORE: u32 = 50;
/// Points for eating all four ghosts on a single power pill (200 + 400 + 800 + 1600)
pub const GHOST_CHAIN_SCORE: u32 = 3000;
/// Power pills per maze
pub const POWER_PILLS_PER_MAZE: u32 = 4;
/// Each bonus fruit is assumed to appear twice per level
pub const FRUITS_PER_LEVEL: u32 = 2;
/// Points per regular dot
pub const DOT_SCORE: u32 = 10;

/// Index used for levels that could not be parsed
pub const INVALID_LEVEL_NUM: i32 = -1;

const DOT_COUNTS: [u32; 9] = [220, 220, 240, 240, 240, 238, 238, 238, 238];
const FRUIT_SCORES: [u32; 7] = [100, 200, 500, 700, 1000, 2000, 5000];
const FRUIT_NAMES: [&str; 7] = [
    "Cherry",
    "Strawberry",
    "Orange",
    "Pretzel",
    "Apple",
    "Pear",
    "Banana",
];
const FRUIT_ABBRS: [&str; 7] = ["Ch", "St", "Or", "Pr", "Ap", "Pe", "Ba"];

/// Scoring constants for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Level {
    pub num: i32,
    pub maze: u8,
    pub dot_count: u32,
    pub fruit_score: u32,
    pub optimal_score: u32,
    pub optimal_score_cumulative: u64,
}

impl Level {
    /// Sentinel level for unparseable or missing level data
    pub const INVALID: Level = Level {
        num: INVALID_LEVEL_NUM,
        maze: 0,
        dot_count: 0,
        fruit_score: 0,
        optimal_score: 0,
        optimal_score_cumulative: 0,
    };

    /// Build the level that follows `previous`, or level 0 when there is none.
    pub(crate) fn next_after(previous: Option<&Level>) -> Level {
        let (num, carried) = match previous {
            Some(prev) => (prev.num as u32 + 1, prev.optimal_score_cumulative),
            None => (0, 0),
        };

        let maze = maze_for(num);
        let dot_count = match DOT_COUNTS.get(num as usize) {
            Some(&count) => count,
            None if maze == 2 => 238,
            None => 234,
        };
        let fruit_score = FRUIT_SCORES
            .get(num as usize)
            .copied()
            .unwrap_or(FRUIT_SCORES[FRUIT_SCORES.len() - 1]);
        let optimal_score = FRUITS_PER_LEVEL * fruit_score
            + DOT_SCORE * dot_count
            + POWER_PILLS_PER_MAZE * (POWER_PILL_SCORE + GHOST_CHAIN_SCORE);

        Level {
            num: num as i32,
            maze,
            dot_count,
            fruit_score,
            optimal_score,
            optimal_score_cumulative: carried + optimal_score as u64,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.num >= 0
    }

    /// Fruit name, with a repeat counter once the fruit cycle settles on banana
    /// (level 7 is "Banana 2").
    pub fn name(&self) -> String {
        self.label(&FRUIT_NAMES, " ")
    }

    /// Short form of [`Level::name`], e.g. "Ba2"
    pub fn abbr(&self) -> String {
        self.label(&FRUIT_ABBRS, "")
    }

    fn label(&self, names: &[&str; 7], sep: &str) -> String {
        if !self.is_valid() {
            return "-na-".to_string();
        }
        let index = (self.num as usize).min(names.len() - 1);
        if self.num > 6 {
            format!("{}{}{}", names[index], sep, self.num - 5)
        } else {
            names[index].to_string()
        }
    }
}

/// Maze layout used on a level.
///
/// Levels 9+ alternate between the last two mazes every four levels.
pub fn maze_for(num: u32) -> u8 {
    match num {
        0..=1 => 0,
        2..=4 => 1,
        5..=8 => 2,
        _ if ((num - 9) / 4) % 2 == 0 => 3,
        _ => 2,
    }
}
