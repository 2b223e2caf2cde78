use tracing::{debug, warn};

use super::Level;

/// Number of levels computed up front by [`LevelCatalog::new`]
pub const DEFAULT_MAX_LEVEL: u32 = 255;
/// Indices above this are treated as corrupt data rather than grown into
pub const LEVEL_LIMIT: u32 = 9_999;

/// Precomputed table of [`Level`] values.
///
/// The table only grows by appending the level after the current last one,
/// so each cumulative optimal score is derived from an already-final
/// predecessor and no level is ever computed twice.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Catalog covering levels `0..=DEFAULT_MAX_LEVEL`
    pub fn new() -> Self {
        Self::with_max_level(DEFAULT_MAX_LEVEL)
    }

    pub fn with_max_level(max_level: u32) -> Self {
        let max_level = max_level.min(LEVEL_LIMIT);
        let mut catalog = Self {
            levels: Vec::with_capacity(max_level as usize + 1),
        };
        catalog.extend_to(max_level);
        debug!("Level catalog built with {} levels", catalog.len());
        catalog
    }

    /// Look up a computed level.
    pub fn get(&self, num: i32) -> Option<&Level> {
        usize::try_from(num).ok().and_then(|i| self.levels.get(i))
    }

    /// Resolve a level index, growing the table when needed.
    ///
    /// Negative indices and indices above [`LEVEL_LIMIT`] resolve to
    /// [`Level::INVALID`].
    pub fn level(&mut self, num: i32) -> Level {
        let Ok(index) = u32::try_from(num) else {
            return Level::INVALID;
        };
        if index > LEVEL_LIMIT {
            warn!("Level {} exceeds the supported range, treating as invalid", num);
            return Level::INVALID;
        }
        self.extend_to(index);
        self.levels[index as usize]
    }

    /// Compute every missing level up to and including `num`.
    pub fn extend_to(&mut self, num: u32) {
        while self.levels.len() <= num as usize {
            let next = Level::next_after(self.levels.last());
            debug_assert_eq!(next.num as usize, self.levels.len());
            self.levels.push(next);
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new()
    }
}
