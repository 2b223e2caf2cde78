use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A run of consecutive days with at least one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Streak {
    /// One-day streak on `day`
    pub fn starting(day: NaiveDate) -> Self {
        Self {
            start: Some(day),
            end: Some(day),
        }
    }

    /// Days in the streak, 0 when empty
    pub fn length(&self) -> u32 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (end - start).num_days() as u32 + 1,
            _ => 0,
        }
    }

    /// The streak already includes `today`
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.end == Some(today)
    }

    /// The streak ended yesterday and breaks unless a game is played today
    pub fn is_at_risk(&self, today: NaiveDate) -> bool {
        self.end.is_some() && self.end == today.checked_sub_days(Days::new(1))
    }

    fn is_followed_by(&self, day: NaiveDate) -> bool {
        self.end
            .and_then(|end| end.checked_add_days(Days::new(1)))
            .is_some_and(|next| next == day)
    }
}

/// The streak containing the latest played day and the longest ever
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub recent: Streak,
    pub longest: Streak,
}

impl Streaks {
    /// Fold over played days. Days are sorted and deduplicated first.
    ///
    /// Equal-length streaks keep the earlier one as the longest.
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut days: Vec<NaiveDate> = days.into_iter().collect();
        days.sort_unstable();
        days.dedup();

        let mut running = Streak::default();
        let mut longest = Streak::default();
        for day in days {
            if running.is_followed_by(day) {
                running.end = Some(day);
            } else {
                running = Streak::starting(day);
            }
            if running.length() > longest.length() {
                longest = running;
            }
        }

        Self {
            recent: running,
            longest,
        }
    }
}
