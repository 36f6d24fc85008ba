//! Editorial badges derived from the `others` flags.

use crate::models::Others;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    TodayPick,
    Trending,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::TodayPick => "Today's Pick",
            Badge::Trending => "Trending",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badges to show for an item. The flags are independent, so both may be
/// present; `TodayPick` sorts first.
pub fn badges(others: &Others) -> Vec<Badge> {
    let mut out = Vec::with_capacity(2);
    if others.is_today_pick {
        out.push(Badge::TodayPick);
    }
    if others.is_trending {
        out.push(Badge::Trending);
    }
    out
}
