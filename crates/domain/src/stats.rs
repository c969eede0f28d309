use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blocking counters persisted alongside the rest of the settings.
///
/// `blocks_today` resets on a calendar-date string comparison, not a
/// rolling 24 h window: the reset lands at whatever local midnight the
/// caller's `today` string rolls over on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStats {
    pub blocks_today: u64,
    pub total_blocks: u64,
    pub focus_streak: u64,
    pub last_block_date: Option<String>,
}

impl BlockStats {
    /// Records one confirmed block. `today` is a `%Y-%m-%d` date string.
    pub fn record_block(&mut self, today: &str) {
        if self.last_block_date.as_deref() == Some(today) {
            self.blocks_today += 1;
        } else {
            self.focus_streak = if self.blocked_yesterday(today) {
                self.focus_streak + 1
            } else {
                1
            };
            self.blocks_today = 1;
        }
        self.total_blocks += 1;
        self.last_block_date = Some(today.to_string());
    }

    fn blocked_yesterday(&self, today: &str) -> bool {
        let Some(last) = self.last_block_date.as_deref() else {
            return false;
        };
        match (
            NaiveDate::parse_from_str(last, "%Y-%m-%d"),
            NaiveDate::parse_from_str(today, "%Y-%m-%d"),
        ) {
            (Ok(last), Ok(today)) => (today - last).num_days() == 1,
            _ => false,
        }
    }
}
