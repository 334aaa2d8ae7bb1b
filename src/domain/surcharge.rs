//! Time-of-day surcharge window

use chrono::NaiveTime;

/// Daily interval during which the after-3 PM rate applies.
///
/// `start` is inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurchargeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl SurchargeWindow {
    /// Returns `None` unless `start` is strictly before `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn applies_at(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl Default for SurchargeWindow {
    /// 15:00 to 21:00
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN + chrono::Duration::hours(15),
            end: NaiveTime::MIN + chrono::Duration::hours(21),
        }
    }
}
