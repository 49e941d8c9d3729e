use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::COUNTDOWN_TICK_MS;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

/// Whole days, hours, minutes and seconds from `now` until `target`.
/// Everything reads zero once the target has passed.
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return TimeLeft::default();
    }
    TimeLeft {
        days: diff / MS_PER_DAY,
        hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

/// Remaining time until `target`, refreshed every tick while the calling
/// component is mounted. The interval is dropped on unmount.
#[hook]
pub fn use_countdown(target: Option<DateTime<Utc>>) -> TimeLeft {
    let left = use_state(|| target.map(|t| time_left(t, Utc::now())).unwrap_or_default());

    {
        let left = left.clone();
        use_effect_with_deps(
            move |target| {
                let interval = target.map(|target| {
                    left.set(time_left(target, Utc::now()));
                    Interval::new(COUNTDOWN_TICK_MS, move || {
                        left.set(time_left(target, Utc::now()));
                    })
                });
                move || drop(interval)
            },
            target,
        );
    }

    *left
}
