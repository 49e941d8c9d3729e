use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use log::Level;

pub const PROGRAM_NAME: &str = "ProductXcelerator";
pub const ORGANIZER: &str = "AIC RAISE";

/// Registration steps in the wizard.
pub const TOTAL_STEPS: u8 = 13;
/// Team size including the leader.
pub const MAX_TEAM_MEMBERS: usize = 6;

pub const COUNTDOWN_TICK_MS: u32 = 1_000;
pub const TOAST_DURATION_MS: u32 = 5_000;

pub const REGISTRATION_DEADLINE: &str = "September 30, 2025";
pub const EVENT_DATE: &str = "October 19, 2025";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://productxcelerator.aicraise.com"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Program kick-off, midnight India Standard Time.
pub fn event_start() -> Option<DateTime<Utc>> {
    let naive = NaiveDate::from_ymd_opt(2025, 10, 19)?.and_hms_opt(0, 0, 0)?;
    Kolkata
        .from_local_datetime(&naive)
        .single()
        .map(|start| start.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_start_is_midnight_in_india() {
        let start = event_start().expect("valid event date");
        assert_eq!(start.to_rfc3339(), "2025-10-18T18:30:00+00:00");
    }
}
