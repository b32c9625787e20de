// --- File: crates/slotwise_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// A fixed-date public holiday, e.g. `{ month = 5, day = 1 }` for May 1st.
///
/// The engine skips these days entirely when scanning for free gaps.
/// Movable feasts (Easter and friends) are out of scope; deployments that
/// care can list the resolved dates for the year they search in.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDate {
    pub month: u32,
    pub day: u32,
}

/// Scheduling rule tables and scheduling constants.
///
/// Observed deployments disagree on buffer sizes and on which labels block a
/// full day, so every knob here is configuration with a serde default rather
/// than a hardcoded rule. Overridable per deployment via the config file or
/// `APP_SCHEDULE__*` environment variables.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    /// IANA timezone name used for civil-day and work-hour logic.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Margin added on both sides of every timed meeting, in minutes.
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: i64,

    /// Busy intervals abutting within this many minutes are merged.
    #[serde(default = "default_merge_tolerance_minutes")]
    pub merge_tolerance_minutes: i64,

    /// Default working window, local hours. Callers may override per search.
    #[serde(default = "default_workday_start_hour")]
    pub workday_start_hour: u32,
    #[serde(default = "default_workday_end_hour")]
    pub workday_end_hour: u32,

    /// Labels dropped entirely, case-insensitive exact match.
    #[serde(default = "default_ignore_titles")]
    pub ignore_titles: Vec<String>,

    /// All-day labels that block the whole day, case-insensitive exact match.
    #[serde(default = "default_block_day_titles")]
    pub block_day_titles: Vec<String>,

    /// Keywords that block the whole day when an all-day label contains them.
    #[serde(default = "default_block_day_keywords")]
    pub block_day_keywords: Vec<String>,

    /// Fixed-date public holidays, skipped like weekends.
    #[serde(default = "default_holidays")]
    pub holidays: Vec<HolidayDate>,
}

fn default_time_zone() -> String {
    "Europe/Stockholm".to_string()
}

fn default_buffer_minutes() -> i64 {
    5
}

fn default_merge_tolerance_minutes() -> i64 {
    1
}

fn default_workday_start_hour() -> u32 {
    9
}

fn default_workday_end_hour() -> u32 {
    17
}

fn default_ignore_titles() -> Vec<String> {
    ["focus", "home", "lunch"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_block_day_titles() -> Vec<String> {
    [
        "public holiday",
        "school closed",
        "ooo",
        "national holiday",
        "summer gathering",
        "spring term ends",
        "parental leave",
        "event",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_block_day_keywords() -> Vec<String> {
    [
        "holiday",
        "vacation",
        "out of office",
        "ooo",
        "gathering",
        "event",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_holidays() -> Vec<HolidayDate> {
    // Swedish fixed-date public holidays.
    [
        (1, 1),
        (1, 6),
        (5, 1),
        (6, 6),
        (12, 24),
        (12, 25),
        (12, 26),
        (12, 31),
    ]
    .into_iter()
    .map(|(month, day)| HolidayDate { month, day })
    .collect()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            buffer_minutes: default_buffer_minutes(),
            merge_tolerance_minutes: default_merge_tolerance_minutes(),
            workday_start_hour: default_workday_start_hour(),
            workday_end_hour: default_workday_end_hour(),
            ignore_titles: default_ignore_titles(),
            block_day_titles: default_block_day_titles(),
            block_day_keywords: default_block_day_keywords(),
            holidays: default_holidays(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub schedule: ScheduleConfig,
}
