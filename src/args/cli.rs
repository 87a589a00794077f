use chrono::{NaiveDate, NaiveTime};
use clap::Parser;

use super::parsers::{parse_date_arg, parse_positive_u32, parse_positive_u64, parse_time_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal timetable for festival performances - venue grid on a 13:00-02:30 window, live time cursor, and a quick-entry admin form."
)]
pub struct PodiumArgs {
    /// Path to a podium.toml or podium.json config file
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Festival day to open (YYYY-MM-DD); defaults to the first day
    #[arg(long, short = 'd', value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Start of the display window (HH:MM)
    #[arg(long = "window-start", value_parser = parse_time_arg)]
    pub window_start: Option<NaiveTime>,

    /// Length of the display window in minutes
    #[arg(long = "window-minutes", value_parser = parse_positive_u32)]
    pub window_minutes: Option<u32>,

    /// Seconds between clock ticks that refresh the current-time cursor
    #[arg(long = "tick-secs", value_parser = parse_positive_u64)]
    pub tick_secs: Option<u64>,

    /// Skip the startup splash screen
    #[arg(long = "no-splash")]
    pub no_splash: bool,

    /// Disable colors
    #[arg(long = "no-color", env = "NO_COLOR")]
    pub no_color: bool,

    /// Verbose logging (debug level)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
