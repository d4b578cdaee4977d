// Local-time rendering for post timestamps

use chrono::{DateTime, Local, TimeZone};

const POST_TIME_FORMAT: &str = "%b %-d, %Y %-I:%M:%S";

/// Formats Unix seconds in the process time zone (honours `TZ`),
/// e.g. `Mar 4, 2023 1:05:09`. Out-of-range values are rendered raw.
pub fn format_time(timestamp: i64) -> String {
    format_time_in(&Local, timestamp)
}

pub fn format_time_in<Tz>(tz: &Tz, timestamp: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(datetime) => render(datetime),
        None => timestamp.to_string(),
    }
}

fn render<Tz>(datetime: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(POST_TIME_FORMAT).to_string()
}
