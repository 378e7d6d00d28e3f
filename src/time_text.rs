// Short, chat-list style timestamps.
//
// The date part shrinks as the timestamp gets closer to `now`:
//   other year  -> "yy/MM/dd HH:MM PM"
//   other day   -> "MM/dd HH:MM PM"
//   today       -> "HH:MM PM"
// Exactly 00:00 and 12:00 read "Midnight" and "Noon" instead of AM/PM.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

pub fn time_to_text<Tz: TimeZone>(time: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let same_year = time.year() == now.year();
    let same_day = same_year && time.month() == now.month() && time.day() == now.day();

    let mut date_parts = Vec::with_capacity(3);
    if !same_year {
        date_parts.push(format!("{:02}", time.year().rem_euclid(100)));
    }
    if !same_day {
        date_parts.push(format!("{:02}", time.month()));
        date_parts.push(format!("{:02}", time.day()));
    }

    let (hour, minute) = (time.hour(), time.minute());
    let period = match (hour, minute) {
        (0, 0) => "Midnight",
        (12, 0) => "Noon",
        (h, _) if h >= 12 => "PM",
        _ => "AM",
    };

    let clock = format!("{hour:02}:{minute:02} {period}");
    if date_parts.is_empty() {
        clock
    } else {
        format!("{} {clock}", date_parts.join("/"))
    }
}

/// Formats epoch milliseconds in the local time zone. `None` if out of range.
pub fn time_to_text_local(timestamp_millis: i64) -> Option<String> {
    let time = DateTime::from_timestamp_millis(timestamp_millis)?.with_timezone(&Local);
    Some(time_to_text(&time, &Local::now()))
}
