use chrono::{DateTime, Local, TimeZone};

use crate::model::EarthquakeRecord;
use crate::utils::{escape_html, format_number};

const TSUNAMI_LINE: &str = "<strong>Tsunami:</strong> Warning Issued<br>";

/// Popup markup for one record.
///
/// The time is pre-rendered in the zone of the process building the page and
/// wrapped in `<time data-epoch-ms>`, so the browser script can re-localize it
/// to the viewer's zone when the popup opens. A standalone page opened on
/// another machine therefore shows the viewer's time, not the author's.
pub fn format_popup(record: &EarthquakeRecord) -> String {
    format_popup_in(record, &Local)
}

pub fn format_popup_in<Tz>(record: &EarthquakeRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut lines = vec![
        format!("<strong>Location:</strong> {}<br>", escape_html(&record.place)),
        format!("<strong>Magnitude:</strong> {}<br>", format_number(record.magnitude)),
        // Raw third coordinate, not the bucketed color
        format!("<strong>Depth:</strong> {} km<br>", format_number(record.depth_km)),
        format!("<strong>Time:</strong> {}<br>", time_markup(record.time, tz)),
        format!("<strong>Status:</strong> {}<br>", escape_html(&record.status)),
    ];
    if record.tsunami {
        lines.push(TSUNAMI_LINE.to_string());
    }
    lines.push(format!(
        r#"<a href="{}" target="_blank">More details</a>"#,
        escape_html(&record.url)
    ));
    lines.join("\n")
}

fn time_markup<Tz>(epoch_millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let formatted = format_event_time(epoch_millis, tz);
    if DateTime::from_timestamp_millis(epoch_millis).is_none() {
        return formatted;
    }
    format!(
        r#"<time data-epoch-ms="{}">{}</time>"#,
        epoch_millis, formatted
    )
}

/// Epoch milliseconds as `M/D/YYYY, h:mm:ss AM`, the en-US locale layout.
pub fn format_event_time<Tz>(epoch_millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}
