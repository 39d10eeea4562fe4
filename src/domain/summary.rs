use chrono::{Local, TimeZone};

/// What the confirmation card shows after an event is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub title: String,
    pub event_datetime: Option<i64>,
    pub location: String,
}

impl EventSummary {
    pub fn new(title: impl Into<String>, event_datetime: Option<i64>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            event_datetime,
            location: location.into(),
        }
    }

    /// Local rendering of the timestamp, e.g. `10/19/2026, 3:05:00 PM`.
    pub fn date_line(&self) -> Option<String> {
        let secs = self.event_datetime?;
        Local
            .timestamp_opt(secs, 0)
            .single()
            .map(|when| when.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        lines.extend(self.date_line());
        lines.push(self.location.clone());
        lines
    }
}
