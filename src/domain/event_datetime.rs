use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Event date must be in the future")]
    NotInFuture,
    #[error("Event date `{0}` is not a valid date and time")]
    Malformed(String),
}

/// Turns the date-time field into Unix seconds. A blank field is allowed and
/// yields `None`; anything else must name a local time strictly after `now`.
pub fn parse_event_datetime<Tz: TimeZone>(
    input: &str,
    now: &DateTime<Tz>,
) -> Result<Option<i64>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let naive = FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| ValidationError::Malformed(input.to_string()))?;
    // Ambiguous times (DST fall-back) take the earlier instant; skipped ones are rejected.
    let when = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ValidationError::Malformed(input.to_string()))?;

    if when.timestamp() <= now.timestamp() {
        return Err(ValidationError::NotInFuture);
    }
    Ok(Some(when.timestamp()))
}
