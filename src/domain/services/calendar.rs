use crate::domain::models::booking::Booking;
use crate::domain::models::feed::BusyInterval;
use crate::error::AppError;
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{
    Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime,
    Event as IcalEvent, EventLike,
};

/// Serializes a confirmed booking into a single-VEVENT iCalendar payload.
pub fn confirmation_ics(booking: &Booking, summary: &str, location: &str) -> String {
    let mut calendar = Calendar::new();

    let event = IcalEvent::new()
        .summary(summary)
        .description(booking.note.as_deref().unwrap_or(""))
        .location(location)
        .starts(booking.start_time)
        .ends(booking.end_time)
        .uid(&booking.id)
        .done();

    calendar.push(event);
    calendar.to_string()
}

/// Parses a raw iCalendar document into the busy intervals that intersect
/// `[day_start, day_end)`. Events that cannot be resolved to a concrete UTC
/// range are skipped; floating times are read in the studio timezone.
pub fn busy_intervals_from_ics(
    raw: &str,
    tz: Tz,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> Result<Vec<BusyInterval>, AppError> {
    let calendar: Calendar = raw
        .parse()
        .map_err(|e| AppError::Upstream(format!("Feed parse error: {e}")))?;

    let mut intervals = Vec::new();

    for component in &calendar.components {
        let CalendarComponent::Event(event) = component else {
            continue;
        };
        let Some(start_raw) = event.get_start() else {
            continue;
        };
        let all_day = matches!(start_raw, DatePerhapsTime::Date(_));
        let Some(start) = resolve_utc(start_raw, tz) else {
            continue;
        };
        let end = match event.get_end().and_then(|e| resolve_utc(e, tz)) {
            Some(end) => end,
            // RFC 5545: a DATE start without DTEND lasts one day; a
            // DATE-TIME start without DTEND has zero duration.
            None if all_day => start + Duration::days(1),
            None => continue,
        };

        if start < end && start < day_end && end > day_start {
            intervals.push(BusyInterval { start, end });
        }
    }

    Ok(intervals)
}

fn resolve_utc(value: DatePerhapsTime, tz: Tz) -> Option<DateTime<Utc>> {
    match value {
        DatePerhapsTime::Date(date) => tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(utc) => Some(utc),
            CalendarDateTime::Floating(naive) => tz
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                let event_tz: Tz = tzid.parse().ok()?;
                event_tz
                    .from_local_datetime(&date_time)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc))
            }
        },
    }
}
