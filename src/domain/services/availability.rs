use crate::domain::models::booking::Booking;
use crate::domain::models::feed::BusyInterval;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Half-open interval intersection. A slot that merely touches a busy range
/// at a boundary does not overlap it. The same formula is applied to internal
/// bookings and external events.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// UTC bounds of a calendar day in the studio timezone. `None` when either
/// midnight is ambiguous or skipped (DST transitions on exotic offsets).
pub fn day_bounds(date: NaiveDate, tz: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()?;
    let end = tz.from_local_datetime(&date.and_hms_opt(23, 59, 59)?).single()?;
    Some((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

/// Walks the working window on `date` in fixed `slot_minutes` steps and
/// returns the starts of every slot that overlaps no booking and no busy
/// interval, in chronological order.
pub fn calculate_slots(
    date: NaiveDate,
    tz: Tz,
    work_start: NaiveTime,
    work_end: NaiveTime,
    slot_minutes: i64,
    bookings: &[Booking],
    busy: &[BusyInterval],
) -> Vec<DateTime<Utc>> {
    let mut slots = Vec::new();

    if slot_minutes <= 0 {
        return slots;
    }

    let step = Duration::minutes(slot_minutes);
    let mut cursor = work_start;

    while cursor + step <= work_end {
        let local = match tz.from_local_datetime(&date.and_time(cursor)).single() {
            Some(dt) => dt,
            // Slot start falls into a DST gap; nothing bookable there.
            None => {
                cursor += step;
                continue;
            }
        };

        let slot_start = local.with_timezone(&Utc);
        let slot_end = slot_start + step;

        let blocked_by_booking = bookings
            .iter()
            .any(|b| overlaps(slot_start, slot_end, b.start_time, b.end_time));
        let blocked_by_feed = busy
            .iter()
            .any(|e| overlaps(slot_start, slot_end, e.start, e.end));

        if !blocked_by_booking && !blocked_by_feed {
            slots.push(slot_start);
        }

        cursor += step;

        // A work_end of exactly midnight would wrap cursor around.
        if cursor == NaiveTime::from_hms_opt(0, 0, 0).expect("midnight is a valid time") {
            break;
        }
    }

    slots
}
