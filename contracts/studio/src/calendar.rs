use soroban_sdk::{Address, Vec};
use crate::types::{Date, SlotKind, TimeSlot};

pub const SECONDS_PER_HOUR: u64 = 60 * 60;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

// Days between 0000-03-01 and 1970-01-01 in the proleptic Gregorian calendar.
const EPOCH_SHIFT: u64 = 719_468;
const DAYS_PER_ERA: u64 = 146_097;

pub fn day_start(timestamp: u64) -> u64 {
    timestamp - timestamp % SECONDS_PER_DAY
}

/// UTC date containing `timestamp`, or `None` once the year no longer fits
/// in a `u32`.
pub fn date_of(timestamp: u64) -> Option<Date> {
    let z = timestamp / SECONDS_PER_DAY + EPOCH_SHIFT;
    let era = z / DAYS_PER_ERA;
    let doe = z % DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);

    Some(Date {
        year: u32::try_from(year).ok()?,
        month: month as u32,
        day: day as u32,
    })
}

/// Bookable `[start, end]` bounds on the day containing `timestamp`. `None`
/// on the final partial day of the `u64` range.
pub fn window(timestamp: u64, min_hour: u32, max_hour: u32) -> Option<(u64, u64)> {
    let midnight = day_start(timestamp);
    Some((
        midnight.checked_add(u64::from(min_hour) * SECONDS_PER_HOUR)?,
        midnight.checked_add(u64::from(max_hour) * SECONDS_PER_HOUR)?,
    ))
}

/// True if `[from, to)` intersects any booking in `schedule`.
///
/// `schedule` alternates START/END markers of disjoint bookings in timestamp
/// order, so each END closes the START just before it.
pub fn overlaps(schedule: &Vec<TimeSlot>, from: u64, to: u64) -> bool {
    let mut start = 0;
    for slot in schedule.iter() {
        match slot.kind {
            SlotKind::Start => start = slot.timestamp,
            SlotKind::End => {
                if from < slot.timestamp && start < to {
                    return true;
                }
            }
        }
    }
    false
}

/// Insert the START/END pair for `[from, to)`. The interval must already be
/// known not to overlap anything in `schedule`.
pub fn insert_booking(schedule: &mut Vec<TimeSlot>, master: &Address, from: u64, to: u64) {
    let mut index = schedule.len();
    for (i, slot) in schedule.iter().enumerate() {
        if slot.timestamp > from {
            index = i as u32;
            break;
        }
    }

    schedule.insert(
        index,
        TimeSlot {
            timestamp: from,
            master: master.clone(),
            kind: SlotKind::Start,
        },
    );
    schedule.insert(
        index + 1,
        TimeSlot {
            timestamp: to,
            master: master.clone(),
            kind: SlotKind::End,
        },
    );
}
