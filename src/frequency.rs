//! Sliding-window frequency detection over event timestamps.
//!
//! Events are taken in arrival order. A ring buffer of `max_count` slots holds
//! the most recent timestamps; before an event is written to its slot, it is
//! compared against the event `max_count` positions earlier. If the two are at
//! most `window_minutes` apart, more than `max_count` events fell inside the
//! window and the scan stops.
//!
//! Differences are measured in whole minutes, truncated toward zero, and the
//! window is inclusive.

use chrono::{DateTime, Utc};

pub fn exceeds(events: &[DateTime<Utc>], max_count: usize, window_minutes: i64) -> bool {
    if max_count == 0 || events.len() < max_count {
        return false;
    }

    // `None` never matches, so the first `max_count` events only fill the ring.
    let mut ring: Vec<Option<DateTime<Utc>>> = vec![None; max_count];

    for (index, &time) in events.iter().enumerate() {
        let slot = index % max_count;
        if let Some(oldest) = ring[slot] {
            if time.signed_duration_since(oldest).num_minutes().abs() <= window_minutes {
                return true;
            }
        }
        ring[slot] = Some(time);
    }

    false
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 10, 1, hour, minute, second).unwrap()
    }

    fn every_ten_minutes() -> Vec<DateTime<Utc>> {
        vec![at(5, 0, 0), at(5, 10, 0), at(5, 20, 0), at(5, 30, 0), at(5, 40, 0)]
    }

    #[test]
    fn allows_fewer_events_than_max() {
        let events = vec![at(9, 0, 0), at(9, 1, 0), at(9, 1, 30)];
        assert!(!exceeds(&events, 10, 10));
    }

    #[test]
    fn allows_spread_out_events() {
        assert!(!exceeds(&every_ten_minutes(), 2, 5));
    }

    #[test]
    fn detects_too_many_events() {
        assert!(exceeds(&every_ten_minutes(), 2, 30));
    }

    #[test]
    fn detects_when_last_event_is_the_offender() {
        assert!(exceeds(&every_ten_minutes(), 4, 60));
    }

    #[test]
    fn allows_exactly_max_events() {
        let events = vec![at(5, 0, 0), at(5, 1, 0), at(5, 2, 0)];
        assert!(!exceeds(&events, 3, 2));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let events = vec![at(9, 0, 0), at(9, 0, 30), at(9, 1, 30), at(9, 2, 0)];
        assert!(exceeds(&events, 3, 2));

        let events = vec![at(9, 0, 0), at(9, 0, 30), at(9, 1, 30), at(9, 3, 0)];
        assert!(!exceeds(&events, 3, 2));
    }

    #[test]
    fn partial_minutes_are_truncated() {
        // 2m59s counts as 2 minutes.
        let events = vec![at(9, 0, 0), at(9, 2, 59)];
        assert!(exceeds(&events, 1, 2));
    }

    #[test]
    fn uses_arrival_order_not_chronological_order() {
        // Fourth event is compared with the first, which is two minutes later in time.
        let events = vec![at(9, 2, 0), at(9, 30, 0), at(9, 40, 0), at(9, 0, 0)];
        assert!(exceeds(&events, 3, 2));

        // Sorted, the same timestamps never put three in a row inside the window.
        let mut sorted = events.clone();
        sorted.sort();
        assert!(!exceeds(&sorted, 3, 2));
    }

    #[test]
    fn invariant_under_time_shift() {
        let events = vec![at(9, 0, 0), at(9, 0, 30), at(9, 1, 30), at(9, 2, 0), at(9, 7, 0)];
        for shift in [Duration::days(-400), Duration::seconds(17), Duration::weeks(52)] {
            let shifted: Vec<_> = events.iter().map(|time| *time + shift).collect();
            assert_eq!(exceeds(&events, 3, 2), exceeds(&shifted, 3, 2));
            assert_eq!(exceeds(&events, 2, 1), exceeds(&shifted, 2, 1));
        }
    }

    #[test]
    fn zero_max_count_never_exceeds() {
        assert!(!exceeds(&every_ten_minutes(), 0, 60));
        assert!(!exceeds(&[], 0, 60));
    }
}
