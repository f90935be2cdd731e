//! Where "now" comes from. The check pass asks a `Clock` once per run, so
//! tests can pin time with `FixedClock` instead of racing the wall clock.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time with the offset dropped.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always answers with the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at;

    #[test]
    fn test_fixed_clock_does_not_move() {
        let clock = FixedClock(at("2026-10-19 12:00"));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), at("2026-10-19 12:00"));
    }

    #[test]
    fn test_local_clock_is_monotonic_enough() {
        let clock = LocalClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
