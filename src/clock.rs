//! Real-time clock collaborator.
//!
//! The panel's RTC hands back raw calendar registers. [`ClockReading`] keeps
//! them exactly as read, without validation, so the date tile can decide how
//! to present an out-of-range weekday or month instead of the clock layer
//! silently correcting it.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Raw date and time registers from the RTC.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClockReading {
    pub year: i32,
    /// 1 = January through 12 = December.
    pub month: u8,
    pub day: u8,
    /// 0 = Sunday through 6 = Saturday.
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl From<NaiveDateTime> for ClockReading {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            weekday: dt.weekday().num_days_from_sunday() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }
}

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> ClockReading;
}

impl<C> Clock for Box<C>
where
    C: Clock + ?Sized,
{
    fn now(&self) -> ClockReading { (**self).now() }
}

/// Host clock backed by the system's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading { ClockReading::from(Local::now().naive_local()) }
}

/// A clock frozen at one reading. Used by tests and the simulator's `--at` option.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub ClockReading);

impl Clock for FixedClock {
    fn now(&self) -> ClockReading { self.0 }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_from_naive_datetime() {
        // 19 Oct 2026 is a Monday
        let dt = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(21, 5, 9))
            .expect("valid date");
        let reading = ClockReading::from(dt);
        assert_eq!(reading.year, 2026);
        assert_eq!(reading.month, 10);
        assert_eq!(reading.day, 19);
        assert_eq!(reading.weekday, 1, "Monday should be weekday 1 (Sunday = 0)");
        assert_eq!((reading.hour, reading.minute, reading.second), (21, 5, 9));
    }

    #[test]
    fn test_sunday_is_zero() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date");
        assert_eq!(ClockReading::from(dt).weekday, 0);
    }

    #[test]
    fn test_fixed_clock_returns_reading() {
        let reading = ClockReading {
            year: 2026,
            month: 13,
            day: 1,
            weekday: 9,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(FixedClock(reading).now(), reading, "fixed clock must not validate registers");
    }

    #[test]
    fn test_boxed_clock_delegates() {
        let reading = ClockReading {
            year: 2026,
            ..ClockReading::default()
        };
        let clock: Box<dyn Clock> = Box::new(FixedClock(reading));
        assert_eq!(clock.now(), reading);
    }
}
