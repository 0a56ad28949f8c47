use crate::error::FlightError;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Minutes since midnight of the simulated day.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    pub const MIDNIGHT: Time = Time(0);
    pub const END_OF_DAY: Time = Time(23 * 60 + 59);

    pub const fn hm(hours: u64, minutes: u64) -> Time {
        Time(hours * 60 + minutes)
    }

    pub fn hours(self) -> u64 {
        self.0 / 60
    }

    pub fn minutes(self) -> u64 {
        self.0 % 60
    }

    /// Moves forward by `minutes`, never past 23:59.
    pub fn advance_clamped(self, minutes: u64) -> Time {
        (self + minutes).min(Time::END_OF_DAY)
    }
}

impl FromStr for Time {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FlightError::InvalidTime(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: u64 = hh.parse().map_err(|_| invalid())?;
        let minutes: u64 = mm.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }
        Ok(Time::hm(hours, minutes))
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Time(self.0 + rhs)
    }
}

/// Minutes elapsed from `rhs` to `self`, zero if `rhs` is later.
impl Sub<Time> for Time {
    type Output = u64;

    fn sub(self, rhs: Time) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_idempotent() {
        let first: Time = "09:05".parse().unwrap();
        let second: Time = "09:05".parse().unwrap();
        assert_eq!(first, second);
        assert_eq!(Time::hm(9, 5), first);
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(Ok(Time::MIDNIGHT), "00:00".parse());
        assert_eq!(Ok(Time::END_OF_DAY), "23:59".parse());
        assert_eq!(Err(FlightError::InvalidTime("24:00".into())), "24:00".parse::<Time>());
        assert!("12:60".parse::<Time>().is_err());
        assert!("9:05".parse::<Time>().is_err());
        assert!("09-05".parse::<Time>().is_err());
        assert!("0a:15".parse::<Time>().is_err());
        assert!("+1:15".parse::<Time>().is_err());
        assert!("".parse::<Time>().is_err());
    }

    #[test]
    fn test_ordering_follows_clock() {
        let early: Time = "08:59".parse().unwrap();
        let late: Time = "09:00".parse().unwrap();
        assert!(early < late);
        assert_eq!(1, late - early);
        assert_eq!(0, early - late);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!("07:03", Time::hm(7, 3).to_string());
        assert_eq!("23:59", Time::END_OF_DAY.to_string());
    }

    #[test]
    fn test_advance_clamps_at_end_of_day() {
        assert_eq!(Time::hm(10, 1), Time::hm(10, 0).advance_clamped(1));
        assert_eq!(Time::END_OF_DAY, Time::hm(23, 58).advance_clamped(5));
        assert_eq!(Time::END_OF_DAY, Time::END_OF_DAY.advance_clamped(1));
    }
}
