//! Week bucket convention

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::Deserialize;
use std::str::FromStr;

/// First day of a calendar week. Monday is the ISO 8601 convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Truncate a timestamp to the first day of the week containing it
    pub fn week_of(&self, timestamp: NaiveDateTime) -> NaiveDate {
        let date = timestamp.date();
        let days_back = (date.weekday().num_days_from_monday() + 7
            - self.weekday().num_days_from_monday())
            % 7;
        date - Duration::days(days_back as i64)
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "tuesday" | "tue" => Ok(WeekStart::Tuesday),
            "wednesday" | "wed" => Ok(WeekStart::Wednesday),
            "thursday" | "thu" => Ok(WeekStart::Thursday),
            "friday" | "fri" => Ok(WeekStart::Friday),
            "saturday" | "sat" => Ok(WeekStart::Saturday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            _ => Err(format!(
                "Invalid week start: '{}'. Valid values are: monday, tuesday, wednesday, thursday, friday, saturday, sunday",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_monday_week_start() {
        // 2024-01-03 is a Wednesday
        let week = WeekStart::Monday.week_of(at(2024, 1, 3, 14));
        assert_eq!(week, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_monday_is_its_own_week_start() {
        let week = WeekStart::Monday.week_of(at(2024, 1, 8, 0));
        assert_eq!(week, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday_week() {
        let week = WeekStart::Monday.week_of(at(2024, 1, 7, 23));
        assert_eq!(week, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_sunday_week_start() {
        let week = WeekStart::Sunday.week_of(at(2024, 1, 3, 9));
        assert_eq!(week, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(
            WeekStart::Sunday.week_of(at(2024, 1, 7, 9)),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
    }

    #[test]
    fn test_week_start_within_seven_days() {
        let start = at(2024, 2, 26, 12);
        for offset in 0..30 {
            let timestamp = start + Duration::hours(offset * 13);
            for week_start in [WeekStart::Monday, WeekStart::Thursday, WeekStart::Sunday] {
                let week = week_start.week_of(timestamp);
                assert!(week <= timestamp.date());
                assert!(timestamp.date() - week < Duration::days(7));
                assert_eq!(week.weekday(), week_start.weekday());
            }
        }
    }

    #[test]
    fn test_parse_week_start() {
        assert_eq!(WeekStart::from_str("Monday").unwrap(), WeekStart::Monday);
        assert_eq!(WeekStart::from_str("sun").unwrap(), WeekStart::Sunday);
        assert!(WeekStart::from_str("someday").is_err());
    }
}
