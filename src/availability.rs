use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Availability;

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct CalendarDay {
    #[schema(value_type = String, format = "date", example = "2026-10-21")]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "Wednesday")]
    pub weekday: &'static str,
    pub available: bool,
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A date is bookable iff its weekday name is one of `days`.
pub fn is_available<S: AsRef<str>>(date: NaiveDate, days: &[S]) -> bool {
    let name = weekday_name(date);
    days.iter().any(|day| day.as_ref() == name)
}

/// Stops early if the range runs past the last representable date.
pub fn calendar(from: NaiveDate, count: u8, availability: &Availability) -> Vec<CalendarDay> {
    (0..u64::from(count))
        .map_while(|offset| from.checked_add_days(Days::new(offset)))
        .map(|date| CalendarDay {
            date,
            weekday: weekday_name(date),
            available: is_available(date, &availability.days),
        })
        .collect()
}
