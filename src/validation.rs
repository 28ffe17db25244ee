use chrono::NaiveDate;

use crate::availability::{is_available, weekday_name};
use crate::error::ApiError;
use crate::models::ClassCatalogEntry;

pub fn validate_calendar_days(value: u8) -> Result<u8, ApiError> {
    if (1..=62).contains(&value) {
        Ok(value)
    } else {
        Err(ApiError::BadRequest("days must be between 1 and 62".into()))
    }
}

/// The calendar may start at most a year before or after `today`.
pub fn validate_calendar_from(from: NaiveDate, today: NaiveDate) -> Result<NaiveDate, ApiError> {
    if from.signed_duration_since(today).num_days().abs() <= 366 {
        Ok(from)
    } else {
        Err(ApiError::BadRequest("from must be within a year of today".into()))
    }
}

pub fn validate_pricing_index(entry: &ClassCatalogEntry, index: usize) -> Result<usize, ApiError> {
    if index < entry.pricing_options.len() {
        Ok(index)
    } else {
        Err(ApiError::BadRequest(format!(
            "pricing index must be below {}",
            entry.pricing_options.len()
        )))
    }
}

/// `None` clears the selection and always passes.
pub fn validate_date(
    entry: &ClassCatalogEntry,
    date: Option<NaiveDate>,
) -> Result<Option<NaiveDate>, ApiError> {
    match date {
        Some(date) if !is_available(date, &entry.availability.days) => Err(ApiError::BadRequest(
            format!("{} is not available for booking", weekday_name(date)),
        )),
        _ => Ok(date),
    }
}

pub fn validate_time(entry: &ClassCatalogEntry, label: String) -> Result<String, ApiError> {
    if entry.availability.offers_slot(&label) {
        Ok(label)
    } else {
        Err(ApiError::BadRequest(format!("{label:?} is not an offered time slot")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_validate_calendar_days() {
        assert!(validate_calendar_days(1).is_ok());
        assert!(validate_calendar_days(62).is_ok());
        assert!(validate_calendar_days(0).is_err());
        assert!(validate_calendar_days(63).is_err());
    }

    #[test]
    fn test_validate_calendar_from() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let next_year = NaiveDate::from_ymd_opt(2027, 10, 19).unwrap();
        let last_year = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        assert_eq!(validate_calendar_from(today, today).unwrap(), today);
        assert!(validate_calendar_from(next_year, today).is_ok());
        assert!(validate_calendar_from(last_year, today).is_ok());
        let too_far = NaiveDate::from_ymd_opt(2028, 1, 1).unwrap();
        assert!(validate_calendar_from(too_far, today).is_err());
        assert!(validate_calendar_from(NaiveDate::MAX, today).is_err());
        assert!(validate_calendar_from(NaiveDate::MIN, today).is_err());
    }

    #[test]
    fn test_validate_pricing_index() {
        let catalog = Catalog::sample();
        assert_eq!(validate_pricing_index(&catalog.entry, 2).unwrap(), 2);
        assert!(validate_pricing_index(&catalog.entry, 3).is_err());
        assert!(validate_pricing_index(&catalog.entry, 5).is_err());
    }

    #[test]
    fn test_validate_date() {
        let catalog = Catalog::sample();
        let friday = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(validate_date(&catalog.entry, Some(friday)).unwrap(), Some(friday));
        assert_eq!(validate_date(&catalog.entry, None).unwrap(), None);
        let err = validate_date(&catalog.entry, Some(tuesday)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg.contains("Tuesday")));
    }

    #[test]
    fn test_validate_time() {
        let catalog = Catalog::sample();
        assert_eq!(validate_time(&catalog.entry, "15:00".into()).unwrap(), "15:00");
        assert!(validate_time(&catalog.entry, "10:00".into()).is_err());
        assert!(validate_time(&catalog.entry, String::new()).is_err());
    }
}
