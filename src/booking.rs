use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::models::{ClassCatalogEntry, PricingOption};

pub const INCOMPLETE_SELECTION: &str = "Please select both date and time";

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct BookingSelection {
    pub pricing_index: usize,
    #[schema(value_type = Option<String>, format = "date", example = "2026-10-21")]
    pub date: Option<NaiveDate>,
    #[schema(example = "11:00")]
    pub time: String,
}

impl BookingSelection {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            pricing_index: 0,
            date: Some(today),
            time: String::new(),
        }
    }

    fn is_complete(&self) -> bool {
        self.date.is_some() && !self.time.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BookingOutcome {
    Confirmed { message: String },
    Rejected { message: String },
}

impl BookingOutcome {
    pub fn message(&self) -> &str {
        match self {
            BookingOutcome::Confirmed { message } | BookingOutcome::Rejected { message } => message,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }
}

/// Selection state of one class-detail view.
///
/// Callers are trusted to pass in-bounds pricing indices, weekday-legal dates
/// and offered time labels; only completeness is checked on commit.
#[derive(Debug, Clone)]
pub struct BookingController {
    entry: Arc<ClassCatalogEntry>,
    selection: BookingSelection,
}

impl BookingController {
    pub fn new(entry: Arc<ClassCatalogEntry>, today: NaiveDate) -> Self {
        Self {
            entry,
            selection: BookingSelection::new(today),
        }
    }

    pub fn entry(&self) -> &ClassCatalogEntry {
        &self.entry
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn selected_pricing(&self) -> Option<&PricingOption> {
        self.entry.pricing_options.get(self.selection.pricing_index)
    }

    pub fn select_pricing_option(&mut self, index: usize) {
        debug!(index, "pricing option selected");
        self.selection.pricing_index = index;
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        debug!(?date, "date selected");
        self.selection.date = date;
    }

    pub fn select_time(&mut self, label: impl Into<String>) {
        self.selection.time = label.into();
        debug!(time = %self.selection.time, "time selected");
    }

    pub fn commit_booking(&self) -> BookingOutcome {
        match self.selection.date {
            Some(date) if self.selection.is_complete() => BookingOutcome::Confirmed {
                message: format!(
                    "Booking confirmed for {} on {} at {}",
                    self.entry.title,
                    long_date(date),
                    self.selection.time
                ),
            },
            _ => BookingOutcome::Rejected {
                message: INCOMPLETE_SELECTION.to_string(),
            },
        }
    }
}

/// Long human form, e.g. `October 21st, 2026`.
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}
