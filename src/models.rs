use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum DeliveryMode {
    #[serde(rename = "In-person")]
    InPerson,
    #[serde(rename = "Online")]
    Online,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PricingOption {
    #[schema(example = "1-on-1 Session")]
    pub label: String,
    #[schema(example = 800)]
    pub price: u32,
    #[schema(example = "1 hour")]
    pub duration: String,
}

/// Weekday names and time-of-day labels a class may be booked on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Availability {
    #[schema(example = json!(["Monday", "Wednesday"]))]
    pub days: Vec<String>,
    #[schema(example = json!(["09:00", "11:00"]))]
    pub time_slots: Vec<String>,
}

impl Availability {
    pub fn offers_slot(&self, label: &str) -> bool {
        self.time_slots.iter().any(|slot| slot == label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ClassCatalogEntry {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub mode: DeliveryMode,
    /// Base hourly price in rupees.
    pub price: u32,
    pub rating: f32,
    pub review_count: u32,
    pub skill: String,
    pub description: String,
    pub instructor_bio: String,
    pub experience: String,
    pub pricing_options: Vec<PricingOption>,
    pub availability: Availability,
}

impl ClassCatalogEntry {
    pub fn experience_lines(&self) -> Vec<&str> {
        self.experience
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Catalog entry as the page shows it, with the experience log split into lines.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct ClassDetails {
    #[serde(flatten)]
    pub entry: ClassCatalogEntry,
    pub experience_lines: Vec<String>,
}

impl ClassDetails {
    pub fn new(entry: &ClassCatalogEntry) -> Self {
        Self {
            experience_lines: entry
                .experience_lines()
                .into_iter()
                .map(String::from)
                .collect(),
            entry: entry.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Review {
    pub id: u32,
    pub name: String,
    pub rating: u8,
    #[schema(example = "2023-05-15")]
    pub date: String,
    pub comment: String,
}
