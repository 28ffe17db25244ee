use std::path::Path;
use std::sync::Arc;

use config::{Config, ConfigError, File, FileFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::{Availability, ClassCatalogEntry, DeliveryMode, PricingOption, Review};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Config(#[from] ConfigError),
    #[error("Class must offer at least one pricing option")]
    NoPricingOptions,
    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),
}

/// Read-only data behind the class-detail page.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub entry: Arc<ClassCatalogEntry>,
    pub reviews: Arc<Vec<Review>>,
}

#[derive(Deserialize)]
struct CatalogFile {
    class: ClassCatalogEntry,
    #[serde(default)]
    reviews: Vec<Review>,
}

static SAMPLE: Lazy<Catalog> = Lazy::new(|| Catalog {
    entry: Arc::new(sample_entry()),
    reviews: Arc::new(sample_reviews()),
});

impl Catalog {
    pub fn new(entry: ClassCatalogEntry, reviews: Vec<Review>) -> Result<Self, CatalogError> {
        check_entry(&entry)?;
        Ok(Self {
            entry: Arc::new(entry),
            reviews: Arc::new(reviews),
        })
    }

    pub fn sample() -> Self {
        SAMPLE.clone()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogError> {
        let source = File::new(&path.to_string_lossy(), FileFormat::Toml);
        let file: CatalogFile = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        info!(path = %path.display(), title = %file.class.title, "loaded class catalog");
        Self::new(file.class, file.reviews)
    }

    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_toml_file(Path::new(path)),
            None => Ok(Self::sample()),
        }
    }
}

fn check_entry(entry: &ClassCatalogEntry) -> Result<(), CatalogError> {
    if entry.pricing_options.is_empty() {
        return Err(CatalogError::NoPricingOptions);
    }
    if let Some(day) = entry
        .availability
        .days
        .iter()
        .find(|day| !WEEKDAYS.contains(&day.as_str()))
    {
        return Err(CatalogError::UnknownWeekday(day.clone()));
    }
    Ok(())
}

fn sample_entry() -> ClassCatalogEntry {
    ClassCatalogEntry {
        id: 1,
        title: "Advanced Tennis Techniques".to_string(),
        instructor: "Aarav Sharma".to_string(),
        mode: DeliveryMode::InPerson,
        price: 800,
        rating: 4.8,
        review_count: 24,
        skill: "Tennis".to_string(),
        description: "Master advanced tennis techniques including topspin, slice, and serve \
                      variations. This course is designed for intermediate players looking to \
                      take their game to the next level with professional coaching."
            .to_string(),
        instructor_bio: "Professional tennis coach with 10 years of experience training national \
                         level players. Former state champion with a passion for teaching proper \
                         technique and strategy."
            .to_string(),
        experience: "10+ years coaching experience\nState Tennis Champion 2015-2017\nCertified by \
                     All India Tennis Association"
            .to_string(),
        pricing_options: vec![
            PricingOption {
                label: "1-on-1 Session".to_string(),
                price: 800,
                duration: "1 hour".to_string(),
            },
            PricingOption {
                label: "Group Session (3-5 people)".to_string(),
                price: 500,
                duration: "1.5 hours".to_string(),
            },
            PricingOption {
                label: "Package (5 sessions)".to_string(),
                price: 3500,
                duration: "1 hour each".to_string(),
            },
        ],
        availability: Availability {
            days: ["Monday", "Wednesday", "Friday", "Saturday"]
                .map(String::from)
                .to_vec(),
            time_slots: ["09:00", "11:00", "15:00", "17:00"]
                .map(String::from)
                .to_vec(),
        },
    }
}

fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            name: "Rahul Mehta".to_string(),
            rating: 5,
            date: "2023-05-15".to_string(),
            comment: "Aarav completely transformed my backhand technique. Highly recommended!"
                .to_string(),
        },
        Review {
            id: 2,
            name: "Priya Nair".to_string(),
            rating: 4,
            date: "2023-04-22".to_string(),
            comment: "Great instructor, very patient with beginners. The facilities could be \
                      better though."
                .to_string(),
        },
        Review {
            id: 3,
            name: "Vikram Singh".to_string(),
            rating: 5,
            date: "2023-03-10".to_string(),
            comment: "Best tennis coach in Delhi! My game has improved dramatically in just 5 \
                      sessions."
                .to_string(),
        },
    ]
}
