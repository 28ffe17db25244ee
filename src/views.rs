use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::availability::is_available;
use crate::booking::{BookingController, BookingSelection};
use crate::models::{ClassCatalogEntry, PricingOption};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("View {0} not found")]
    NotFound(Uuid),
    #[error("Too many open views")]
    Full,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct ViewState {
    pub id: Uuid,
    pub selection: BookingSelection,
    pub pricing: Option<PricingOption>,
    /// Whether the selected date falls on an available weekday. A fresh view
    /// starts on today's date, which may not.
    pub date_available: bool,
}

impl ViewState {
    pub fn new(id: Uuid, controller: &BookingController) -> Self {
        let selection = controller.selection().clone();
        let date_available = selection
            .date
            .is_some_and(|date| is_available(date, &controller.entry().availability.days));
        Self {
            id,
            selection,
            pricing: controller.selected_pricing().cloned(),
            date_available,
        }
    }
}

/// Open class-detail views, each owning its own booking selection.
pub struct ViewRegistry {
    entry: Arc<ClassCatalogEntry>,
    views: Mutex<HashMap<Uuid, BookingController>>,
    max_views: usize,
}

impl ViewRegistry {
    pub fn new(entry: Arc<ClassCatalogEntry>, max_views: usize) -> Self {
        Self {
            entry,
            views: Mutex::new(HashMap::new()),
            max_views,
        }
    }

    pub fn open(&self, today: NaiveDate) -> Result<ViewState, ViewError> {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        if views.len() >= self.max_views {
            return Err(ViewError::Full);
        }
        let id = Uuid::new_v4();
        let controller = BookingController::new(Arc::clone(&self.entry), today);
        let state = ViewState::new(id, &controller);
        views.insert(id, controller);
        info!(view = %id, open = views.len(), "view opened");
        Ok(state)
    }

    /// Runs `f` against the view's controller while holding the registry lock.
    pub fn with_view<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut BookingController) -> R,
    ) -> Result<R, ViewError> {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        let controller = views.get_mut(&id).ok_or(ViewError::NotFound(id))?;
        Ok(f(controller))
    }

    pub fn state(&self, id: Uuid) -> Result<ViewState, ViewError> {
        self.with_view(id, |controller| ViewState::new(id, controller))
    }

    pub fn close(&self, id: Uuid) -> Result<(), ViewError> {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        views.remove(&id).ok_or(ViewError::NotFound(id))?;
        info!(view = %id, open = views.len(), "view closed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.views.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
