use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    AppState,
    availability::{CalendarDay, calendar},
    booking::BookingOutcome,
    error::ApiError,
    models::{ClassDetails, Review},
    validation::{
        validate_calendar_days, validate_calendar_from, validate_date, validate_pricing_index,
        validate_time,
    },
    views::ViewState,
};

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub from: Option<NaiveDate>,
    #[serde(default = "default_calendar_days")]
    pub days: u8,
}

fn default_calendar_days() -> u8 {
    31
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PricingRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DateRequest {
    #[schema(value_type = Option<String>, format = "date", example = "2026-10-21")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TimeRequest {
    #[schema(example = "11:00")]
    pub time: String,
}

#[utoipa::path(get, path = "/", tag = "class")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Class Booking API",
        "endpoints": {
            "/class": "Class details",
            "/class/reviews": "Class reviews",
            "/class/calendar": "Bookable dates",
            "/views": "Open a booking view"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "class")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "class")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/class",
    responses((status = 200, description = "Class details", body = ClassDetails)),
    tag = "class"
)]
pub async fn get_class(State(state): State<AppState>) -> Json<ClassDetails> {
    Json(ClassDetails::new(&state.catalog.entry))
}

#[utoipa::path(
    get,
    path = "/class/reviews",
    responses((status = 200, description = "Class reviews", body = [Review])),
    tag = "class"
)]
pub async fn get_reviews(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.catalog.reviews.as_ref().clone())
}

#[utoipa::path(
    get,
    path = "/class/calendar",
    params(
        ("from" = Option<String>, Query, description = "First date, within a year of today"),
        ("days" = Option<u8>, Query, description = "Number of days (1-62), defaults to 31")
    ),
    responses(
        (status = 200, description = "Dates with availability flags", body = [CalendarDay]),
        (status = 400, description = "Invalid day count or start date")
    ),
    tag = "class"
)]
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<CalendarDay>>, ApiError> {
    let days = validate_calendar_days(query.days)?;
    let today = state.settings.today();
    let from = validate_calendar_from(query.from.unwrap_or(today), today)?;
    Ok(Json(calendar(from, days, &state.catalog.entry.availability)))
}

#[utoipa::path(
    post,
    path = "/views",
    responses(
        (status = 201, description = "View opened", body = ViewState),
        (status = 503, description = "Too many open views")
    ),
    tag = "booking"
)]
pub async fn open_view(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let view = state.views.open(state.settings.today())?;
    Ok((StatusCode::CREATED, Json(view)))
}

#[utoipa::path(
    get,
    path = "/views/{id}",
    params(("id" = Uuid, Path, description = "View id")),
    responses(
        (status = 200, description = "Current selection", body = ViewState),
        (status = 404, description = "Unknown view")
    ),
    tag = "booking"
)]
pub async fn get_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ViewState>, ApiError> {
    Ok(Json(state.views.state(id)?))
}

#[utoipa::path(
    put,
    path = "/views/{id}/pricing",
    params(("id" = Uuid, Path, description = "View id")),
    request_body = PricingRequest,
    responses(
        (status = 200, description = "Updated selection", body = ViewState),
        (status = 400, description = "Pricing index out of range"),
        (status = 404, description = "Unknown view")
    ),
    tag = "booking"
)]
pub async fn select_pricing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PricingRequest>,
) -> Result<Json<ViewState>, ApiError> {
    let index = validate_pricing_index(&state.catalog.entry, body.index)?;
    let view = state.views.with_view(id, |controller| {
        controller.select_pricing_option(index);
        ViewState::new(id, controller)
    })?;
    Ok(Json(view))
}

#[utoipa::path(
    put,
    path = "/views/{id}/date",
    params(("id" = Uuid, Path, description = "View id")),
    request_body = DateRequest,
    responses(
        (status = 200, description = "Updated selection", body = ViewState),
        (status = 400, description = "Date falls on an unavailable weekday"),
        (status = 404, description = "Unknown view")
    ),
    tag = "booking"
)]
pub async fn select_date(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DateRequest>,
) -> Result<Json<ViewState>, ApiError> {
    let date = validate_date(&state.catalog.entry, body.date)?;
    let view = state.views.with_view(id, |controller| {
        controller.select_date(date);
        ViewState::new(id, controller)
    })?;
    Ok(Json(view))
}

#[utoipa::path(
    put,
    path = "/views/{id}/time",
    params(("id" = Uuid, Path, description = "View id")),
    request_body = TimeRequest,
    responses(
        (status = 200, description = "Updated selection", body = ViewState),
        (status = 400, description = "Time is not an offered slot"),
        (status = 404, description = "Unknown view")
    ),
    tag = "booking"
)]
pub async fn select_time(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<TimeRequest>,
) -> Result<Json<ViewState>, ApiError> {
    let time = validate_time(&state.catalog.entry, body.time)?;
    let view = state.views.with_view(id, |controller| {
        controller.select_time(time);
        ViewState::new(id, controller)
    })?;
    Ok(Json(view))
}

#[utoipa::path(
    post,
    path = "/views/{id}/commit",
    params(("id" = Uuid, Path, description = "View id")),
    responses(
        (status = 200, description = "Confirmation or rejection notice", body = BookingOutcome),
        (status = 404, description = "Unknown view")
    ),
    tag = "booking"
)]
pub async fn commit_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingOutcome>, ApiError> {
    let outcome = state.views.with_view(id, |controller| controller.commit_booking())?;
    info!(
        view = %id,
        confirmed = outcome.is_confirmed(),
        message = outcome.message(),
        "booking committed"
    );
    Ok(Json(outcome))
}

#[utoipa::path(
    delete,
    path = "/views/{id}",
    params(("id" = Uuid, Path, description = "View id")),
    responses(
        (status = 204, description = "View closed"),
        (status = 404, description = "Unknown view")
    ),
    tag = "booking"
)]
pub async fn close_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.views.close(id)?;
    Ok(StatusCode::NO_CONTENT)
}
