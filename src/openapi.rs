use utoipa::OpenApi;

use crate::availability::CalendarDay;
use crate::booking::{BookingOutcome, BookingSelection};
use crate::handlers::{DateRequest, PricingRequest, TimeRequest};
use crate::models::{
    Availability, ClassCatalogEntry, ClassDetails, DeliveryMode, PricingOption, Review,
};
use crate::views::ViewState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::get_class,
        crate::handlers::get_reviews,
        crate::handlers::get_calendar,
        crate::handlers::open_view,
        crate::handlers::get_view,
        crate::handlers::select_pricing,
        crate::handlers::select_date,
        crate::handlers::select_time,
        crate::handlers::commit_booking,
        crate::handlers::close_view
    ),
    components(schemas(
        ClassCatalogEntry,
        ClassDetails,
        DeliveryMode,
        PricingOption,
        Availability,
        Review,
        CalendarDay,
        BookingSelection,
        BookingOutcome,
        ViewState,
        PricingRequest,
        DateRequest,
        TimeRequest
    )),
    tags(
        (name = "class", description = "Class details and availability"),
        (name = "booking", description = "Per-view booking selection")
    ),
)]
pub struct ApiDoc;
