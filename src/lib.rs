pub mod availability;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod settings;
pub mod validation;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use handlers::{
    close_view, commit_booking, get_calendar, get_class, get_reviews, get_view, healthz_live,
    healthz_ready, open_view, root, select_date, select_pricing, select_time,
};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::Catalog;
use crate::openapi::ApiDoc;
use crate::settings::Settings;
use crate::views::ViewRegistry;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: Catalog,
    pub views: Arc<ViewRegistry>,
}

impl AppState {
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        let views = Arc::new(ViewRegistry::new(
            Arc::clone(&catalog.entry),
            settings.max_views,
        ));
        Self {
            settings,
            catalog,
            views,
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let catalog = Catalog::load(settings.catalog_path.as_deref())?;
    info!(
        class = %catalog.entry.title,
        timezone = %settings.timezone,
        "catalog ready"
    );

    let state = AppState::new(settings, catalog);
    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting Class Booking API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/class", get(get_class))
        .route("/class/reviews", get(get_reviews))
        .route("/class/calendar", get(get_calendar))
        .route("/views", post(open_view))
        .route("/views/{id}", get(get_view).delete(close_view))
        .route("/views/{id}/pricing", put(select_pricing))
        .route("/views/{id}/date", put(select_date))
        .route("/views/{id}/time", put(select_time))
        .route("/views/{id}/commit", post(commit_booking))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(CorsLayer::permissive()).layer(trace_layer)
}
