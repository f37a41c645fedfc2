//! Preview router using Axum

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use heronav_core::scroll::normalize_fraction;
use heronav_core::{
    markup, CoreError, ElevationPolicy, HeaderConfig, HeaderContent, HeaderLayout, HeaderView,
    MenuEntry, PanelState, Presentation,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

/// Width assumed when a request does not specify one
pub const DEFAULT_PREVIEW_WIDTH: u32 = 1280;

/// Immutable header data shared by all handlers
#[derive(Debug, Clone)]
pub struct PreviewState {
    content: HeaderContent,
    policy: ElevationPolicy,
    breakpoint_px: u32,
}

impl PreviewState {
    pub fn from_config(config: &HeaderConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            content: config.content()?,
            policy: config.elevation,
            breakpoint_px: config.breakpoint_px,
        })
    }

    /// Layout for one simulated viewport / scroll / panel combination
    pub fn layout(&self, query: &LayoutQuery) -> HeaderLayout {
        let progress = query.scroll.and_then(normalize_fraction).unwrap_or(0.0);
        let presentation = Presentation::for_width(
            query.width.unwrap_or(DEFAULT_PREVIEW_WIDTH),
            self.breakpoint_px,
        );
        let panel = PanelState::from_open(query.open.unwrap_or(false));

        let elevated = self.policy.is_elevated(progress);
        HeaderView::new(&self.content).render(elevated, panel, presentation)
    }
}

/// Query string accepted by `/` and `/api/layout`
#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    pub width: Option<u32>,
    pub scroll: Option<f64>,
    pub open: Option<bool>,
}

/// Create the preview router
pub fn create_router(state: Arc<PreviewState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/menu", get(menu_handler))
        .route("/api/layout", get(layout_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn index_handler(
    State(state): State<Arc<PreviewState>>,
    Query(query): Query<LayoutQuery>,
) -> Html<String> {
    debug!(?query, "Rendering preview page");
    Html(markup::render_page(&state.layout(&query), "heronav preview"))
}

async fn menu_handler(State(state): State<Arc<PreviewState>>) -> Json<Vec<MenuEntry>> {
    Json(state.content.menu.entries().to_vec())
}

async fn layout_handler(
    State(state): State<Arc<PreviewState>>,
    Query(query): Query<LayoutQuery>,
) -> Json<HeaderLayout> {
    Json(state.layout(&query))
}

async fn health_handler() -> &'static str {
    "OK"
}
