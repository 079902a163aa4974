//! HTTP host for the spotlight: the UI talks to one shared navigator through
//! these routes. Each request finishes its cursor update before the next one
//! takes the lock.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::SpotlightConfig;
use crate::effects::{DeepLinkNavigator, EffectDispatcher, MemoryClipboard, Notice, NoticeLog};
use crate::error::SpotlightError;
use crate::input::{handle_key, Key, KeyOutcome};
use crate::rank::{self, RankedEntry};
use crate::spotlight::{Spotlight, SpotlightEffect, Step};
use crate::synth::{self, ScoreSeries};
use crate::view::SpotlightView;

const NOTICE_CAPACITY: usize = 50;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    spotlight: Arc<Mutex<Spotlight>>,
    navigator: Arc<DeepLinkNavigator>,
    clipboard: Arc<MemoryClipboard>,
    notices: Arc<NoticeLog>,
}

impl AppState {
    /// Rank the configured catalog once and wire the built-in collaborators.
    pub fn new(cfg: SpotlightConfig) -> Result<Self, SpotlightError> {
        let spotlight = Spotlight::from_catalog(&cfg.catalog)?;
        info!(
            target: "spotlight",
            entries = spotlight.len(),
            top = spotlight.current().map(|e| e.identifier.as_str()).unwrap_or("-"),
            "spotlight ready"
        );
        Ok(Self {
            catalog: Arc::new(cfg.catalog),
            spotlight: Arc::new(Mutex::new(spotlight)),
            navigator: Arc::new(DeepLinkNavigator::new(cfg.detail_base)),
            clipboard: Arc::new(MemoryClipboard::default()),
            notices: Arc::new(NoticeLog::with_capacity(NOTICE_CAPACITY)),
        })
    }

    fn dispatch(&self, effect: &SpotlightEffect) -> bool {
        EffectDispatcher {
            clipboard: self.clipboard.as_ref(),
            navigator: self.navigator.as_ref(),
            notifier: self.notices.as_ref(),
        }
        .dispatch(effect)
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/spotlight", get(spotlight_view))
        .route("/spotlight/key", post(spotlight_key))
        .route("/spotlight/advance", post(spotlight_advance))
        .route("/spotlight/activate", post(spotlight_activate))
        .route("/spotlight/copy", post(spotlight_copy))
        .route("/ranking", get(ranking))
        .route("/scores", get(scores))
        .route("/series/{identifier}", get(series))
        .route("/notices", get(notices))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Maps core errors onto HTTP statuses with a small JSON body.
pub struct ApiError(SpotlightError);

impl From<SpotlightError> for ApiError {
    fn from(e: SpotlightError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self.0 {
            SpotlightError::EmptyCatalog => (StatusCode::NOT_FOUND, "empty catalog".to_string()),
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

#[derive(Serialize)]
struct ActionResp {
    #[serde(flatten)]
    outcome: KeyOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<SpotlightView>,
}

impl AppState {
    /// A panic in another handler leaves the cursor valid, so a poisoned lock
    /// is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Spotlight> {
        self.spotlight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one transition and capture the resulting view under a single guard.
    fn transition<T>(&self, f: impl FnOnce(&mut Spotlight) -> T) -> (T, Option<SpotlightView>) {
        let mut guard = self.lock();
        let out = f(&mut *guard);
        let view = SpotlightView::of(&guard).ok();
        (out, view)
    }

    /// Deliver an effect (if any) outside the lock and attach the view taken
    /// with the transition.
    fn respond(&self, outcome: KeyOutcome, view: Option<SpotlightView>) -> ActionResp {
        let (delivered, link) = match &outcome {
            KeyOutcome::Effect { effect } => {
                let ok = self.dispatch(effect);
                let link = match effect {
                    SpotlightEffect::NavigateToDetail { identifier } if ok => {
                        Some(self.navigator.link_for(identifier))
                    }
                    _ => None,
                };
                (Some(ok), link)
            }
            _ => (None, None),
        };
        ActionResp {
            outcome,
            delivered,
            link,
            view,
        }
    }
}

async fn spotlight_view(State(state): State<AppState>) -> Result<Json<SpotlightView>, ApiError> {
    let guard = state.lock();
    Ok(Json(SpotlightView::of(&guard)?))
}

#[derive(Deserialize)]
struct KeyReq {
    key: String,
    #[serde(default)]
    focused: bool,
}

async fn spotlight_key(State(state): State<AppState>, Json(body): Json<KeyReq>) -> Json<ActionResp> {
    let (outcome, view) =
        state.transition(|s| handle_key(s, Key::parse(&body.key), &body.focused));
    Json(state.respond(outcome, view))
}

#[derive(Deserialize)]
struct AdvanceReq {
    step: i32,
}

async fn spotlight_advance(
    State(state): State<AppState>,
    Json(body): Json<AdvanceReq>,
) -> Result<Json<ActionResp>, Response> {
    let step = Step::from_offset(body.step).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "step must be 1 or -1" })),
        )
            .into_response()
    })?;
    let (outcome, view) = state.transition(|s| {
        s.advance(step)
            .map_or(KeyOutcome::Ignored, |cursor| KeyOutcome::Moved { cursor })
    });
    Ok(Json(state.respond(outcome, view)))
}

async fn spotlight_activate(State(state): State<AppState>) -> Result<Json<ActionResp>, ApiError> {
    let (effect, view) = state.transition(|s| s.activate());
    let effect = effect.ok_or(SpotlightError::EmptyCatalog)?;
    Ok(Json(state.respond(KeyOutcome::Effect { effect }, view)))
}

async fn spotlight_copy(State(state): State<AppState>) -> Result<Json<ActionResp>, ApiError> {
    let (effect, view) = state.transition(|s| s.copy_identifier());
    let effect = effect.ok_or(SpotlightError::EmptyCatalog)?;
    Ok(Json(state.respond(KeyOutcome::Effect { effect }, view)))
}

async fn ranking(State(state): State<AppState>) -> Json<Vec<RankedEntry>> {
    Json(state.lock().entries().to_vec())
}

async fn scores(State(state): State<AppState>) -> Result<Json<BTreeMap<String, i32>>, ApiError> {
    Ok(Json(rank::baseline_score_map(&state.catalog)?))
}

#[derive(Serialize)]
struct SeriesOut {
    identifier: String,
    baseline: i32,
    series: ScoreSeries,
    delta: f64,
}

async fn series(Path(identifier): Path<String>) -> Result<Json<SeriesOut>, ApiError> {
    let s = synth::series(&identifier)?;
    Ok(Json(SeriesOut {
        baseline: synth::baseline_score(&identifier)?,
        delta: s.week_over_week_delta(),
        series: s,
        identifier,
    }))
}

async fn notices(State(state): State<AppState>) -> Json<Vec<Notice>> {
    Json(state.notices.snapshot_last_n(10))
}
