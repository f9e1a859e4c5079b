//! Track recommendation route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tunecast_core::error::CoreError;
use tunecast_core::recommend::{RecommendationContext, Track};
use tunecast_core::season::Season;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for `GET /recommend`.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// Season resolved from today's date.
    pub season: Season,
    /// Today's weather description, `null` when unavailable.
    pub weather: Option<String>,
    pub recommendations: Vec<Track>,
}

/// GET /recommend
///
/// Resolve the current season, fetch today's weather for the
/// configured city, and hand both to the recommendation selector.
/// An unreachable weather upstream degrades to `weather: null` rather
/// than failing the request -- the weather is advisory input, not a
/// hard dependency.
pub async fn recommend(State(state): State<AppState>) -> AppResult<Json<RecommendResponse>> {
    let month = Utc::now().month();
    let season = Season::for_month(month)
        .map_err(|e| AppError::Core(CoreError::Internal(e.to_string())))?;

    let weather = match state
        .weather
        .fetch_today(&state.config.weather_city_code)
        .await
    {
        Ok(weather) => weather,
        Err(e) => {
            tracing::warn!(error = %e, city_code = %state.config.weather_city_code,
                "Weather fetch failed, recommending without it");
            None
        }
    };

    let ctx = RecommendationContext {
        season,
        weather: weather.clone(),
    };
    let recommendations = state.selector.select(&ctx);

    Ok(Json(RecommendResponse {
        season,
        weather,
        recommendations,
    }))
}

/// Routes mounted at the root.
///
/// ```text
/// GET /recommend -> recommend
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/recommend", get(recommend))
}
