use std::sync::Arc;

use tunecast_core::recommend::RecommendationSelector;
use tunecast_core::user::UserStore;

use crate::config::ServerConfig;
use crate::weather::WeatherClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Everything here is read-only after startup, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// User store the login handler authenticates against.
    pub users: Arc<dyn UserStore>,
    /// Strategy that turns a season/weather context into tracks.
    pub selector: Arc<dyn RecommendationSelector>,
    /// Client for the upstream weather forecast API.
    pub weather: WeatherClient,
}
