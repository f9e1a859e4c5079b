//! Recommendation selection seam.
//!
//! The season and today's weather are explicit inputs to the selector
//! so a mood/season/weather-aware strategy can be plugged in later.
//! The shipped [`StaticPlaylist`] ignores them and returns a fixed
//! track list.

use serde::{Deserialize, Serialize};

use crate::season::Season;

/// One recommended track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub external_url: String,
}

/// Everything the selector gets to base its choice on.
#[derive(Debug, Clone)]
pub struct RecommendationContext {
    /// Season resolved from the current month.
    pub season: Season,
    /// Today's weather description, `None` when the upstream forecast
    /// was unavailable or had no entry for today.
    pub weather: Option<String>,
}

/// Strategy seam for picking tracks from a context.
pub trait RecommendationSelector: Send + Sync {
    /// Select the tracks to recommend. Always returns at least one track.
    fn select(&self, ctx: &RecommendationContext) -> Vec<Track>;
}

/// Fixed-catalog selector: the same tracks regardless of context.
#[derive(Debug, Clone)]
pub struct StaticPlaylist {
    tracks: Vec<Track>,
}

impl StaticPlaylist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl Default for StaticPlaylist {
    /// The bundled demo playlist.
    fn default() -> Self {
        Self::new(vec![Track {
            title: "Clair de Lune".to_string(),
            artist: "Claude Debussy".to_string(),
            external_url: "https://open.spotify.com/track/5aBxf8IVYCQMVmPWBohZLy".to_string(),
        }])
    }
}

impl RecommendationSelector for StaticPlaylist {
    fn select(&self, _ctx: &RecommendationContext) -> Vec<Track> {
        self.tracks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(season: Season, weather: Option<&str>) -> RecommendationContext {
        RecommendationContext {
            season,
            weather: weather.map(str::to_string),
        }
    }

    #[test]
    fn test_static_playlist_ignores_context() {
        let selector = StaticPlaylist::default();

        let sunny = selector.select(&ctx(Season::Summer, Some("sunny")));
        let unknown = selector.select(&ctx(Season::Winter, None));

        assert_eq!(sunny, unknown, "selection must not depend on context");
        assert!(!sunny.is_empty(), "selector must return at least one track");
    }

    #[test]
    fn test_custom_playlist_is_returned_verbatim() {
        let track = Track {
            title: "Singin' in the Rain".to_string(),
            artist: "Gene Kelly".to_string(),
            external_url: "https://example.com/singin".to_string(),
        };
        let selector = StaticPlaylist::new(vec![track.clone()]);

        let picked = selector.select(&ctx(Season::Spring, Some("rain")));
        assert_eq!(picked, vec![track]);
    }

    #[test]
    fn test_track_serializes_with_expected_fields() {
        let track = Track {
            title: "t".to_string(),
            artist: "a".to_string(),
            external_url: "u".to_string(),
        };
        let json = serde_json::to_value(&track).expect("serialization should succeed");
        assert_eq!(json["title"], "t");
        assert_eq!(json["artist"], "a");
        assert_eq!(json["external_url"], "u");
    }
}
