//! Statistics configuration handling.
//!
//! Provides a typed interface for the knobs the aggregation functions take,
//! so a caller can keep them next to its own settings as JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

const DEFAULT_RECENT_GAMES_LIMIT: usize = 10;
const DEFAULT_LEADERBOARD_SIZE: usize = 5;
const DEFAULT_MIN_GAMES_FOR_AWARDS: u32 = 3;

/// Window sizes and thresholds for the statistics views.
///
/// # Example JSON Config
///
/// ```json
/// {
///   "recent_games_limit": 20,
///   "leaderboard_size": 10,
///   "min_games_for_awards": 5
/// }
/// ```
///
/// Every field is optional; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// How many games the recent-game feeds keep.
    #[serde(default = "default_recent_games_limit")]
    pub recent_games_limit: usize,

    /// Entries per leaderboard.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Finished games a player needs before the luckiest and most-consistent
    /// awards consider them.
    #[serde(default = "default_min_games_for_awards")]
    pub min_games_for_awards: u32,
}

fn default_recent_games_limit() -> usize {
    DEFAULT_RECENT_GAMES_LIMIT
}

fn default_leaderboard_size() -> usize {
    DEFAULT_LEADERBOARD_SIZE
}

fn default_min_games_for_awards() -> u32 {
    DEFAULT_MIN_GAMES_FOR_AWARDS
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            recent_games_limit: DEFAULT_RECENT_GAMES_LIMIT,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            min_games_for_awards: DEFAULT_MIN_GAMES_FOR_AWARDS,
        }
    }
}

impl StatsConfig {
    /// Create a StatsConfig from an optional JSON value.
    ///
    /// Anything but a JSON object yields the defaults. Inside an object each
    /// field is read on its own, so a missing or malformed value only resets
    /// that field.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        let Some(JsonValue::Object(map)) = config else {
            return Self::default();
        };
        Self {
            recent_games_limit: field_or(map.get("recent_games_limit"), DEFAULT_RECENT_GAMES_LIMIT),
            leaderboard_size: field_or(map.get("leaderboard_size"), DEFAULT_LEADERBOARD_SIZE),
            min_games_for_awards: field_or(
                map.get("min_games_for_awards"),
                DEFAULT_MIN_GAMES_FOR_AWARDS,
            ),
        }
    }
}

fn field_or<T: DeserializeOwned>(value: Option<&JsonValue>, default: T) -> T {
    value
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or(default)
}
