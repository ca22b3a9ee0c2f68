use std::fmt;

use serde::{Deserialize, Serialize};
use time::Duration;

/// Coarse game length for display: minutes below an hour, hours and minutes above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum DurationBucket {
    Minutes { minutes: u32 },
    Hours { hours: u32, minutes: u32 },
}

impl DurationBucket {
    /// Negative durations count as zero.
    pub fn from_duration(duration: Duration) -> Self {
        let total = u32::try_from(duration.whole_minutes().max(0)).unwrap_or(u32::MAX);
        if total < 60 {
            DurationBucket::Minutes { minutes: total }
        } else {
            DurationBucket::Hours {
                hours: total / 60,
                minutes: total % 60,
            }
        }
    }

    pub fn total_minutes(&self) -> u32 {
        match *self {
            DurationBucket::Minutes { minutes } => minutes,
            DurationBucket::Hours { hours, minutes } => {
                hours.saturating_mul(60).saturating_add(minutes)
            }
        }
    }
}

fn unit(n: u32, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

/// English, plural-aware. Localized text belongs to the presentation layer.
impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DurationBucket::Minutes { minutes } => f.write_str(&unit(minutes, "minute")),
            DurationBucket::Hours { hours, minutes: 0 } => f.write_str(&unit(hours, "hour")),
            DurationBucket::Hours { hours, minutes } => {
                write!(f, "{} {}", unit(hours, "hour"), unit(minutes, "minute"))
            }
        }
    }
}
