use std::cmp::Ordering;

use time::OffsetDateTime;

use crate::domain::GameId;

/// `part / whole` as a percentage; 0 when `whole` is 0.
pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole) * 100.0
    }
}

/// Mean of a running total; 0 when `count` is 0.
pub(crate) fn mean(total: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / f64::from(count)
    }
}

/// Population standard deviation; 0 for fewer than two values.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let avg = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

/// Newest first: completion time descending (unknown last), then game id descending.
pub(crate) fn newest_first(
    a: (Option<OffsetDateTime>, GameId),
    b: (Option<OffsetDateTime>, GameId),
) -> Ordering {
    b.0.cmp(&a.0).then(b.1.cmp(&a.1))
}

/// Earliest completion first; unknown completion times sort after every dated game.
pub(crate) fn oldest_first(
    a: (Option<OffsetDateTime>, GameId),
    b: (Option<OffsetDateTime>, GameId),
) -> Ordering {
    let by_time = match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_time.then(a.1.cmp(&b.1))
}
