use std::env;

use proptest::prelude::ProptestConfig;

/// Proptest config shared by the domain and stats property tests.
///
/// Raise the case count locally with `PROPTEST_CASES=800`.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32); // Low default for fast CI

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
