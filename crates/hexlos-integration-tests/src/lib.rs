//! Shared fixtures for the hexlos integration tests.

use hexlos_grid::GridPoint;
use hexlos_sight::LosConfig;
use proptest::prelude::*;

/// Install a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaulting to `hexlos_sight=debug` so traced queries
/// show up in the output of failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexlos_sight=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Hexagon centers within `radius` grid units of the origin.
pub fn hexagon_center(radius: i64) -> impl Strategy<Value = GridPoint> {
    let half = radius / 2;
    (-half..=half, -half..=half).prop_map(|(m, n)| {
        // centers have both coordinates even and congruent mod 4
        let n = if (m - n).rem_euclid(2) == 0 { n } else { n + 1 };
        GridPoint::new(2 * m, 2 * n)
    })
}

/// Every combination of the two corner switches.
pub fn any_config() -> impl Strategy<Value = LosConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(expanded, middle)| {
        LosConfig::default()
            .with_corner_expanded(expanded)
            .with_middle_edge_on_corner(middle)
    })
}
