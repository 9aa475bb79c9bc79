//! Orbit weights from the GRAAL orbit dependency table

use minaa_core::ORBIT_COUNT;
use std::sync::LazyLock;

/// Number of orbits each orbit depends on, including itself.
pub const ORBIT_DEPENDENCIES: [f64; ORBIT_COUNT] = [
    1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 3.0, 3.0, 4.0, 3.0,
    4.0, 4.0, 4.0, 4.0, 3.0, 4.0, 6.0, 5.0, 4.0, 5.0,
    6.0, 6.0, 4.0, 4.0, 4.0, 5.0, 7.0, 4.0, 6.0, 6.0,
    7.0, 4.0, 6.0, 6.0, 6.0, 5.0, 6.0, 7.0, 7.0, 5.0,
    7.0, 6.0, 7.0, 6.0, 5.0, 5.0, 6.0, 8.0, 7.0, 6.0,
    6.0, 8.0, 6.0, 9.0, 5.0, 6.0, 4.0, 6.0, 6.0, 7.0,
    8.0, 6.0, 6.0, 8.0, 7.0, 6.0, 7.0, 7.0, 8.0, 5.0,
    6.0, 6.0, 4.0,
];

static WEIGHTS: LazyLock<[f64; ORBIT_COUNT]> = LazyLock::new(|| {
    let scale = (ORBIT_COUNT as f64).log10();
    ORBIT_DEPENDENCIES.map(|deps| 1.0 - deps.log10() / scale)
});

static TOTAL_WEIGHT: LazyLock<f64> = LazyLock::new(|| WEIGHTS.iter().sum());

/// Weight of an orbit in (0, 1]. Orbits with more dependencies weigh less.
///
/// Panics if `orbit >= 73`.
pub fn weight(orbit: usize) -> f64 {
    WEIGHTS[orbit]
}

/// Sum of all 73 orbit weights.
pub fn total_weight() -> f64 {
    *TOTAL_WEIGHT
}
