use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::models::enums::StoneLocation;
use crate::models::{ScanObservation, MAX_STONES};

/// Smallest simulated stone diameter.
pub const STONE_SIZE_MIN_MM: f64 = 2.0;
/// Upper bound (exclusive) of simulated stone diameter.
pub const STONE_SIZE_MAX_MM: f64 = 15.0;

/// Simulate an imaging result: 1 to 3 stones with uniform sizes, each at a
/// distinct location.
pub fn generate_scan_observation(rng: &mut dyn RngCore) -> ScanObservation {
    let count = rng.gen_range(1..=MAX_STONES);

    let stone_sizes_mm: Vec<f64> = (0..count)
        .map(|_| rng.gen_range(STONE_SIZE_MIN_MM..STONE_SIZE_MAX_MM))
        .collect();

    let stone_locations: Vec<StoneLocation> = StoneLocation::ALL
        .choose_multiple(rng, count)
        .copied()
        .collect();

    tracing::debug!(stone_count = count, "Generated mock scan observation");

    ScanObservation {
        stone_sizes_mm,
        stone_locations,
    }
}
