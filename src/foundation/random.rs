//! Injectable pseudo-random source for the glitch filters.
//!
//! Filters take any `rand::Rng`; this module only picks the concrete generator used by sessions.
use rand_xoshiro::Xoshiro256StarStar;
use rand_xoshiro::rand_core::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generator used by transition sessions.
pub type FxRng = Xoshiro256StarStar;

/// Deterministic generator for reproducible frames.
pub fn seeded_rng(seed: u64) -> FxRng {
    FxRng::seed_from_u64(seed)
}

/// Generator seeded from the wall clock, for production sessions.
pub fn time_seeded_rng() -> FxRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15);
    seeded_rng(seed)
}
